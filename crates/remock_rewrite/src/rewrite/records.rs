use crate::error::RewriteError;
use remock_ast::{Expression, Span, Statement};
use serde::{Deserialize, Serialize};

/// Assignment target that configures a return or throw value.
pub const RESULT_TARGET: &str = "result";
/// Assignment target that configures the expected invocation count.
pub const TIMES_TARGET: &str = "times";
/// Receiver-less invocation that chains further results onto the
/// current group instead of opening a new one.
pub const RETURNS_CONTINUATION: &str = "returns";

/// The leading mocked-call invocation of a group, pulled out of its
/// statement form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockInvocation {
    pub receiver: Option<Expression>,
    pub name: String,
    pub args: Vec<Expression>,
    pub span: Span,
}

/// One invocation group: the mocked call plus the configuration
/// statements attached to it, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectationGroup {
    pub invocation: MockInvocation,
    pub configuration: Vec<Statement>,
}

/// Semantic payload accumulated from one group's configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockInvocationPayload {
    /// Values to return or throw, in configuration order.
    pub results: Vec<Expression>,
    /// Expected call count, when a `times` assignment was present.
    pub invocation_count: Option<Expression>,
}

/// Scan a group's configuration statements into a payload, enforcing
/// the ordering grammar: a `times` assignment must come last, and it
/// cannot follow more than one accumulated result (a verification
/// statement counts exactly one call shape, while a single stub can
/// chain several return values).
pub fn build_payload(group: &ExpectationGroup) -> Result<MockInvocationPayload, RewriteError> {
    let mut results: Vec<Expression> = Vec::new();
    let mut invocation_count: Option<Expression> = None;

    for statement in &group.configuration {
        match statement {
            // Receiver-less `returns(a, b, ...)` continuation: every
            // argument is a chained result.
            Statement::Invocation { args, span, .. } => {
                if invocation_count.is_some() {
                    return Err(RewriteError::CountMustBeLast { span: span.clone() });
                }
                results.extend(args.iter().cloned());
            }
            Statement::Assignment {
                target,
                value,
                span,
            } => match target.as_str() {
                RESULT_TARGET => {
                    if invocation_count.is_some() {
                        return Err(RewriteError::CountMustBeLast { span: span.clone() });
                    }
                    results.push(value.clone());
                }
                TIMES_TARGET => {
                    if results.len() > 1 {
                        return Err(RewriteError::MultipleResultsWithCount {
                            span: span.clone(),
                        });
                    }
                    invocation_count = Some(value.clone());
                }
                other => {
                    return Err(RewriteError::UnexpectedAssignmentTarget {
                        name: other.to_string(),
                        span: span.clone(),
                    });
                }
            },
            other => {
                return Err(RewriteError::UnexpectedConfigurationStatement {
                    span: other.span().clone(),
                });
            }
        }
    }

    Ok(MockInvocationPayload {
        results,
        invocation_count,
    })
}
