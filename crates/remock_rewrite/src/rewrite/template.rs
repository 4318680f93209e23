use super::classify::{classify_result, ResultKind};
use super::emit;
use super::records::MockInvocation;
use crate::error::RewriteError;
use remock_ast::{Expression, JavaType};
use serde::{Deserialize, Serialize};

/// Prefix family of a stub statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StubKind {
    Return,
    Throw,
}

impl StubKind {
    pub fn method_name(&self) -> &'static str {
        match self {
            StubKind::Return => "thenReturn",
            StubKind::Throw => "thenThrow",
        }
    }
}

/// Parameter slot of a stub template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamSlot {
    /// Primitive value substituted verbatim.
    Plain,
    /// Any value of throwable type.
    AnyThrowable,
    /// Any value of the named reference type.
    AnyOf(String),
}

impl ParamSlot {
    fn placeholder(&self) -> String {
        match self {
            ParamSlot::Plain => "#{}".to_string(),
            ParamSlot::AnyThrowable => "#{any()}".to_string(),
            ParamSlot::AnyOf(fqn) => format!("#{{any({})}}", fqn),
        }
    }
}

/// Template description for one stub statement: the prefix family and
/// one typed parameter slot per result, in configuration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StubTemplate {
    pub kind: StubKind,
    pub slots: Vec<ParamSlot>,
}

impl StubTemplate {
    /// Placeholder form of the template, one slot per result:
    /// `when(#{any()}).thenReturn(#{}, #{any(com.example.Widget)});`
    pub fn source(&self) -> String {
        let mut out = String::from("when(#{any()}).");
        out.push_str(self.kind.method_name());
        out.push('(');
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&slot.placeholder());
        }
        out.push_str(");");
        out
    }

    /// Substitute the invocation and the result expressions into the
    /// template, producing the final stub statement text.
    pub fn render(&self, invocation: &MockInvocation, results: &[Expression]) -> String {
        format!(
            "when({}).{}({});",
            emit::invocation_source(invocation),
            self.kind.method_name(),
            emit::argument_list(results)
        )
    }
}

/// Build the stub template for a group's results. All results must
/// agree on the prefix family; a group that mixes thrown and returned
/// values has no single-statement Mockito equivalent and is rejected.
pub fn select_stub_template(results: &[Expression]) -> Result<StubTemplate, RewriteError> {
    let mut kind: Option<StubKind> = None;
    let mut slots = Vec::with_capacity(results.len());

    for result in results {
        let classified = classify_result(result)?;
        let result_kind = if classified.is_throw() {
            StubKind::Throw
        } else {
            StubKind::Return
        };
        match kind {
            None => kind = Some(result_kind),
            Some(previous) if previous != result_kind => {
                return Err(RewriteError::MixedResultKinds {
                    span: result.span().clone(),
                });
            }
            Some(_) => {}
        }
        slots.push(match classified {
            ResultKind::Primitive => ParamSlot::Plain,
            ResultKind::Throwable { .. } => ParamSlot::AnyThrowable,
            ResultKind::PlainClass { fqn } => ParamSlot::AnyOf(fqn),
            ResultKind::Parameterized { raw_fqn } => ParamSlot::AnyOf(raw_fqn),
        });
    }

    Ok(StubTemplate {
        kind: kind.unwrap_or(StubKind::Return),
        slots,
    })
}

/// Template description for one verification statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyTemplate {
    /// Fully-qualified type of the mocked receiver; empty when the
    /// receiver is not a plain identifier.
    pub receiver_fqn: String,
}

impl VerifyTemplate {
    /// Placeholder form:
    /// `verify(#{any(com.example.Service)}, times(#{any(int)})).#{}(...);`
    /// with the original arguments reproduced inline.
    pub fn source(&self, invocation: &MockInvocation) -> String {
        format!(
            "verify(#{{any({})}}, times(#{{any(int)}})).#{{}}({});",
            self.receiver_fqn,
            emit::argument_list(&invocation.args)
        )
    }

    /// Substitute the receiver, count expression, and method name into
    /// the template, producing the final verification statement text.
    pub fn render(&self, invocation: &MockInvocation, count: &Expression) -> String {
        let receiver = invocation
            .receiver
            .as_ref()
            .map(emit::expression_source)
            .unwrap_or_default();
        format!(
            "verify({}, times({})).{}({});",
            receiver,
            emit::expression_source(count),
            invocation.name,
            emit::argument_list(&invocation.args)
        )
    }
}

/// Resolve the verification template for a group's invocation. The
/// receiver must be present and typed; an identifier receiver must
/// resolve to a concrete or parameterized class so the generated call
/// can be qualified.
pub fn select_verify_template(invocation: &MockInvocation) -> Result<VerifyTemplate, RewriteError> {
    let Some(receiver) = invocation.receiver.as_ref() else {
        return Err(RewriteError::MissingTypeInformation {
            message: "verification requires an invocation receiver".to_string(),
            span: invocation.span.clone(),
        });
    };
    let Some(receiver_type) = receiver.java_type() else {
        return Err(RewriteError::MissingTypeInformation {
            message: "invocation receiver has no resolved type".to_string(),
            span: receiver.span().clone(),
        });
    };

    let receiver_fqn = match receiver {
        Expression::Identifier { .. } => match receiver_type {
            JavaType::Class(class) => class.fqn,
            JavaType::Parameterized { base, .. } => base.fqn,
            _ => {
                return Err(RewriteError::MissingTypeInformation {
                    message: "invocation receiver type is not a class type".to_string(),
                    span: receiver.span().clone(),
                });
            }
        },
        // Chained or nested receivers cannot be qualified by a single
        // name; the verification call keeps them unqualified.
        _ => String::new(),
    };

    Ok(VerifyTemplate { receiver_fqn })
}
