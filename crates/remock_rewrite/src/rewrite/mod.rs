use crate::error::RewriteError;
use crate::imports::ImportRegistry;
use crate::matchers::MatcherNormalizer;
use remock_ast::{Block, Statement};
use tracing::debug;

mod classify;
mod emit;
mod records;
mod splice;
mod template;

pub use classify::{classify_result, ResultKind};
pub use records::{build_payload, ExpectationGroup, MockInvocation, MockInvocationPayload};
pub use splice::{InsertionCoordinate, SpliceState};
pub use template::{
    select_stub_template, select_verify_template, ParamSlot, StubKind, StubTemplate,
    VerifyTemplate,
};

#[cfg(test)]
mod tests;

/// Marker import of the rewritten construct, removed once the block is
/// gone.
pub const EXPECTATIONS_IMPORT: &str = "mockit.Expectations";
pub const WHEN_IMPORT: &str = "org.mockito.Mockito.when";
pub const VERIFY_IMPORT: &str = "org.mockito.Mockito.verify";
pub const TIMES_IMPORT: &str = "org.mockito.Mockito.times";

/// Segmentation role of one block statement, decided once before
/// grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentRole {
    /// Top-level mocked-call invocation: opens a new group.
    Boundary,
    /// Configuration statement (assignments, and the receiver-less
    /// `returns` invocation): extends the pending group.
    Continuation,
}

fn segmentation_role(statement: &Statement) -> SegmentRole {
    match statement {
        Statement::Invocation {
            receiver: None,
            name,
            ..
        } if name == records::RETURNS_CONTINUATION => SegmentRole::Continuation,
        Statement::Invocation { .. } => SegmentRole::Boundary,
        _ => SegmentRole::Continuation,
    }
}

/// Rewrite the Expectations construct at `construct_index` of
/// `method_body` into Mockito stub and verification statements,
/// returning the rewritten body.
///
/// One call handles one construct; a body with several constructs
/// needs one call each, with indices recomputed by the caller between
/// calls. On error the rewrite aborts immediately: splices already
/// applied for earlier groups are not rolled back, and the caller must
/// discard the partially-rewritten value.
pub fn rewrite_expectations(
    method_body: Block,
    construct_index: usize,
    matchers: &dyn MatcherNormalizer,
    imports: &mut dyn ImportRegistry,
) -> Result<Block, RewriteError> {
    let construct = match method_body.statements.get(construct_index) {
        Some(Statement::Expectations(construct)) => construct.clone(),
        Some(other) => {
            return Err(RewriteError::InvalidConstruct {
                index: construct_index,
                span: other.span().clone(),
            });
        }
        None => {
            return Err(RewriteError::InvalidConstruct {
                index: construct_index,
                span: method_body.span.clone(),
            });
        }
    };

    debug!(
        construct_index,
        block_statements = construct.body.len(),
        "rewriting Expectations block"
    );
    imports.ensure_not_imported(EXPECTATIONS_IMPORT);

    // Matcher calls are normalized exactly once, before segmentation.
    let normalized = matchers.normalize(construct.body);
    let groups = segment_groups(normalized)?;

    let mut body = method_body;
    let mut state = SpliceState::replacing(construct_index);
    for group in &groups {
        let (next_body, next_state) = rewrite_group(body, state, group, imports)?;
        body = next_body;
        state = next_state;
    }
    Ok(body)
}

/// Split the normalized block into invocation groups. Segmentation is
/// total: every statement lands in exactly one group, and a
/// configuration statement with no preceding invocation is a
/// structural error.
fn segment_groups(block: Block) -> Result<Vec<ExpectationGroup>, RewriteError> {
    let mut groups: Vec<ExpectationGroup> = Vec::new();
    let mut pending: Option<ExpectationGroup> = None;

    for statement in block.statements {
        match (segmentation_role(&statement), statement) {
            (
                SegmentRole::Boundary,
                Statement::Invocation {
                    receiver,
                    name,
                    args,
                    span,
                },
            ) => {
                if let Some(group) = pending.take() {
                    groups.push(group);
                }
                pending = Some(ExpectationGroup {
                    invocation: MockInvocation {
                        receiver,
                        name,
                        args,
                        span,
                    },
                    configuration: Vec::new(),
                });
            }
            (_, statement) => match pending.as_mut() {
                Some(group) => group.configuration.push(statement),
                None => {
                    return Err(RewriteError::UnexpectedConfigurationStatement {
                        span: statement.span().clone(),
                    });
                }
            },
        }
    }
    if let Some(group) = pending {
        groups.push(group);
    }
    Ok(groups)
}

/// Rewrite one group: accumulate its payload, then apply the stub
/// splice and/or the verification append. The two effects are
/// independent; a group with neither payload nor count only triggers
/// construct deletion (when the construct is still unreplaced).
fn rewrite_group(
    body: Block,
    state: SpliceState,
    group: &ExpectationGroup,
    imports: &mut dyn ImportRegistry,
) -> Result<(Block, SpliceState), RewriteError> {
    let payload = build_payload(group)?;
    debug!(
        invocation = %group.invocation.name,
        results = payload.results.len(),
        has_count = payload.invocation_count.is_some(),
        "rewriting expectation group"
    );

    let (mut body, mut state) = (body, state);

    if !payload.results.is_empty() {
        let template = select_stub_template(&payload.results)?;
        imports.ensure_imported(WHEN_IMPORT);
        let stub = Statement::Snippet {
            text: template.render(&group.invocation, &payload.results),
            span: group.invocation.span.clone(),
        };
        let (next_body, next_state) = splice::splice_stub(body, state, stub);
        body = next_body;
        state = next_state;
    } else if matches!(state.coordinate, InsertionCoordinate::Replace { .. }) {
        let (next_body, next_state) = splice::remove_construct(body, state);
        body = next_body;
        state = next_state;
    }

    if let Some(count) = &payload.invocation_count {
        let template = select_verify_template(&group.invocation)?;
        imports.ensure_imported(VERIFY_IMPORT);
        imports.ensure_imported(TIMES_IMPORT);
        if !template.receiver_fqn.is_empty() {
            imports.ensure_imported(&template.receiver_fqn);
        }
        let verification = Statement::Snippet {
            text: template.render(&group.invocation, count),
            span: count.span().clone(),
        };
        body = splice::append_verification(body, verification);
    }

    Ok((body, state))
}
