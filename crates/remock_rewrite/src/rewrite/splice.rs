use remock_ast::{Block, Statement};
use serde::{Deserialize, Serialize};

/// Position in the enclosing method body where the next generated
/// statement lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsertionCoordinate {
    /// Replace the existing statement at this index (the original
    /// Expectations construct, until the first splice consumes it).
    Replace { index: usize },
    /// Insert directly after the statement at this index.
    After { index: usize },
    /// Insert as the first statement of the body.
    FirstStatement,
}

/// Splice accumulator threaded through the per-group fold: the current
/// insertion coordinate, the net number of statements inserted so far,
/// and the construct's original body index used to recompute shifted
/// positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpliceState {
    pub coordinate: InsertionCoordinate,
    pub statements_added: usize,
    pub construct_index: usize,
}

impl SpliceState {
    /// Initial state for a construct at the given body index: the
    /// first stub replaces the construct itself.
    pub fn replacing(construct_index: usize) -> Self {
        Self {
            coordinate: InsertionCoordinate::Replace {
                index: construct_index,
            },
            statements_added: 0,
            construct_index,
        }
    }

    fn cursor_after_write(self, statements_added: usize) -> Self {
        Self {
            coordinate: InsertionCoordinate::After {
                index: self.construct_index + statements_added,
            },
            statements_added,
            construct_index: self.construct_index,
        }
    }
}

/// Write one stub statement at the current coordinate. Replacement
/// consumes the original construct without changing the statement
/// count; insertion bumps the net counter. Either way the coordinate
/// moves to "after the statement just written", recomputed from the
/// construct's original index plus net insertions.
pub fn splice_stub(mut body: Block, state: SpliceState, stub: Statement) -> (Block, SpliceState) {
    let mut statements_added = state.statements_added;
    match state.coordinate {
        InsertionCoordinate::Replace { index } => {
            body.statements[index] = stub;
        }
        InsertionCoordinate::After { index } => {
            let position = (index + 1).min(body.statements.len());
            body.statements.insert(position, stub);
            statements_added += 1;
        }
        InsertionCoordinate::FirstStatement => {
            body.statements.insert(0, stub);
            statements_added += 1;
        }
    }
    let state = state.cursor_after_write(statements_added);
    (body, state)
}

/// Delete the original construct outright. Only meaningful while the
/// coordinate is still a replacement (no stub has consumed the
/// construct yet); otherwise the body is returned untouched. The next
/// coordinate is the first-statement slot when the construct opened
/// the body, else "after" the statement that shifted into its place.
pub fn remove_construct(mut body: Block, state: SpliceState) -> (Block, SpliceState) {
    let InsertionCoordinate::Replace { index } = state.coordinate else {
        return (body, state);
    };
    body.statements.remove(index);
    let coordinate = if state.construct_index == 0 {
        InsertionCoordinate::FirstStatement
    } else {
        InsertionCoordinate::After {
            index: state.construct_index + state.statements_added,
        }
    };
    (
        body,
        SpliceState {
            coordinate,
            ..state
        },
    )
}

/// Verifications are batched at the end of the method body regardless
/// of their group's position; appending never disturbs the insertion
/// cursor, which always points before the appended region.
pub fn append_verification(mut body: Block, verification: Statement) -> Block {
    body.statements.push(verification);
    body
}
