// remock_ast/statement - Statement nodes and method body structure
use crate::expression::Expression;
use crate::types::Span;
use serde::{Deserialize, Serialize};

/// Statement node as it appears in a test method body or inside an
/// `Expectations` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// A method invocation statement: `svc.getValue();` or the
    /// receiver-less `returns(1, 2);` continuation inside a block.
    Invocation {
        receiver: Option<Expression>,
        name: String,
        args: Vec<Expression>,
        span: Span,
    },

    /// A bare assignment: `result = "x";`, `times = 2;`
    Assignment {
        target: String,
        value: Expression,
        span: Span,
    },

    /// The JMockit `Expectations` construct sitting in a method body.
    Expectations(ExpectationBlock),

    /// An opaque statement carried verbatim: either a surrounding
    /// statement the rewriter does not touch, or a generated Mockito
    /// statement spliced in by the rewrite pass.
    Snippet { text: String, span: Span },
}

impl Statement {
    pub fn span(&self) -> &Span {
        match self {
            Statement::Invocation { span, .. }
            | Statement::Assignment { span, .. }
            | Statement::Snippet { span, .. } => span,
            Statement::Expectations(block) => &block.span,
        }
    }
}

/// The body of a JMockit `Expectations` anonymous class: an ordered
/// list of invocation and configuration statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectationBlock {
    pub body: Block,
    pub span: Span,
}

/// An ordered statement list; the shape of a method body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub span: Span,
}

impl Block {
    pub fn new(statements: Vec<Statement>, span: Span) -> Self {
        Self { statements, span }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
