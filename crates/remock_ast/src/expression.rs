// remock_ast/expression - Expression nodes with resolved types
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Expression node. Reference-typed expressions carry the static type
/// resolved upstream; `None` means attribution failed and downstream
/// passes must treat the expression as untyped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Literal(Literal, Span),

    Identifier {
        name: String,
        java_type: Option<JavaType>,
        span: Span,
    },

    MethodCall {
        receiver: Option<Box<Expression>>,
        name: String,
        args: Vec<Expression>,
        java_type: Option<JavaType>,
        span: Span,
    },

    FieldAccess {
        receiver: Box<Expression>,
        name: String,
        java_type: Option<JavaType>,
        span: Span,
    },

    // Constructor calls: `new IllegalStateException("boom")`
    New {
        class: ClassType,
        args: Vec<Expression>,
        span: Span,
    },
}

impl Expression {
    /// The statically-resolved type of this expression. Literal types
    /// are derived from the literal itself; everything else reports
    /// whatever attribution attached.
    pub fn java_type(&self) -> Option<JavaType> {
        match self {
            Expression::Literal(literal, _) => Some(match literal {
                Literal::String(_) => JavaType::string(),
                Literal::Number(n) => {
                    if n.contains('.') || n.ends_with('f') || n.ends_with('F') {
                        JavaType::Primitive(PrimitiveType::Double)
                    } else if n.ends_with('L') || n.ends_with('l') {
                        JavaType::Primitive(PrimitiveType::Long)
                    } else {
                        JavaType::Primitive(PrimitiveType::Int)
                    }
                }
                Literal::Boolean(_) => JavaType::Primitive(PrimitiveType::Boolean),
                Literal::Character(_) => JavaType::Primitive(PrimitiveType::Char),
                Literal::Null => JavaType::Primitive(PrimitiveType::Null),
            }),
            Expression::Identifier { java_type, .. }
            | Expression::MethodCall { java_type, .. }
            | Expression::FieldAccess { java_type, .. } => java_type.clone(),
            Expression::New { class, .. } => Some(JavaType::Class(class.clone())),
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            Expression::Literal(_, span) => span,
            Expression::Identifier { span, .. }
            | Expression::MethodCall { span, .. }
            | Expression::FieldAccess { span, .. }
            | Expression::New { span, .. } => span,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Expression::Literal(..))
    }
}
