use crate::error::RewriteError;
use remock_ast::{Expression, JavaType};
use serde::{Deserialize, Serialize};

pub const THROWABLE_FQN: &str = "java.lang.Throwable";

/// Closed classification of a result expression's static type,
/// deciding which stub parameter slot it fills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResultKind {
    /// Primitive value (including the null literal): plain slot.
    Primitive,
    /// Throwable subtype: any-throwable slot, throw prefix.
    Throwable { fqn: String },
    /// Concrete reference type: typed any-value slot.
    PlainClass { fqn: String },
    /// Parameterized reference type, keyed by its raw base type.
    Parameterized { raw_fqn: String },
}

impl ResultKind {
    pub fn is_throw(&self) -> bool {
        matches!(self, ResultKind::Throwable { .. })
    }
}

/// Classify one result expression by its statically-resolved type.
///
/// An unresolved type or a type shape the stub templates cannot carry
/// (arrays) is a hard stop: dropping a configured value would change
/// the test's semantics, so there is no skip path.
pub fn classify_result(expr: &Expression) -> Result<ResultKind, RewriteError> {
    let Some(java_type) = expr.java_type() else {
        return Err(RewriteError::MissingTypeInformation {
            message: "result expression has no resolved type".to_string(),
            span: expr.span().clone(),
        });
    };

    match java_type {
        JavaType::Primitive(_) => Ok(ResultKind::Primitive),
        JavaType::Class(class) => {
            if class.is_assignable_to(THROWABLE_FQN) {
                Ok(ResultKind::Throwable { fqn: class.fqn })
            } else {
                Ok(ResultKind::PlainClass { fqn: class.fqn })
            }
        }
        JavaType::Parameterized { base, .. } => {
            if base.is_assignable_to(THROWABLE_FQN) {
                Ok(ResultKind::Throwable { fqn: base.fqn })
            } else {
                Ok(ResultKind::Parameterized { raw_fqn: base.fqn })
            }
        }
        JavaType::Array { .. } => Err(RewriteError::UnsupportedResultType {
            found: "array type".to_string(),
            span: expr.span().clone(),
        }),
    }
}
