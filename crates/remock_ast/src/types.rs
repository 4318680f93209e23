// remock_ast/types - Spans, literals, and resolved static types
use serde::{Deserialize, Serialize};

/// Position information for tree nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Span {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl Span {
    pub fn new(start_line: usize, start_column: usize, end_line: usize, end_column: usize) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    pub fn dummy() -> Self {
        Self::default()
    }
}

/// Literal values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    String(String),
    Number(String), // Keep as string for precision
    Boolean(bool),
    Character(char),
    Null,
}

impl Literal {
    /// Render the literal back to Java source text.
    pub fn value_source(&self) -> String {
        match self {
            Literal::String(s) => format!("\"{}\"", escape_java(s)),
            Literal::Number(n) => n.clone(),
            Literal::Boolean(b) => b.to_string(),
            Literal::Character(c) => match c {
                '\'' => "'\\''".to_string(),
                '\\' => "'\\\\'".to_string(),
                '\n' => "'\\n'".to_string(),
                '\t' => "'\\t'".to_string(),
                other => format!("'{}'", other),
            },
            Literal::Null => "null".to_string(),
        }
    }
}

fn escape_java(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Java primitive types, plus the type of the `null` literal.
///
/// `Null` is modelled as a primitive rather than a reference type so
/// that a `result = null` configuration flows through the plain-value
/// stub slot, matching how the upstream tree types null literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Null,
}

/// A resolved reference type: fully-qualified name plus the transitive
/// supertype names gathered during type attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassType {
    pub fqn: String,
    #[serde(default)]
    pub supertypes: Vec<String>,
}

impl ClassType {
    pub fn new(fqn: impl Into<String>) -> Self {
        Self {
            fqn: fqn.into(),
            supertypes: Vec::new(),
        }
    }

    pub fn extending(fqn: impl Into<String>, supertypes: Vec<String>) -> Self {
        Self {
            fqn: fqn.into(),
            supertypes,
        }
    }

    /// Whether this type is the named type or one of its recorded
    /// supertypes. Mirrors an assignability check against resolved
    /// type attribution; no hierarchy lookup happens here.
    pub fn is_assignable_to(&self, target_fqn: &str) -> bool {
        self.fqn == target_fqn || self.supertypes.iter().any(|s| s == target_fqn)
    }

    pub fn simple_name(&self) -> &str {
        self.fqn.rsplit('.').next().unwrap_or(&self.fqn)
    }
}

/// Statically-resolved Java types attached to expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JavaType {
    Primitive(PrimitiveType),
    Class(ClassType),
    Parameterized {
        base: ClassType,
        type_args: Vec<JavaType>,
    },
    Array {
        element_type: Box<JavaType>,
        dimensions: usize,
    },
}

impl JavaType {
    pub fn class(fqn: impl Into<String>) -> Self {
        JavaType::Class(ClassType::new(fqn))
    }

    pub fn string() -> Self {
        JavaType::class("java.lang.String")
    }

    pub fn int() -> Self {
        JavaType::Primitive(PrimitiveType::Int)
    }

    pub fn boolean() -> Self {
        JavaType::Primitive(PrimitiveType::Boolean)
    }

    /// A class type pre-attributed as a `java.lang.Throwable` subtype.
    pub fn throwable(fqn: impl Into<String>) -> Self {
        JavaType::Class(ClassType::extending(
            fqn,
            vec![
                "java.lang.Exception".to_string(),
                "java.lang.Throwable".to_string(),
            ],
        ))
    }
}
