// remock_ast - Java syntax tree subset for the Expectations rewriter
//! Tree definitions consumed by the remock rewrite pass.
//!
//! The types here model the slice of a parsed, type-resolved Java test
//! method that the rewriter cares about: statements of a method body,
//! expressions with their statically-resolved types, and the JMockit
//! `Expectations` construct node itself. Parsing source text and
//! resolving types both happen upstream; this crate is plain data.

pub mod expression;
pub mod statement;
pub mod types;

pub use expression::*;
pub use statement::*;
pub use types::*;
