// remock_rewrite - JMockit Expectations to Mockito rewrite core
//! Rewrites a JMockit `Expectations` block inside a test method body
//! into Mockito `when(...).thenReturn(...)` / `thenThrow(...)` stub
//! statements and `verify(...)` statements.
//!
//! The pass operates on the [`remock_ast`] tree: the driver locates an
//! `Expectations` construct, hands over the enclosing method body and
//! the construct's statement index, and receives the rewritten body.
//! Argument-matcher normalization and import-list maintenance are
//! collaborator seams ([`matchers::MatcherNormalizer`],
//! [`imports::ImportRegistry`]); this crate decides only what the
//! replacement statements are and where they land.

pub mod error;
pub mod imports;
pub mod matchers;
pub mod rewrite;

pub use error::RewriteError;
pub use imports::{CollectedImports, ImportRegistry};
pub use matchers::{IdentityNormalizer, MatcherNormalizer};
pub use rewrite::{
    build_payload, classify_result, rewrite_expectations, select_stub_template,
    select_verify_template, ExpectationGroup, InsertionCoordinate, MockInvocation,
    MockInvocationPayload, ParamSlot, ResultKind, SpliceState, StubKind, StubTemplate,
    VerifyTemplate,
};
