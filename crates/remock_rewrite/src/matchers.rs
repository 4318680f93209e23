use remock_ast::Block;

/// Argument-matcher normalization seam.
///
/// Before segmentation the rewriter hands the expectation block body
/// to this collaborator exactly once; the implementation must return
/// an equivalently-shaped block with matcher calls rewritten to the
/// Mockito idiom (`anyString()`, `eq(...)`, ...). The rewrite core
/// never inspects matcher calls itself.
pub trait MatcherNormalizer {
    fn normalize(&self, block: Block) -> Block;
}

/// Pass-through normalizer for inputs whose matchers are already in
/// the target idiom, or for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNormalizer;

impl MatcherNormalizer for IdentityNormalizer {
    fn normalize(&self, block: Block) -> Block {
        block
    }
}
