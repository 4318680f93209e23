use remock_ast::Span;

/// Error conditions raised while rewriting an Expectations block.
///
/// Every condition is unrecoverable at this scope: the rewrite of the
/// whole block aborts, nothing is skipped or downgraded. Splices
/// applied before the failure are not rolled back, so a caller that
/// sees an error must discard the body it passed in.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RewriteError {
    #[error("statement at index {index} is not an Expectations block")]
    InvalidConstruct { index: usize, span: Span },

    #[error("unexpected assignment target `{name}` in expectation block")]
    UnexpectedAssignmentTarget { name: String, span: Span },

    #[error("statement is neither a mock invocation nor a configuration of one")]
    UnexpectedConfigurationStatement { span: Span },

    #[error("times configuration must be the last statement in an expectation")]
    CountMustBeLast { span: Span },

    #[error("multiple results cannot be combined with a times configuration")]
    MultipleResultsWithCount { span: Span },

    #[error("expectation mixes thrown and returned results")]
    MixedResultKinds { span: Span },

    #[error("unsupported result expression type for stub template: {found}")]
    UnsupportedResultType { found: String, span: Span },

    #[error("missing type information: {message}")]
    MissingTypeInformation { message: String, span: Span },
}

impl RewriteError {
    pub fn span(&self) -> &Span {
        match self {
            RewriteError::InvalidConstruct { span, .. }
            | RewriteError::UnexpectedAssignmentTarget { span, .. }
            | RewriteError::UnexpectedConfigurationStatement { span }
            | RewriteError::CountMustBeLast { span }
            | RewriteError::MultipleResultsWithCount { span }
            | RewriteError::MixedResultKinds { span }
            | RewriteError::UnsupportedResultType { span, .. }
            | RewriteError::MissingTypeInformation { span, .. } => span,
        }
    }

    /// Whether the condition is a violation of the expectation-block
    /// grammar, as opposed to missing type attribution in the input.
    pub fn is_structural(&self) -> bool {
        !matches!(self, RewriteError::MissingTypeInformation { .. })
    }
}
