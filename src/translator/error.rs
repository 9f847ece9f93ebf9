//! Error types for expression translation.

use thiserror::Error;

/// Errors that can occur while translating an expression
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// The node, operator, operand types or data type have no translation
    #[error("Unsupported expression {kind}: {description}")]
    UnsupportedExpression { kind: String, description: String },

    /// The tree is nested deeper than the configured limit
    #[error("Expression nesting exceeds maximum depth of {max_depth}")]
    DepthLimitExceeded { max_depth: usize },
}

impl TranslationError {
    pub fn unsupported(kind: impl Into<String>, description: impl Into<String>) -> Self {
        TranslationError::UnsupportedExpression {
            kind: kind.into(),
            description: description.into(),
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, TranslationError::UnsupportedExpression { .. })
    }
}

/// Result type for translation operations
pub type TranslationResult<T> = Result<T, TranslationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TranslationError::unsupported("Remainder", "(a % b)");
        assert_eq!(err.to_string(), "Unsupported expression Remainder: (a % b)");
        assert!(err.is_unsupported());

        let err = TranslationError::DepthLimitExceeded { max_depth: 8 };
        assert_eq!(
            err.to_string(),
            "Expression nesting exceeds maximum depth of 8"
        );
        assert!(!err.is_unsupported());
    }
}
