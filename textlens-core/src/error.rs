//! Error types for the text statistics engine

use thiserror::Error;

/// Errors raised while acquiring or configuring text analysis
///
/// Empty documents, oversized top-N requests and averages over empty
/// sequences are not errors; they produce defined default values.
#[derive(Error, Debug)]
pub enum TextError {
    /// The source could not be read or resolved
    #[error("source '{source_name}' is unavailable: {reason}")]
    SourceUnavailable {
        /// Identifier of the failing source
        source_name: String,
        /// Underlying failure description
        reason: String,
    },

    /// The source identifier does not have an accepted shape
    #[error("source '{source_name}' is not supported: provide a web resource or a local file ending in .txt")]
    UnsupportedSource {
        /// Identifier that failed the shape check
        source_name: String,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl TextError {
    /// Build a `SourceUnavailable` error from any displayable cause
    pub fn unavailable(source_name: impl Into<String>, reason: impl ToString) -> Self {
        TextError::SourceUnavailable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    /// Build an `UnsupportedSource` error
    pub fn unsupported(source_name: impl Into<String>) -> Self {
        TextError::UnsupportedSource {
            source_name: source_name.into(),
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, TextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_unavailable_display() {
        let error = TextError::unavailable("story.txt", "No such file or directory");
        assert_eq!(
            error.to_string(),
            "source 'story.txt' is unavailable: No such file or directory"
        );
    }

    #[test]
    fn test_unsupported_source_display() {
        let error = TextError::unsupported("story.pdf");
        assert!(error.to_string().starts_with("source 'story.pdf' is not supported"));
    }

    #[test]
    fn test_config_error_display() {
        let error = TextError::Config("top_n must be positive".to_string());
        assert_eq!(error.to_string(), "configuration error: top_n must be positive");
    }
}
