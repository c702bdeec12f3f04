//! Error types for attribute translation.

/// Errors that can occur while translating an attribute to SQL.
///
/// Unsupported dialect features are never reported here: they are
/// degraded to the closest expressible SQL. Only input the translator
/// cannot render at all surfaces as an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    /// An identifier required by the dialect was not a usable name.
    #[error("Missing identifier for {usage} (got {input})")]
    InvalidIdentifier {
        /// What the identifier was needed for.
        usage: &'static str,
        /// Debug rendering of the offending input.
        input: String,
    },

    /// The dialect name is not one of the supported dialects.
    #[error("Unknown dialect '{0}'")]
    UnknownDialect(String),
}

impl TranslateError {
    /// Builds an [`TranslateError::InvalidIdentifier`] from the rejected input.
    #[must_use]
    pub fn invalid_identifier(usage: &'static str, input: Option<&str>) -> Self {
        Self::InvalidIdentifier {
            usage,
            input: format!("{input:?}"),
        }
    }
}

/// Result type for translation operations.
pub type Result<T> = std::result::Result<T, TranslateError>;
