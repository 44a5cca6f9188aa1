//! Error types for generator helpers

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot generate a string of {0} tabs")]
    NegativeIndentCount(i32),

    #[error("Tab size must be at least one white space, got {0}")]
    InvalidTabSize(i32),

    #[error("Indentation of {count} tabs at width {tab_size} is too wide")]
    IndentTooWide { count: i32, tab_size: i32 },

    #[error("No tab size configured for setting '{key}'")]
    MissingTabSize { key: String },

    #[error("Tab size setting '{key}' is not an integer: {value}")]
    MalformedTabSize { key: String, value: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Caller passed an out-of-range argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::NegativeIndentCount(_) | Error::InvalidTabSize(_) | Error::IndentTooWide { .. }
        )
    }

    /// Configuration is missing or malformed; surface to the operator before generating
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::MissingTabSize { .. } | Error::MalformedTabSize { .. } | Error::Json(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
