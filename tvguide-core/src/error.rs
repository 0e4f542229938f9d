//! Error types for tvguide.

use thiserror::Error;

/// Errors that abort a guide run.
#[derive(Error, Debug)]
pub enum TvGuideError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("Document error: {0}")]
    Document(String),

    #[error("Invalid day token '{0}'. Expected YYYYMMDD")]
    DayToken(String),

    #[error("Stored time '{0}' is not a valid HH:MM value")]
    TimeReparse(String),

    #[error("No calendar day follows {0}")]
    DateOutOfRange(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for tvguide operations.
pub type TvGuideResult<T> = Result<T, TvGuideError>;
