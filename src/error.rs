use thiserror::Error;

/// Errors surfaced by the strict parsing entry points.
///
/// The best-effort formatters never return these; they render the
/// placeholders in [`crate::utils::datetime`] instead.
#[derive(Debug, Error)]
pub enum TimeError {
    /// Empty or malformed time/date string.
    #[error("invalid time format: '{0}'")]
    InvalidFormat(String),

    /// Status tag missing from the classification table.
    #[error("unknown attendance status: '{0}'")]
    UnknownStatus(String),

    /// Real-time update payload that is not valid JSON for an update.
    #[error("invalid attendance update payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Convenience alias used across the library.
pub type Result<T> = std::result::Result<T, TimeError>;
