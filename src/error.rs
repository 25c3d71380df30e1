use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(
        "Invalid date override \"{input}\" (expected YYYY-MM-DD, YYYY-MM-DD HH:MM:SS or ISO 8601)"
    )]
    InvalidOverride { input: String },

    #[error("Invalid date \"{input}\" (expected a date, date-time or ISO 8601 timestamp)")]
    InvalidDate { input: String },

    #[error("Date out of range: {input}")]
    OutOfRange { input: String },

    #[error("{0}")]
    Accessor(#[from] DateAccessorError),
}

/// Failures specific to timezone resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum DateAccessorError {
    #[error("Unknown timezone: {input}")]
    UnknownTimezone { input: String },
}
