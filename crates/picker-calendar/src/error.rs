//! Error types for picker-calendar operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalendarError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Instant out of calendar range: {0} ms")]
    OutOfRange(i64),

    #[error("Invalid civil date/time: {0}")]
    InvalidCivil(String),

    #[error("Local time does not exist in zone: {0}")]
    NonexistentLocalTime(String),

    #[error("Local time is ambiguous in zone: {0}")]
    AmbiguousLocalTime(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Unknown interval unit: {0}")]
    InvalidUnit(String),

    #[error("Invalid date range: start {start} ms is after end {end} ms")]
    InvalidRange { start: i64, end: i64 },

    #[error("Invalid time-of-day bounds: {0}")]
    InvalidBounds(String),

    #[error("Invalid picker settings: {0}")]
    InvalidSettings(String),

    #[error("Calendar provider error: {0}")]
    Provider(String),
}

pub type Result<T> = std::result::Result<T, CalendarError>;
