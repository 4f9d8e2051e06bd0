//! Error types for meeting-engine operations.

use thiserror::Error;

/// Errors raised when constructing a [`TimeRange`](crate::TimeRange) from raw minutes.
///
/// Queries themselves never fail; only malformed input ranges are rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The end minute lies before the start minute.
    #[error("Invalid range: end {end} is before start {start}")]
    EndBeforeStart { start: u32, end: u32 },

    /// The range extends past the end of the day (or its end overflows).
    #[error("Range [{start}, {end}) does not fit within a day of {day_length} minutes")]
    OutOfDay {
        start: u32,
        end: u64,
        day_length: u32,
    },
}

/// Convenience alias used throughout meeting-engine.
pub type Result<T> = std::result::Result<T, ScheduleError>;
