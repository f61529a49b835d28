//! Error types for calendar operations.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Errors that can occur in calendar operations.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Cannot schedule an event on {0}: date is in the past")]
    InvalidDate(NaiveDate),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Reminder index {index} out of bounds (event has {len} reminders)")]
    ReminderNotFound { index: usize, len: usize },

    #[error("Slot at {time} is already taken by event {held_by}")]
    SlotConflict { time: NaiveTime, held_by: String },

    #[error("Invalid time range: {0}")]
    InvalidTimeRange(String),
}

/// Result type alias for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
