//! Reminders attached to events.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// How a reminder is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReminderKind {
    #[default]
    Email,
    System,
}

impl fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReminderKind::Email => write!(f, "email"),
            ReminderKind::System => write!(f, "system"),
        }
    }
}

/// A timestamped notification attached to an event.
///
/// Immutable once created; owned exclusively by its event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub date_time: NaiveDateTime,
    pub kind: ReminderKind,
}

impl Reminder {
    pub fn new(date_time: NaiveDateTime, kind: ReminderKind) -> Self {
        Reminder { date_time, kind }
    }
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Reminder on {} of type {}", self.date_time, self.kind)
    }
}
