//! Calendar event data.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};
use crate::reminder::{Reminder, ReminderKind};

/// A titled activity occupying a `[start, end)` time range on one date.
///
/// Plain data: all slot bookkeeping lives in [`Day`](crate::day::Day), so an
/// event never knows whether its range is actually reserved. The `id` is an
/// opaque string generated once by the calendar and never reparsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub reminders: Vec<Reminder>,
}

impl Event {
    pub fn new(
        id: String,
        title: &str,
        description: &str,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Self {
        Event {
            id,
            title: title.to_string(),
            description: description.to_string(),
            date,
            start,
            end,
            reminders: Vec::new(),
        }
    }

    /// Append a reminder. O(1).
    pub fn add_reminder(&mut self, date_time: NaiveDateTime, kind: ReminderKind) {
        self.reminders.push(Reminder::new(date_time, kind));
    }

    /// Remove the reminder at `index` (positional, 0-based).
    pub fn delete_reminder(&mut self, index: usize) -> CalendarResult<()> {
        if index >= self.reminders.len() {
            return Err(CalendarError::ReminderNotFound {
                index,
                len: self.reminders.len(),
            });
        }
        self.reminders.remove(index);
        Ok(())
    }
}
