//! Per-date slot table: the single source of truth for occupancy.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, NaiveTime, Timelike};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

/// Slot granularity in minutes.
pub const SLOT_MINUTES: u32 = 15;

/// Slots per day: 00:00 through 23:45.
pub const SLOTS_PER_DAY: usize = (24 * 60 / SLOT_MINUTES) as usize;

/// The slot table for a single calendar date.
///
/// Every slot exists from construction, mapped to the occupying event id or
/// `None`. A `BTreeMap` keeps iteration in ascending slot order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    slots: BTreeMap<NaiveTime, Option<String>>,
}

impl Day {
    pub fn new(date: NaiveDate) -> Self {
        let mut slots = BTreeMap::new();
        for hour in 0..24 {
            for minute in (0..60).step_by(SLOT_MINUTES as usize) {
                slots.insert(NaiveTime::from_hms_opt(hour, minute, 0).unwrap(), None);
            }
        }
        Day { date, slots }
    }

    /// Mark every slot in `[start, end)` as held by `event_id`.
    ///
    /// Validate-then-commit: the full range is checked before anything is
    /// written, so a `SlotConflict` leaves the table untouched. Slots already
    /// held by the same event count as free.
    pub fn reserve(&mut self, event_id: &str, start: NaiveTime, end: NaiveTime) -> CalendarResult<()> {
        validate_range(start, end)?;
        self.check_free(event_id, start, end)?;

        for time in slot_range(start, end) {
            self.slots.insert(time, Some(event_id.to_string()));
        }
        debug!("day {}: reserved {}-{} for {}", self.date, start, end, event_id);
        Ok(())
    }

    /// Clear every slot currently held by `event_id`.
    pub fn release(&mut self, event_id: &str) -> CalendarResult<()> {
        let held: Vec<NaiveTime> = self
            .slots
            .iter()
            .filter(|(_, occupant)| occupant.as_deref() == Some(event_id))
            .map(|(time, _)| *time)
            .collect();

        if held.is_empty() {
            return Err(CalendarError::EventNotFound(event_id.to_string()));
        }

        for time in held {
            self.slots.insert(time, None);
        }
        debug!("day {}: released slots of {}", self.date, event_id);
        Ok(())
    }

    /// Move `event_id`'s reservation to `[start, end)`.
    ///
    /// The new range is checked against other events before the old slots are
    /// cleared, so a conflict leaves the existing reservation fully intact.
    pub fn reassign(&mut self, event_id: &str, start: NaiveTime, end: NaiveTime) -> CalendarResult<()> {
        validate_range(start, end)?;
        self.check_free(event_id, start, end)?;

        // The event may not hold any slots here yet (fresh day after a date
        // change), so a missing old reservation is not an error.
        let _ = self.release(event_id);

        for time in slot_range(start, end) {
            self.slots.insert(time, Some(event_id.to_string()));
        }
        debug!("day {}: reassigned {} to {}-{}", self.date, event_id, start, end);
        Ok(())
    }

    /// All unoccupied slot start times, ascending.
    pub fn available_slots(&self) -> Vec<NaiveTime> {
        self.slots
            .iter()
            .filter(|(_, occupant)| occupant.is_none())
            .map(|(time, _)| *time)
            .collect()
    }

    /// The event id holding the slot at `time`, if any.
    pub fn occupant(&self, time: NaiveTime) -> Option<&str> {
        self.slots.get(&time).and_then(|occupant| occupant.as_deref())
    }

    /// Slot start times currently held by `event_id`, ascending.
    pub fn slots_held_by(&self, event_id: &str) -> Vec<NaiveTime> {
        self.slots
            .iter()
            .filter(|(_, occupant)| occupant.as_deref() == Some(event_id))
            .map(|(time, _)| *time)
            .collect()
    }

    /// Fail with `SlotConflict` if any slot in `[start, end)` is held by a
    /// different event.
    fn check_free(&self, event_id: &str, start: NaiveTime, end: NaiveTime) -> CalendarResult<()> {
        for time in slot_range(start, end) {
            if let Some(Some(held_by)) = self.slots.get(&time) {
                if held_by != event_id {
                    return Err(CalendarError::SlotConflict {
                        time,
                        held_by: held_by.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Iterate the slot start times covered by `[start, end)`.
fn slot_range(start: NaiveTime, end: NaiveTime) -> impl Iterator<Item = NaiveTime> {
    let count = (end - start).num_minutes() / SLOT_MINUTES as i64;
    (0..count).map(move |i| start + Duration::minutes(i * SLOT_MINUTES as i64))
}

/// Reject ranges that are empty, reversed, or not slot-aligned.
///
/// Misaligned boundaries are an error rather than being rounded, so a caller
/// never silently occupies more or less time than requested.
pub(crate) fn validate_range(start: NaiveTime, end: NaiveTime) -> CalendarResult<()> {
    if start >= end {
        return Err(CalendarError::InvalidTimeRange(format!(
            "start {} must be before end {}",
            start, end
        )));
    }
    for time in [start, end] {
        if time.second() != 0 || time.nanosecond() != 0 || time.minute() % SLOT_MINUTES != 0 {
            return Err(CalendarError::InvalidTimeRange(format!(
                "{} is not aligned to the {}-minute slot grid",
                time, SLOT_MINUTES
            )));
        }
    }
    Ok(())
}
