//! The top-level aggregate: owns every event and every day table.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::info;
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::day::{self, Day};
use crate::error::{CalendarError, CalendarResult};
use crate::event::Event;
use crate::reminder::{Reminder, ReminderKind};

/// Generate an opaque unique id for a new event.
fn generate_event_id() -> String {
    Uuid::new_v4().to_string()
}

/// Coordinates slot reservation with the event registry so the two never
/// diverge: slots are reserved before an event is registered, and the
/// registry is only touched after the day table accepted the change.
///
/// The registry is a `Vec` scanned by id, which also gives `find_events` its
/// stable insertion-order output. Days are created lazily per date and never
/// destroyed; their slots merely return to unoccupied.
pub struct Calendar {
    events: Vec<Event>,
    days: BTreeMap<NaiveDate, Day>,
    clock: Box<dyn Clock>,
}

impl Calendar {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Build a calendar with an injected clock (used by tests to pin today).
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Calendar {
            events: Vec::new(),
            days: BTreeMap::new(),
            clock,
        }
    }

    // =========================================================================
    // Event operations
    // =========================================================================

    /// Create an event and reserve its slot range, returning the new id.
    ///
    /// The reservation happens before the registry insert, so a failed
    /// reservation leaves no orphaned event behind.
    pub fn add_event(
        &mut self,
        title: &str,
        description: &str,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> CalendarResult<String> {
        if date < self.clock.today() {
            return Err(CalendarError::InvalidDate(date));
        }
        day::validate_range(start, end)?;

        let id = generate_event_id();
        let day = self.days.entry(date).or_insert_with(|| Day::new(date));
        day.reserve(&id, start, end)?;

        self.events
            .push(Event::new(id.clone(), title, description, date, start, end));
        info!("added event {} on {} {}-{}", id, date, start, end);
        Ok(id)
    }

    /// Update an event's fields and move its reservation.
    ///
    /// Same date: the day table reassigns in place, and a `SlotConflict`
    /// leaves the old occupancy intact. Date change: the new day's slots are
    /// reserved before the old day's are released, then the registry entry is
    /// replaced by a new event carrying the same id (and its reminders).
    pub fn update_event(
        &mut self,
        id: &str,
        title: &str,
        description: &str,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> CalendarResult<()> {
        day::validate_range(start, end)?;
        let pos = self.event_position(id)?;
        let old_date = self.events[pos].date;

        if old_date == date {
            let day = self.days.entry(date).or_insert_with(|| Day::new(date));
            day.reassign(id, start, end)?;

            let event = &mut self.events[pos];
            event.title = title.to_string();
            event.description = description.to_string();
            event.start = start;
            event.end = end;
        } else {
            let new_day = self.days.entry(date).or_insert_with(|| Day::new(date));
            new_day.reserve(id, start, end)?;
            if let Some(old_day) = self.days.get_mut(&old_date) {
                old_day.release(id)?;
            }

            let mut replacement = Event::new(id.to_string(), title, description, date, start, end);
            replacement.reminders = std::mem::take(&mut self.events[pos].reminders);
            self.events[pos] = replacement;
        }
        info!("updated event {} to {} {}-{}", id, date, start, end);
        Ok(())
    }

    /// Remove an event and release its slots.
    pub fn delete_event(&mut self, id: &str) -> CalendarResult<()> {
        let pos = self.event_position(id)?;
        let event = self.events.remove(pos);
        if let Some(day) = self.days.get_mut(&event.date) {
            day.release(id)?;
        }
        info!("deleted event {}", id);
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All free slot start times on `date`, ascending. Empty if the date has
    /// never been referenced.
    pub fn find_available_slots(&self, date: NaiveDate) -> Vec<NaiveTime> {
        self.days
            .get(&date)
            .map(|day| day.available_slots())
            .unwrap_or_default()
    }

    /// Events with `start_date <= date <= end_date`, grouped by date.
    ///
    /// Group order and within-group order follow the insertion order of the
    /// matching events, not date order; callers wanting sorted output sort.
    pub fn find_events(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Vec<(NaiveDate, Vec<Event>)> {
        let mut groups: Vec<(NaiveDate, Vec<Event>)> = Vec::new();
        for event in &self.events {
            if event.date < start_date || event.date > end_date {
                continue;
            }
            match groups.iter_mut().find(|(date, _)| *date == event.date) {
                Some((_, group)) => group.push(event.clone()),
                None => groups.push((event.date, vec![event.clone()])),
            }
        }
        groups
    }

    /// Look up an event by id.
    pub fn event(&self, id: &str) -> CalendarResult<&Event> {
        self.events
            .iter()
            .find(|event| event.id == id)
            .ok_or_else(|| CalendarError::EventNotFound(id.to_string()))
    }

    /// All events in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The day table for `date`, if it has been created.
    pub fn day(&self, date: NaiveDate) -> Option<&Day> {
        self.days.get(&date)
    }

    // =========================================================================
    // Reminder operations
    // =========================================================================

    pub fn add_reminder(
        &mut self,
        event_id: &str,
        date_time: NaiveDateTime,
        kind: ReminderKind,
    ) -> CalendarResult<()> {
        self.event_mut(event_id)?.add_reminder(date_time, kind);
        Ok(())
    }

    pub fn delete_reminder(&mut self, event_id: &str, index: usize) -> CalendarResult<()> {
        self.event_mut(event_id)?.delete_reminder(index)
    }

    pub fn list_reminders(&self, event_id: &str) -> CalendarResult<&[Reminder]> {
        Ok(&self.event(event_id)?.reminders)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn event_position(&self, id: &str) -> CalendarResult<usize> {
        self.events
            .iter()
            .position(|event| event.id == id)
            .ok_or_else(|| CalendarError::EventNotFound(id.to_string()))
    }

    fn event_mut(&mut self, id: &str) -> CalendarResult<&mut Event> {
        self.events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or_else(|| CalendarError::EventNotFound(id.to_string()))
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}
