//! In-memory calendar manager with 15-minute slot allocation.
//!
//! A [`Calendar`] owns events and one slot table per date. Each [`Day`]
//! divides its date into 96 fixed 15-minute slots and tracks which event
//! holds each slot, so no two events can ever overlap. Everything is
//! single-threaded and in-memory; persistence and presentation are the
//! embedding application's concern.

pub mod calendar;
pub mod clock;
pub mod day;
pub mod error;
pub mod event;
pub mod reminder;

pub use calendar::Calendar;
pub use clock::{Clock, SystemClock};
pub use day::{Day, SLOT_MINUTES, SLOTS_PER_DAY};
pub use error::{CalendarError, CalendarResult};
pub use event::Event;
pub use reminder::{Reminder, ReminderKind};
