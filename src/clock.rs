//! Current-date source for event validation.

use chrono::{Local, NaiveDate};

/// Supplies "today" for rejecting events scheduled in the past.
///
/// The calendar only ever asks for the current date, so tests can pin
/// time by injecting a fixed implementation via
/// [`Calendar::with_clock`](crate::Calendar::with_clock).
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
