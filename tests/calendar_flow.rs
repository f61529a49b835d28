use chrono::NaiveDate;
use slotcal::{Calendar, CalendarError, Clock, ReminderKind, SLOTS_PER_DAY};

struct FixedClock(NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

fn calendar() -> Calendar {
    Calendar::with_clock(Box::new(FixedClock(today())))
}

fn time(hour: u32, minute: u32) -> chrono::NaiveTime {
    chrono::NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

#[test]
fn standup_then_conflicting_event() {
    let mut cal = calendar();

    let standup = cal
        .add_event("Standup", "daily sync", today(), time(9, 0), time(9, 30))
        .unwrap();
    assert!(!standup.is_empty());

    let err = cal
        .add_event("Conflict", "x", today(), time(9, 15), time(9, 45))
        .unwrap_err();
    assert!(matches!(err, CalendarError::SlotConflict { .. }));
}

#[test]
fn untouched_date_has_all_96_slots() {
    let mut cal = calendar();
    // Referencing the date creates its day table
    let id = cal
        .add_event("Lunch", "", today(), time(12, 0), time(13, 0))
        .unwrap();
    cal.delete_event(&id).unwrap();

    let free = cal.find_available_slots(today());
    assert_eq!(free.len(), SLOTS_PER_DAY);
    assert_eq!(free.first(), Some(&time(0, 0)));
    assert_eq!(free.last(), Some(&time(23, 45)));
}

#[test]
fn create_then_delete_roundtrip() {
    let mut cal = calendar();
    let before = cal.find_available_slots(today());

    let id = cal
        .add_event("Standup", "daily sync", today(), time(9, 0), time(9, 30))
        .unwrap();
    assert_eq!(cal.find_available_slots(today()).len(), SLOTS_PER_DAY - 2);

    cal.delete_event(&id).unwrap();
    let after = cal.find_available_slots(today());
    assert_eq!(after.len(), SLOTS_PER_DAY);
    // A date that never had a day table reports no slots at all
    assert!(before.is_empty());
}

#[test]
fn full_event_lifecycle_with_reminders() {
    let mut cal = calendar();

    let id = cal
        .add_event("Planning", "sprint planning", today(), time(14, 0), time(15, 0))
        .unwrap();

    cal.add_reminder(&id, today().and_hms_opt(13, 30, 0).unwrap(), ReminderKind::Email)
        .unwrap();
    cal.add_reminder(&id, today().and_hms_opt(13, 45, 0).unwrap(), ReminderKind::System)
        .unwrap();
    assert_eq!(cal.list_reminders(&id).unwrap().len(), 2);

    let err = cal.delete_reminder(&id, 5).unwrap_err();
    assert!(matches!(
        err,
        CalendarError::ReminderNotFound { index: 5, len: 2 }
    ));

    cal.delete_reminder(&id, 0).unwrap();
    let reminders = cal.list_reminders(&id).unwrap();
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].kind, ReminderKind::System);

    // Move the event; the reservation follows
    cal.update_event(&id, "Planning", "moved", today(), time(16, 0), time(17, 0))
        .unwrap();
    let free = cal.find_available_slots(today());
    assert!(free.contains(&time(14, 0)));
    assert!(!free.contains(&time(16, 0)));

    cal.delete_event(&id).unwrap();
    assert_eq!(cal.find_available_slots(today()).len(), SLOTS_PER_DAY);
}

#[test]
fn no_double_booking_across_operations() {
    let mut cal = calendar();

    let a = cal
        .add_event("A", "", today(), time(9, 0), time(10, 0))
        .unwrap();
    let b = cal
        .add_event("B", "", today(), time(10, 0), time(11, 0))
        .unwrap();

    // B cannot be moved onto A, in whole or in part
    assert!(cal
        .update_event(&b, "B", "", today(), time(9, 30), time(10, 30))
        .is_err());

    // After a failed move, both reservations are where they started
    let day = cal.day(today()).unwrap();
    assert_eq!(day.occupant(time(9, 0)), Some(a.as_str()));
    assert_eq!(day.occupant(time(10, 0)), Some(b.as_str()));

    // Deleting A frees its range for B
    cal.delete_event(&a).unwrap();
    cal.update_event(&b, "B", "", today(), time(9, 30), time(10, 30))
        .unwrap();
    let day = cal.day(today()).unwrap();
    assert_eq!(day.occupant(time(9, 30)), Some(b.as_str()));
    assert_eq!(day.occupant(time(10, 30)), None);
}

#[test]
fn past_date_rejected_at_creation_only() {
    let mut cal = calendar();
    let yesterday = today().pred_opt().unwrap();

    let err = cal
        .add_event("Retro", "x", yesterday, time(9, 0), time(9, 30))
        .unwrap_err();
    assert!(matches!(err, CalendarError::InvalidDate(_)));
    assert!(cal.find_available_slots(yesterday).is_empty());
}
