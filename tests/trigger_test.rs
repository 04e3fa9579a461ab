//! Tests for calendar-field trigger construction

mod common;

use alarm_slot::{CalendarFields, CalendarTrigger, truncate_to_minute};
use chrono::{Local, TimeZone, Timelike};
use common::local_time;

#[test]
fn test_fields_capture_minute_granularity() {
    let when = local_time(2030, 4, 12, 6, 45);
    let fields = CalendarFields::from_datetime(&when);
    assert_eq!(
        fields,
        CalendarFields {
            year: 2030,
            month: 4,
            day: 12,
            hour: 6,
            minute: 45,
        }
    );
}

#[test]
fn test_fire_date_reconstructs_the_trigger_instant() {
    let when = local_time(2030, 4, 12, 6, 45);
    let trigger = CalendarTrigger::once(CalendarFields::from_datetime(&when));

    let fire = trigger.fire_date().expect("representable local time");
    assert_eq!(fire, when);
    assert_eq!(fire.second(), 0);
}

#[test]
fn test_fire_date_rejects_nonexistent_fields() {
    // February 30th has no local representation in any timezone.
    let trigger = CalendarTrigger::once(CalendarFields {
        year: 2030,
        month: 2,
        day: 30,
        hour: 7,
        minute: 0,
    });
    assert_eq!(trigger.fire_date(), None);

    let bad_minute = CalendarTrigger::once(CalendarFields {
        year: 2030,
        month: 1,
        day: 1,
        hour: 7,
        minute: 60,
    });
    assert_eq!(bad_minute.fire_date(), None);
}

#[test]
fn test_triggers_are_always_single_shot() {
    let trigger =
        CalendarTrigger::once(CalendarFields::from_datetime(&local_time(2030, 1, 1, 7, 0)));
    assert!(!trigger.repeats());
}

#[test]
fn test_truncate_drops_sub_minute_precision() {
    let with_seconds = Local
        .with_ymd_and_hms(2030, 1, 1, 7, 0, 59)
        .single()
        .expect("unambiguous local time");

    let truncated = truncate_to_minute(with_seconds);
    assert_eq!(truncated.second(), 0);
    assert_eq!(truncated.nanosecond(), 0);
    assert_eq!(truncated, local_time(2030, 1, 1, 7, 0));
}

#[test]
fn test_truncate_is_idempotent() {
    let exact = local_time(2030, 1, 1, 7, 0);
    assert_eq!(truncate_to_minute(exact), exact);
}
