//! Calendar-field trigger construction
//!
//! Triggers match at calendar-field granularity (year, month, day, hour,
//! minute). Sub-minute precision is dropped by design: the minute is the
//! finest field the trigger carries, so an alarm set for 07:00:30 fires at
//! 07:00.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

/// Discrete date/time components a trigger matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl CalendarFields {
    /// Extract matching fields from an absolute local time
    pub fn from_datetime(dt: &DateTime<Local>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
        }
    }
}

/// A one-shot time condition handed to the notification service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarTrigger {
    fields: CalendarFields,
    repeats: bool,
}

impl CalendarTrigger {
    /// Build a single-shot trigger; repeating triggers are not supported
    pub fn once(fields: CalendarFields) -> Self {
        Self {
            fields,
            repeats: false,
        }
    }

    pub fn fields(&self) -> &CalendarFields {
        &self.fields
    }

    pub fn repeats(&self) -> bool {
        self.repeats
    }

    /// The earliest local instant matching the trigger's fields
    ///
    /// Returns `None` for field combinations with no local representation
    /// (nonexistent dates, wall times skipped by a DST transition).
    /// DST-ambiguous wall times resolve to the earlier offset.
    pub fn fire_date(&self) -> Option<DateTime<Local>> {
        let f = &self.fields;
        Local
            .with_ymd_and_hms(f.year, f.month, f.day, f.hour, f.minute, 0)
            .earliest()
    }
}

/// Zero out seconds and sub-second fields
///
/// The stored record and the registered trigger are both built from the
/// truncated value so they always agree.
pub fn truncate_to_minute(dt: DateTime<Local>) -> DateTime<Local> {
    dt.with_second(0)
        .and_then(|dt| dt.with_nanosecond(0))
        .unwrap_or(dt)
}
