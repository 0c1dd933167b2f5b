//! Calendar-field helpers over `NaiveDateTime`.
//!
//! All instants are read as host-local wall-clock fields. Millisecond math
//! goes through [`to_millis`] / [`from_millis`] so that every component
//! shares one epoch.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub const MINUTE_MS: i64 = 60_000;
pub const HOUR_MS: i64 = 3_600_000;
pub const DAY_MS: i64 = 86_400_000;
pub const WEEK_MS: i64 = 604_800_000;

/// Milliseconds since the Unix epoch, treating the wall clock as UTC.
pub fn to_millis(dt: NaiveDateTime) -> i64 {
    dt.and_utc().timestamp_millis()
}

/// Inverse of [`to_millis`]. `None` when outside chrono's representable range.
pub fn from_millis(ms: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(ms).map(|dt| dt.naive_utc())
}

/// Shift an instant by a signed number of milliseconds.
pub fn shift_ms(dt: NaiveDateTime, ms: i64) -> Option<NaiveDateTime> {
    to_millis(dt).checked_add(ms).and_then(from_millis)
}

/// Signed distance `b - a` in milliseconds.
pub fn elapsed_ms(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    to_millis(b) - to_millis(a)
}

fn last_milli() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN)
}

pub fn start_of_minute(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_nanosecond(0)
        .and_then(|d| d.with_second(0))
        .unwrap_or(dt)
}

pub fn end_of_minute(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_nanosecond(999_000_000)
        .and_then(|d| d.with_second(59))
        .unwrap_or(dt)
}

pub fn start_of_hour(dt: NaiveDateTime) -> NaiveDateTime {
    start_of_minute(dt).with_minute(0).unwrap_or(dt)
}

pub fn end_of_hour(dt: NaiveDateTime) -> NaiveDateTime {
    end_of_minute(dt).with_minute(59).unwrap_or(dt)
}

pub fn start_of_day(dt: NaiveDateTime) -> NaiveDateTime {
    dt.date().and_time(NaiveTime::MIN)
}

pub fn end_of_day(dt: NaiveDateTime) -> NaiveDateTime {
    dt.date().and_time(last_milli())
}

pub fn start_of_month(dt: NaiveDateTime) -> NaiveDateTime {
    first_of(dt.year(), dt.month()).unwrap_or_else(|| start_of_day(dt))
}

pub fn start_of_quarter(dt: NaiveDateTime) -> NaiveDateTime {
    let month = (dt.month0() / 3) * 3 + 1;
    first_of(dt.year(), month).unwrap_or_else(|| start_of_day(dt))
}

pub fn start_of_year(dt: NaiveDateTime) -> NaiveDateTime {
    first_of(dt.year(), 1).unwrap_or_else(|| start_of_day(dt))
}

/// Midnight on the first day of `year`-`month`.
pub fn first_of(year: i32, month: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, 1).map(|d| d.and_time(NaiveTime::MIN))
}

/// Add whole calendar months to a month start. Only month starts are stepped,
/// so no day-of-month clamping is needed.
pub fn add_months(month_start: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let index = i64::from(month_start.year()) * 12 + i64::from(month_start.month0()) + months;
    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
    first_of(year, month)
}

/// Whole calendar months from the month of `a` to the month of `b`.
pub fn months_between(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    (i64::from(b.year()) - i64::from(a.year())) * 12 + i64::from(b.month0())
        - i64::from(a.month0())
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (NaiveDate::from_ymd_opt(year, month, 1), next) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 30,
    }
}

pub fn days_in_year(year: i32) -> u32 {
    match NaiveDate::from_ymd_opt(year, 2, 29) {
        Some(_) => 366,
        None => 365,
    }
}

/// Midnight on the given calendar date; convenience for callers and tests.
pub fn midnight(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.and_time(NaiveTime::MIN))
}
