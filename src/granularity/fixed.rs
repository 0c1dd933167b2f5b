use chrono::{Datelike, NaiveDateTime};

use super::{GranularityStrategy, HeaderLayout, SnapGrid};
use crate::model::ViewMode;
use crate::time::{self, DAY_MS, HOUR_MS, MINUTE_MS, WEEK_MS};

/// Fraction of a fixed-length unit elapsed between `start` and `dt`.
fn elapsed_fraction(start: NaiveDateTime, dt: NaiveDateTime, unit_ms: i64) -> f64 {
    (time::elapsed_ms(start, dt) as f64 / unit_ms as f64).clamp(0.0, 1.0)
}

fn step(column_start: NaiveDateTime, columns: i64, unit_ms: i64) -> Option<NaiveDateTime> {
    columns
        .checked_mul(unit_ms)
        .and_then(|ms| time::shift_ms(column_start, ms))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MinuteGranularity;

impl GranularityStrategy for MinuteGranularity {
    fn mode(&self) -> ViewMode {
        ViewMode::Minute
    }

    fn unit_duration_ms(&self) -> Option<i64> {
        Some(MINUTE_MS)
    }

    fn min_pixel_width(&self) -> f64 {
        10.0
    }

    fn floor_to_unit(&self, dt: NaiveDateTime) -> NaiveDateTime {
        time::start_of_minute(dt)
    }

    fn ceil_to_unit(&self, dt: NaiveDateTime) -> NaiveDateTime {
        time::end_of_minute(dt)
    }

    fn snap_grid(&self, unit_width: f64) -> Option<SnapGrid> {
        Some(SnapGrid {
            step_px: unit_width,
            step_ms: MINUTE_MS,
        })
    }

    fn column_start(&self, dt: NaiveDateTime) -> NaiveDateTime {
        time::start_of_minute(dt)
    }

    fn advance(&self, column_start: NaiveDateTime, columns: i64) -> Option<NaiveDateTime> {
        step(column_start, columns, MINUTE_MS)
    }

    fn unit_fraction(&self, dt: NaiveDateTime) -> f64 {
        elapsed_fraction(time::start_of_minute(dt), dt, MINUTE_MS)
    }

    fn header_key(&self, dt: NaiveDateTime) -> Option<NaiveDateTime> {
        Some(time::start_of_hour(dt))
    }

    fn header_layout(&self) -> HeaderLayout {
        HeaderLayout::Runs
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HourGranularity;

impl GranularityStrategy for HourGranularity {
    fn mode(&self) -> ViewMode {
        ViewMode::Hour
    }

    fn unit_duration_ms(&self) -> Option<i64> {
        Some(HOUR_MS)
    }

    fn min_pixel_width(&self) -> f64 {
        15.0
    }

    fn floor_to_unit(&self, dt: NaiveDateTime) -> NaiveDateTime {
        time::start_of_hour(dt)
    }

    fn ceil_to_unit(&self, dt: NaiveDateTime) -> NaiveDateTime {
        time::end_of_hour(dt)
    }

    fn snap_grid(&self, unit_width: f64) -> Option<SnapGrid> {
        Some(SnapGrid {
            step_px: unit_width,
            step_ms: HOUR_MS,
        })
    }

    fn column_start(&self, dt: NaiveDateTime) -> NaiveDateTime {
        time::start_of_hour(dt)
    }

    fn advance(&self, column_start: NaiveDateTime, columns: i64) -> Option<NaiveDateTime> {
        step(column_start, columns, HOUR_MS)
    }

    fn unit_fraction(&self, dt: NaiveDateTime) -> f64 {
        elapsed_fraction(time::start_of_hour(dt), dt, HOUR_MS)
    }

    fn header_key(&self, dt: NaiveDateTime) -> Option<NaiveDateTime> {
        Some(time::start_of_day(dt))
    }

    fn header_layout(&self) -> HeaderLayout {
        HeaderLayout::Runs
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DayGranularity;

impl GranularityStrategy for DayGranularity {
    fn mode(&self) -> ViewMode {
        ViewMode::Day
    }

    fn unit_duration_ms(&self) -> Option<i64> {
        Some(DAY_MS)
    }

    fn min_pixel_width(&self) -> f64 {
        20.0
    }

    fn snap_quantum_px(&self, unit_width: f64) -> f64 {
        unit_width
    }

    fn floor_to_unit(&self, dt: NaiveDateTime) -> NaiveDateTime {
        time::start_of_day(dt)
    }

    fn ceil_to_unit(&self, dt: NaiveDateTime) -> NaiveDateTime {
        time::end_of_day(dt)
    }

    fn snap_grid(&self, unit_width: f64) -> Option<SnapGrid> {
        Some(SnapGrid {
            step_px: unit_width,
            step_ms: DAY_MS,
        })
    }

    fn column_start(&self, dt: NaiveDateTime) -> NaiveDateTime {
        time::start_of_day(dt)
    }

    fn advance(&self, column_start: NaiveDateTime, columns: i64) -> Option<NaiveDateTime> {
        step(column_start, columns, DAY_MS)
    }

    fn unit_fraction(&self, dt: NaiveDateTime) -> f64 {
        elapsed_fraction(time::start_of_day(dt), dt, DAY_MS)
    }

    fn header_key(&self, dt: NaiveDateTime) -> Option<NaiveDateTime> {
        Some(time::start_of_month(dt))
    }

    fn header_layout(&self) -> HeaderLayout {
        HeaderLayout::MonthBlocks { min_units: 2 }
    }
}

/// Week columns are snapped to whole days (a seventh of the column).
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekGranularity;

impl GranularityStrategy for WeekGranularity {
    fn mode(&self) -> ViewMode {
        ViewMode::Week
    }

    fn unit_duration_ms(&self) -> Option<i64> {
        Some(WEEK_MS)
    }

    fn min_pixel_width(&self) -> f64 {
        20.0
    }

    fn snap_quantum_px(&self, unit_width: f64) -> f64 {
        unit_width / 7.0
    }

    fn floor_to_unit(&self, dt: NaiveDateTime) -> NaiveDateTime {
        time::start_of_day(dt)
    }

    fn ceil_to_unit(&self, dt: NaiveDateTime) -> NaiveDateTime {
        time::end_of_day(dt)
    }

    fn snap_grid(&self, unit_width: f64) -> Option<SnapGrid> {
        Some(SnapGrid {
            step_px: unit_width / 7.0,
            step_ms: DAY_MS,
        })
    }

    // Columns run in 7-day steps from the (day-aligned) window start rather
    // than from a fixed weekday.
    fn column_start(&self, dt: NaiveDateTime) -> NaiveDateTime {
        time::start_of_day(dt)
    }

    fn advance(&self, column_start: NaiveDateTime, columns: i64) -> Option<NaiveDateTime> {
        step(column_start, columns, WEEK_MS)
    }

    // Day of week with Sunday as 0. Marker placement in week mode goes through
    // the grid-exact elapsed fraction instead; this is the per-column rule.
    fn unit_fraction(&self, dt: NaiveDateTime) -> f64 {
        f64::from(dt.weekday().num_days_from_sunday()) / 6.0
    }

    fn header_key(&self, dt: NaiveDateTime) -> Option<NaiveDateTime> {
        Some(time::start_of_month(dt))
    }

    fn header_layout(&self) -> HeaderLayout {
        HeaderLayout::MonthBlocks { min_units: 1 }
    }
}
