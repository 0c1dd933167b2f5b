use chrono::{Datelike, NaiveDateTime};

use super::GranularityStrategy;
use crate::model::ViewMode;
use crate::time;

// Calendar modes have no constant column length: positions inside a column
// are proportional calendar-field fractions and task edges are only rounded
// to whole days.

#[derive(Debug, Clone, Copy, Default)]
pub struct MonthGranularity;

impl GranularityStrategy for MonthGranularity {
    fn mode(&self) -> ViewMode {
        ViewMode::Month
    }

    fn unit_duration_ms(&self) -> Option<i64> {
        None
    }

    fn min_pixel_width(&self) -> f64 {
        20.0
    }

    fn normalize_start(&self, dt: NaiveDateTime) -> NaiveDateTime {
        time::start_of_day(dt)
    }

    fn normalize_end(&self, dt: NaiveDateTime) -> NaiveDateTime {
        time::end_of_day(dt)
    }

    fn column_start(&self, dt: NaiveDateTime) -> NaiveDateTime {
        time::start_of_month(dt)
    }

    fn advance(&self, column_start: NaiveDateTime, columns: i64) -> Option<NaiveDateTime> {
        time::add_months(column_start, columns)
    }

    fn unit_fraction(&self, dt: NaiveDateTime) -> f64 {
        f64::from(dt.day() - 1) / f64::from(time::days_in_month(dt.year(), dt.month()))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct QuarterGranularity;

impl GranularityStrategy for QuarterGranularity {
    fn mode(&self) -> ViewMode {
        ViewMode::Quarter
    }

    fn unit_duration_ms(&self) -> Option<i64> {
        None
    }

    fn min_pixel_width(&self) -> f64 {
        30.0
    }

    fn normalize_start(&self, dt: NaiveDateTime) -> NaiveDateTime {
        time::start_of_day(dt)
    }

    fn normalize_end(&self, dt: NaiveDateTime) -> NaiveDateTime {
        time::end_of_day(dt)
    }

    fn column_start(&self, dt: NaiveDateTime) -> NaiveDateTime {
        time::start_of_quarter(dt)
    }

    fn advance(&self, column_start: NaiveDateTime, columns: i64) -> Option<NaiveDateTime> {
        time::add_months(column_start, columns.checked_mul(3)?)
    }

    fn unit_fraction(&self, dt: NaiveDateTime) -> f64 {
        let start = time::start_of_quarter(dt);
        let Some(end) = time::add_months(start, 3) else {
            return 0.0;
        };
        let elapsed = (time::start_of_day(dt) - start).num_days();
        let total = (end - start).num_days();
        elapsed as f64 / total as f64
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct YearGranularity;

impl GranularityStrategy for YearGranularity {
    fn mode(&self) -> ViewMode {
        ViewMode::Year
    }

    fn unit_duration_ms(&self) -> Option<i64> {
        None
    }

    fn min_pixel_width(&self) -> f64 {
        40.0
    }

    fn normalize_start(&self, dt: NaiveDateTime) -> NaiveDateTime {
        time::start_of_day(dt)
    }

    fn normalize_end(&self, dt: NaiveDateTime) -> NaiveDateTime {
        time::end_of_day(dt)
    }

    fn column_start(&self, dt: NaiveDateTime) -> NaiveDateTime {
        time::start_of_year(dt)
    }

    fn advance(&self, column_start: NaiveDateTime, columns: i64) -> Option<NaiveDateTime> {
        time::add_months(column_start, columns.checked_mul(12)?)
    }

    fn unit_fraction(&self, dt: NaiveDateTime) -> f64 {
        f64::from(dt.ordinal0()) / f64::from(time::days_in_year(dt.year()))
    }
}
