//! Per-view-mode granularity rules.
//!
//! Each [`ViewMode`] has one zero-sized [`GranularityStrategy`]
//! implementation. The mapper, the marker positioner and the header grouping
//! engine all dispatch through [`strategy`] instead of matching on the mode
//! themselves, so a new granularity is one new impl plus one arm here.

mod calendar;
mod fixed;

use chrono::NaiveDateTime;

use crate::model::ViewMode;

pub use calendar::{MonthGranularity, QuarterGranularity, YearGranularity};
pub use fixed::{DayGranularity, HourGranularity, MinuteGranularity, WeekGranularity};

/// The grid a pixel position is snapped to when converting back to dates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapGrid {
    /// Pixel width of one grid step.
    pub step_px: f64,
    /// Duration of one grid step.
    pub step_ms: i64,
}

pub trait GranularityStrategy: Send + Sync {
    fn mode(&self) -> ViewMode;

    /// Constant duration of one column, `None` for calendar-variable modes.
    fn unit_duration_ms(&self) -> Option<i64>;

    /// Narrowest width a task bar is rendered at.
    fn min_pixel_width(&self) -> f64;

    /// Pixel quantum bar edges align to. `1.0` means no snapping.
    fn snap_quantum_px(&self, _unit_width: f64) -> f64 {
        1.0
    }

    /// Start of the enclosing minute, hour or day. Identity for calendar modes.
    fn floor_to_unit(&self, dt: NaiveDateTime) -> NaiveDateTime {
        dt
    }

    /// Last millisecond of the enclosing minute, hour or day. Identity for
    /// calendar modes.
    fn ceil_to_unit(&self, dt: NaiveDateTime) -> NaiveDateTime {
        dt
    }

    /// Grid used to snap pixel positions back to dates; `None` when the mode
    /// has no sub-unit snapping.
    fn snap_grid(&self, _unit_width: f64) -> Option<SnapGrid> {
        None
    }

    /// Precision a task start is normalized to before placement.
    fn normalize_start(&self, dt: NaiveDateTime) -> NaiveDateTime {
        self.floor_to_unit(dt)
    }

    /// Precision a task end is normalized to before placement.
    fn normalize_end(&self, dt: NaiveDateTime) -> NaiveDateTime {
        self.ceil_to_unit(dt)
    }

    /// Start of the rendered column containing `dt`.
    fn column_start(&self, dt: NaiveDateTime) -> NaiveDateTime;

    /// Step a column start forward (or back) by `columns` columns.
    fn advance(&self, column_start: NaiveDateTime, columns: i64) -> Option<NaiveDateTime>;

    /// Position of `dt` inside its column, in `[0, 1]`.
    fn unit_fraction(&self, dt: NaiveDateTime) -> f64;

    /// Parent-granularity key used to group columns into the secondary
    /// header row. `None` when the mode renders only the primitive header.
    fn header_key(&self, _dt: NaiveDateTime) -> Option<NaiveDateTime> {
        None
    }

    /// How the secondary header row is built from the columns.
    fn header_layout(&self) -> HeaderLayout {
        HeaderLayout::PrimaryOnly
    }
}

/// Secondary header construction for a view mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLayout {
    /// No secondary header row.
    PrimaryOnly,
    /// Consecutive columns sharing a [`GranularityStrategy::header_key`] form
    /// one group; spans are whole column counts.
    Runs,
    /// Month blocks clamped to the covered range; spans may be fractional.
    /// Fewer than `min_units` columns produce no header row.
    MonthBlocks { min_units: usize },
}

static MINUTE: MinuteGranularity = MinuteGranularity;
static HOUR: HourGranularity = HourGranularity;
static DAY: DayGranularity = DayGranularity;
static WEEK: WeekGranularity = WeekGranularity;
static MONTH: MonthGranularity = MonthGranularity;
static QUARTER: QuarterGranularity = QuarterGranularity;
static YEAR: YearGranularity = YearGranularity;

pub fn strategy(mode: ViewMode) -> &'static dyn GranularityStrategy {
    match mode {
        ViewMode::Minute => &MINUTE,
        ViewMode::Hour => &HOUR,
        ViewMode::Day => &DAY,
        ViewMode::Week => &WEEK,
        ViewMode::Month => &MONTH,
        ViewMode::Quarter => &QUARTER,
        ViewMode::Year => &YEAR,
    }
}

pub fn unit_duration_ms(mode: ViewMode) -> Option<i64> {
    strategy(mode).unit_duration_ms()
}

pub fn min_pixel_width(mode: ViewMode) -> f64 {
    strategy(mode).min_pixel_width()
}

pub fn snap_quantum_px(mode: ViewMode, unit_width: f64) -> f64 {
    strategy(mode).snap_quantum_px(unit_width)
}

pub fn floor_to_unit(dt: NaiveDateTime, mode: ViewMode) -> NaiveDateTime {
    strategy(mode).floor_to_unit(dt)
}

pub fn ceil_to_unit(dt: NaiveDateTime, mode: ViewMode) -> NaiveDateTime {
    strategy(mode).ceil_to_unit(dt)
}

/// Round `value` to the nearest multiple of `quantum`. Quanta of 1px or less
/// leave the value untouched.
pub fn snap_to_quantum(value: f64, quantum: f64) -> f64 {
    if quantum > 1.0 && quantum.is_finite() {
        (value / quantum).round() * quantum
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time;

    #[test]
    fn strategies_report_their_mode() {
        for mode in ViewMode::ALL {
            assert_eq!(strategy(mode).mode(), mode);
        }
    }

    #[test]
    fn unit_durations() {
        assert_eq!(unit_duration_ms(ViewMode::Minute), Some(60_000));
        assert_eq!(unit_duration_ms(ViewMode::Hour), Some(3_600_000));
        assert_eq!(unit_duration_ms(ViewMode::Day), Some(86_400_000));
        assert_eq!(unit_duration_ms(ViewMode::Week), Some(604_800_000));
        assert_eq!(unit_duration_ms(ViewMode::Month), None);
        assert_eq!(unit_duration_ms(ViewMode::Quarter), None);
        assert_eq!(unit_duration_ms(ViewMode::Year), None);
    }

    #[test]
    fn minimum_widths() {
        let widths: Vec<f64> = ViewMode::ALL.into_iter().map(min_pixel_width).collect();
        assert_eq!(widths, vec![10.0, 15.0, 20.0, 20.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn snap_quanta() {
        assert_eq!(snap_quantum_px(ViewMode::Day, 150.0), 150.0);
        assert_eq!(snap_quantum_px(ViewMode::Week, 140.0), 20.0);
        assert_eq!(snap_quantum_px(ViewMode::Hour, 80.0), 1.0);
        assert_eq!(snap_quantum_px(ViewMode::Minute, 80.0), 1.0);
    }

    #[test]
    fn calendar_modes_do_not_round() {
        let dt = time::shift_ms(time::midnight(2024, 7, 9).unwrap(), 5 * time::HOUR_MS).unwrap();
        for mode in [ViewMode::Month, ViewMode::Quarter, ViewMode::Year] {
            assert_eq!(floor_to_unit(dt, mode), dt);
            assert_eq!(ceil_to_unit(dt, mode), dt);
        }
        assert_eq!(floor_to_unit(dt, ViewMode::Week), time::midnight(2024, 7, 9).unwrap());
    }

    #[test]
    fn quantum_snapping() {
        assert_eq!(snap_to_quantum(29.0, 20.0), 20.0);
        assert_eq!(snap_to_quantum(31.0, 20.0), 40.0);
        assert_eq!(snap_to_quantum(31.4, 1.0), 31.4);
    }
}
