//! Bidirectional date ⇄ pixel conversion.
//!
//! Both directions share one effective-duration rule
//! ([`TimelineWindow::effective_duration_ms`]) and one precision
//! normalization (the strategy's `normalize_start` / `normalize_end`), so a
//! bar converted to pixels and back lands on the same snapped dates.
//!
//! # Invariants
//! - Conversions never panic and never return an error; malformed input is
//!   replaced with a safe default or the window bounds, and logged.
//! - `to_date_interval` output always lies inside `[window.start, window.end]`.
//! - `to_pixel_interval` output is never narrower than the mode's minimum
//!   width and never extends past `window.total_width()` unless the minimum
//!   width itself does.

use chrono::NaiveDateTime;
use log::{debug, warn};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::granularity::snap_to_quantum;
use crate::model::{DateInterval, PixelInterval, Task, TimelineWindow};
use crate::time;

/// Converts between a timeline's date axis and its pixel axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateMapper {
    config: EngineConfig,
}

impl CoordinateMapper {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Translate a rendered bar position into the dates it represents.
    ///
    /// A NaN or negative `left` is read as `0`; a NaN or non-positive `width`
    /// is replaced with the configured fallback width. The result is snapped
    /// to the mode's grid and then clamped into the window.
    pub fn to_date_interval(&self, pixel: PixelInterval, window: &TimelineWindow) -> DateInterval {
        match self.try_to_date_interval(pixel, window) {
            Ok(interval) => interval,
            Err(err) => {
                warn!(
                    "event=to_date_fallback module=mapper status=degraded view_mode={} reason=\"{err}\"",
                    window.view_mode
                );
                window_bounds(window)
            }
        }
    }

    /// Place a date interval on the pixel axis.
    ///
    /// Falls back to the full window width when the interval or the window
    /// is malformed.
    pub fn to_pixel_interval(
        &self,
        interval: DateInterval,
        window: &TimelineWindow,
    ) -> PixelInterval {
        match self.try_to_pixel_interval(interval, window) {
            Ok(pixel) => pixel,
            Err(err) => {
                warn!(
                    "event=to_pixel_fallback module=mapper status=degraded view_mode={} reason=\"{err}\"",
                    window.view_mode
                );
                PixelInterval::new(0.0, sanitize_total(window.total_width()))
            }
        }
    }

    /// A copy of `task` with dates taken from its dragged bar position.
    pub fn drag_task(&self, task: &Task, pixel: PixelInterval, window: &TimelineWindow) -> Task {
        task.with_dates(self.to_date_interval(pixel, window))
    }

    pub fn pixel_interval_for_task(&self, task: &Task, window: &TimelineWindow) -> PixelInterval {
        self.to_pixel_interval(task.interval(), window)
    }

    fn try_to_date_interval(
        &self,
        pixel: PixelInterval,
        window: &TimelineWindow,
    ) -> Result<DateInterval, EngineError> {
        window.validate()?;
        let strategy = window.view_mode.strategy();
        let total = window.total_width();

        let left = sanitize_left(pixel.left).min(total);
        let width = self.sanitize_width(pixel.width).min(total);

        let (start, end) = match strategy.snap_grid(window.unit_width) {
            Some(grid) => {
                let origin = strategy.floor_to_unit(window.start);
                let offset = (left / grid.step_px).round() as i64;
                let steps = ((width / grid.step_px).round() as i64).max(1);
                let start = shift(origin, offset.checked_mul(grid.step_ms))?;
                let end = shift(start, steps.checked_mul(grid.step_ms).map(|ms| ms - 1))?;
                (start, strategy.ceil_to_unit(end))
            }
            None => {
                let ms_per_px = window.effective_duration_ms() as f64 / total;
                let raw_start = shift(window.start, Some((left * ms_per_px).round() as i64))?;
                let raw_end =
                    shift(window.start, Some(((left + width) * ms_per_px).round() as i64))?;
                (
                    strategy.normalize_start(raw_start),
                    strategy.normalize_end(raw_end),
                )
            }
        };

        let start = start.clamp(window.start, window.end);
        let end = end.clamp(start, window.end);
        Ok(DateInterval { start, end })
    }

    fn try_to_pixel_interval(
        &self,
        interval: DateInterval,
        window: &TimelineWindow,
    ) -> Result<PixelInterval, EngineError> {
        window.validate()?;
        interval.validate()?;
        let strategy = window.view_mode.strategy();
        let total = window.total_width();
        let duration = window.effective_duration_ms() as f64;

        let origin = strategy.floor_to_unit(window.start);
        let start = strategy.normalize_start(interval.start).clamp(origin, window.end);
        let end = strategy.normalize_end(interval.end).max(start);
        // Width is measured from the clamped start, so a task that begins
        // before the window only shows its visible part.
        let left_px = time::elapsed_ms(origin, start) as f64 / duration * total;
        let width_px = time::elapsed_ms(start, end) as f64 / duration * total;

        let quantum = strategy.snap_quantum_px(window.unit_width);
        let left = snap_to_quantum(left_px, quantum).clamp(0.0, total);
        let min_width = self.config.min_width(window.view_mode);
        let width = snap_to_quantum(width_px, quantum)
            .min(total - left)
            .max(min_width);
        let left = if left + width > total {
            (total - width).max(0.0)
        } else {
            left
        };

        if width != width_px {
            debug!(
                "event=width_adjusted module=mapper view_mode={} raw={width_px:.3} snapped={width:.3}",
                window.view_mode
            );
        }
        Ok(PixelInterval { left, width })
    }

    fn sanitize_width(&self, width: f64) -> f64 {
        if width.is_finite() && width > 0.0 {
            width
        } else {
            debug!("event=width_substituted module=mapper raw={width}");
            self.config.fallback_width_px
        }
    }
}

/// [`CoordinateMapper::to_date_interval`] with the default configuration.
pub fn to_date_interval(pixel: PixelInterval, window: &TimelineWindow) -> DateInterval {
    CoordinateMapper::default().to_date_interval(pixel, window)
}

/// [`CoordinateMapper::to_pixel_interval`] with the default configuration.
pub fn to_pixel_interval(interval: DateInterval, window: &TimelineWindow) -> PixelInterval {
    CoordinateMapper::default().to_pixel_interval(interval, window)
}

/// [`CoordinateMapper::drag_task`] with the default configuration.
pub fn drag_task(task: &Task, pixel: PixelInterval, window: &TimelineWindow) -> Task {
    CoordinateMapper::default().drag_task(task, pixel, window)
}

fn sanitize_left(left: f64) -> f64 {
    if left.is_finite() && left > 0.0 {
        left
    } else {
        0.0
    }
}

fn sanitize_total(total: f64) -> f64 {
    if total.is_finite() && total > 0.0 {
        total
    } else {
        0.0
    }
}

fn shift(dt: NaiveDateTime, ms: Option<i64>) -> Result<NaiveDateTime, EngineError> {
    ms.and_then(|ms| time::shift_ms(dt, ms))
        .ok_or(EngineError::OutOfRange)
}

fn window_bounds(window: &TimelineWindow) -> DateInterval {
    DateInterval {
        start: window.start,
        end: window.end.max(window.start),
    }
}
