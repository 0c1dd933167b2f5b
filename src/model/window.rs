use chrono::NaiveDateTime;
use log::warn;
use serde::{Deserialize, Serialize};

use super::ViewMode;
use crate::error::EngineError;
use crate::time;

/// The reference frame a rendered timeline lays its columns out in.
///
/// Owned by the rendering layer; the engine only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineWindow {
    /// The leftmost rendered instant.
    pub start: NaiveDateTime,
    /// The rightmost rendered instant.
    pub end: NaiveDateTime,
    /// Number of rendered columns.
    pub total_units: u32,
    /// Pixels per column.
    pub unit_width: f64,
    /// Current column granularity.
    pub view_mode: ViewMode,
}

impl TimelineWindow {
    /// Build a window, rejecting degenerate input.
    pub fn try_new(
        start: NaiveDateTime,
        end: NaiveDateTime,
        total_units: u32,
        unit_width: f64,
        view_mode: ViewMode,
    ) -> Result<Self, EngineError> {
        let window = Self {
            start,
            end,
            total_units,
            unit_width,
            view_mode,
        };
        window.validate()?;
        Ok(window)
    }

    /// Build a window, clamping degenerate input into a usable one.
    ///
    /// A non-increasing range is widened to one unit (one day for calendar
    /// modes), zero units become one and an unusable width becomes 1px.
    pub fn new(
        start: NaiveDateTime,
        end: NaiveDateTime,
        total_units: u32,
        unit_width: f64,
        view_mode: ViewMode,
    ) -> Self {
        let mut window = Self {
            start,
            end,
            total_units,
            unit_width,
            view_mode,
        };
        if let Err(err) = window.validate() {
            warn!("event=window_clamped module=model status=degraded reason=\"{err}\"");
        }
        if window.end <= window.start {
            let step = view_mode.strategy().unit_duration_ms().unwrap_or(time::DAY_MS);
            window.end = time::shift_ms(start, step).unwrap_or(start);
        }
        if window.total_units == 0 {
            window.total_units = 1;
        }
        if !(window.unit_width.is_finite() && window.unit_width > 0.0) {
            window.unit_width = 1.0;
        }
        window
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.end <= self.start {
            return Err(EngineError::DegenerateWindow {
                start: self.start,
                end: self.end,
            });
        }
        if self.total_units == 0 {
            return Err(EngineError::ZeroUnits);
        }
        if !(self.unit_width.is_finite() && self.unit_width > 0.0) {
            return Err(EngineError::InvalidUnitWidth(self.unit_width));
        }
        Ok(())
    }

    /// Total width in pixels of all rendered columns.
    pub fn total_width(&self) -> f64 {
        f64::from(self.total_units) * self.unit_width
    }

    /// Duration the pixel axis represents.
    ///
    /// Fixed-duration modes use `total_units × unit duration` so that pixel
    /// math lands exactly on rendered column boundaries; calendar modes use the
    /// literal span between `start` and `end`.
    pub fn effective_duration_ms(&self) -> i64 {
        match self.view_mode.strategy().unit_duration_ms() {
            Some(unit) => i64::from(self.total_units) * unit,
            None => time::elapsed_ms(self.start, self.end),
        }
    }

    /// Window start rounded down to the precision of the active mode.
    pub fn normalized_start(&self) -> NaiveDateTime {
        self.view_mode.strategy().floor_to_unit(self.start)
    }
}
