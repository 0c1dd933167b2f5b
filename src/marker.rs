//! Placement of a single instant (usually "now") on the pixel axis.
//!
//! The current time is always an explicit argument; nothing here reads the
//! system clock.

use chrono::NaiveDateTime;
use log::{debug, warn};

use crate::model::TimelineWindow;
use crate::time;

/// Pixel offset of `instant` from the timeline's left edge, or `None` when no
/// marker should be drawn.
///
/// Fixed-duration modes use the same grid-exact elapsed fraction as task
/// placement. Calendar modes place the marker at
/// `(reference_index + fraction within the column) × unit_width`.
///
/// A negative `reference_index` (the caller found no column for the instant)
/// or an offset outside the rendered width suppresses the marker.
pub fn marker_offset(
    instant: NaiveDateTime,
    window: &TimelineWindow,
    reference_index: i64,
) -> Option<f64> {
    if reference_index < 0 {
        return None;
    }
    if let Err(err) = window.validate() {
        warn!("event=marker_suppressed module=marker status=degraded reason=\"{err}\"");
        return None;
    }

    let strategy = window.view_mode.strategy();
    let total = window.total_width();
    let offset = if window.view_mode.is_fixed_duration() {
        let elapsed = time::elapsed_ms(window.normalized_start(), instant) as f64;
        elapsed / window.effective_duration_ms() as f64 * total
    } else {
        (reference_index as f64 + strategy.unit_fraction(instant)) * window.unit_width
    };

    if offset.is_finite() && (0.0..=total).contains(&offset) {
        Some(offset)
    } else {
        debug!(
            "event=marker_suppressed module=marker view_mode={} offset={offset}",
            window.view_mode
        );
        None
    }
}

/// Index of the rendered column containing `instant`, `None` when it falls
/// outside the window's columns.
pub fn unit_index(instant: NaiveDateTime, window: &TimelineWindow) -> Option<i64> {
    window.validate().ok()?;
    let strategy = window.view_mode.strategy();
    let total_units = i64::from(window.total_units);

    let index = match strategy.unit_duration_ms() {
        Some(unit_ms) => {
            let elapsed = time::elapsed_ms(strategy.floor_to_unit(window.start), instant);
            if elapsed < 0 {
                return None;
            }
            elapsed / unit_ms
        }
        None => {
            let first = strategy.column_start(window.start);
            if instant < first {
                return None;
            }
            (0..total_units)
                .find(|&index| {
                    strategy
                        .advance(first, index + 1)
                        .is_some_and(|next| instant < next)
                })
                .unwrap_or(total_units)
        }
    };

    (index < total_units).then_some(index)
}

/// Offset of the "today" marker for `now`.
pub fn today_marker(now: NaiveDateTime, window: &TimelineWindow) -> Option<f64> {
    let index = unit_index(now, window).unwrap_or(-1);
    marker_offset(now, window, index)
}
