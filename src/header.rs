//! Primitive column generation and secondary header grouping.
//!
//! The primitive header row has one entry per column ([`column_units`]). The
//! secondary row groups those columns under their parent granularity
//! ([`group_header_units`]): hours under days, minutes under hours, days and
//! weeks under months.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::granularity::{GranularityStrategy, HeaderLayout};
use crate::model::{TimelineWindow, ViewMode};
use crate::time;

/// One labeled span of the secondary header row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeaderUnit {
    /// Start of the parent unit this group represents.
    pub date: NaiveDateTime,
    /// Number of primitive columns covered; fractional at month edges in
    /// day and week modes.
    pub span: f64,
}

/// Start instants of every rendered column, beginning with the column that
/// contains `window.start`.
pub fn column_units(window: &TimelineWindow) -> Vec<NaiveDateTime> {
    let strategy = window.view_mode.strategy();
    let first = strategy.column_start(window.start);
    (0..i64::from(window.total_units))
        .map_while(|index| strategy.advance(first, index))
        .collect()
}

/// Group ordered column instants into secondary header spans.
///
/// Returns an empty row when there are no columns, when the mode has no
/// secondary header (month, quarter, year), or when a day view has fewer
/// than two columns.
pub fn group_header_units(units: &[NaiveDateTime], view_mode: ViewMode) -> Vec<HeaderUnit> {
    let strategy = view_mode.strategy();
    if units.is_empty() {
        return Vec::new();
    }
    match strategy.header_layout() {
        HeaderLayout::PrimaryOnly => Vec::new(),
        HeaderLayout::Runs => group_runs(units, strategy),
        HeaderLayout::MonthBlocks { min_units } => {
            if units.len() < min_units {
                return Vec::new();
            }
            group_month_blocks(units, strategy)
        }
    }
}

fn group_runs(units: &[NaiveDateTime], strategy: &dyn GranularityStrategy) -> Vec<HeaderUnit> {
    let mut groups = Vec::new();
    let mut current: Option<(NaiveDateTime, u32)> = None;

    for &unit in units {
        let Some(key) = strategy.header_key(unit) else {
            continue;
        };
        current = match current {
            Some((group, count)) if group == key => Some((group, count + 1)),
            Some((group, count)) => {
                groups.push(HeaderUnit {
                    date: group,
                    span: f64::from(count),
                });
                Some((key, 1))
            }
            None => Some((key, 1)),
        };
    }

    if let Some((group, count)) = current {
        groups.push(HeaderUnit {
            date: group,
            span: f64::from(count),
        });
    }
    groups
}

/// Month blocks over the continuous range `[first column, last column + 1 unit)`.
fn group_month_blocks(
    units: &[NaiveDateTime],
    strategy: &dyn GranularityStrategy,
) -> Vec<HeaderUnit> {
    let (Some(&first), Some(&last), Some(unit_ms)) =
        (units.first(), units.last(), strategy.unit_duration_ms())
    else {
        return Vec::new();
    };
    let Some(range_end) = time::shift_ms(last, unit_ms) else {
        return Vec::new();
    };

    let mut groups = Vec::new();
    let mut month = time::start_of_month(first);
    while month < range_end {
        let Some(next) = time::add_months(month, 1) else {
            break;
        };
        let block_start = month.max(first);
        let block_end = next.min(range_end);
        groups.push(HeaderUnit {
            date: month,
            span: time::elapsed_ms(block_start, block_end) as f64 / unit_ms as f64,
        });
        month = next;
    }
    groups
}
