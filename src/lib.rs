//! Timeline coordinate engine for Gantt charts.
//!
//! Converts between calendar time and horizontal pixel positions for seven
//! view modes (minute through year), snaps dragged bars to the active grid,
//! groups columns into secondary header spans and positions a "now" marker.
//!
//! Every operation is a pure function of its arguments. Malformed input is
//! never reported as an error: it degrades to a safe fallback and is logged
//! through the `log` facade.

pub mod config;
pub mod error;
pub mod granularity;
pub mod header;
pub mod logging;
pub mod mapper;
pub mod marker;
pub mod model;
pub mod overlap;
pub mod time;

pub use config::EngineConfig;
pub use error::{ConfigError, EngineError, ParseViewModeError};
pub use granularity::{strategy, GranularityStrategy};
pub use header::{column_units, group_header_units, HeaderUnit};
pub use mapper::{drag_task, to_date_interval, to_pixel_interval, CoordinateMapper};
pub use marker::{marker_offset, today_marker, unit_index};
pub use model::{DateInterval, PixelInterval, Task, TimelineWindow, ViewMode};
pub use overlap::overlaps;
