use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::model::ViewMode;

/// Reasons a geometry computation cannot proceed on its inputs.
///
/// These never reach callers of the mapping functions; they are logged and
/// the call degrades to a fallback value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("window end {end} is not after start {start}")]
    DegenerateWindow {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("window has zero units")]
    ZeroUnits,
    #[error("unit width {0} must be finite and positive")]
    InvalidUnitWidth(f64),
    #[error("interval end {end} precedes start {start}")]
    ReversedInterval {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("date arithmetic out of range")]
    OutOfRange,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access config `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("minimum width for {mode} must be finite and non-negative, got {value}")]
    InvalidMinWidth { mode: ViewMode, value: f64 },
    #[error("fallback width must be finite and positive, got {0}")]
    InvalidFallbackWidth(f64),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view mode `{0}`")]
pub struct ParseViewModeError(pub String);
