use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseViewModeError;
use crate::granularity::{self, GranularityStrategy};

/// Controls what granularity the timeline columns represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl ViewMode {
    pub const ALL: [ViewMode; 7] = [
        ViewMode::Minute,
        ViewMode::Hour,
        ViewMode::Day,
        ViewMode::Week,
        ViewMode::Month,
        ViewMode::Quarter,
        ViewMode::Year,
    ];

    /// The granularity rules for this mode.
    pub fn strategy(self) -> &'static dyn GranularityStrategy {
        granularity::strategy(self)
    }

    /// True for modes whose columns have a constant millisecond duration.
    pub fn is_fixed_duration(self) -> bool {
        self.strategy().unit_duration_ms().is_some()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Minute => "minute",
            ViewMode::Hour => "hour",
            ViewMode::Day => "day",
            ViewMode::Week => "week",
            ViewMode::Month => "month",
            ViewMode::Quarter => "quarter",
            ViewMode::Year => "year",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = ParseViewModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ViewMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| ParseViewModeError(s.to_string()))
    }
}
