use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::time;

/// A closed span of calendar time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateInterval {
    /// Build an interval, swapping the endpoints if they arrive reversed.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        if end < start {
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }

    pub fn try_new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, EngineError> {
        let interval = Self { start, end };
        interval.validate()?;
        Ok(interval)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.end < self.start {
            return Err(EngineError::ReversedInterval {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    pub fn duration_ms(&self) -> i64 {
        time::elapsed_ms(self.start, self.end)
    }

    /// Inclusive on both ends.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Horizontal placement of a bar, in pixels from the timeline's left edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelInterval {
    pub left: f64,
    pub width: f64,
}

impl PixelInterval {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}
