use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DateInterval;

/// A single task or milestone placed on the timeline.
///
/// The engine never edits a task in place; dragging produces a new value
/// through [`Task::with_dates`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub name: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// If true, this is a milestone (zero-duration).
    pub is_milestone: bool,
}

impl Task {
    pub fn new(name: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start,
            end,
            is_milestone: false,
        }
    }

    pub fn new_milestone(name: impl Into<String>, date: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start: date,
            end: date,
            is_milestone: true,
        }
    }

    pub fn interval(&self) -> DateInterval {
        DateInterval {
            start: self.start,
            end: self.end,
        }
    }

    /// A copy of this task moved to `interval`. Milestones collapse onto the
    /// interval start.
    pub fn with_dates(&self, interval: DateInterval) -> Self {
        let end = if self.is_milestone {
            interval.start
        } else {
            interval.end
        };
        Self {
            start: interval.start,
            end,
            ..self.clone()
        }
    }
}
