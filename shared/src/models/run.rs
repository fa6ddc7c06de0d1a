//! Run window models

use chrono::{DateTime, Duration, FixedOffset};
use serde::Serialize;

use crate::error::{EngineError, EngineResult};
use crate::validation::{validate_duration_minutes, validate_run_window};

/// Shortest supported run, minutes
pub const MIN_RUN_MINUTES: i64 = 10;
/// Longest supported run, minutes
pub const MAX_RUN_MINUTES: i64 = 180;

/// The period a runner intends to be outside
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RunWindow {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

impl RunWindow {
    /// Build a window from explicit bounds
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> EngineResult<Self> {
        validate_run_window(start, end)?;
        Ok(Self { start, end })
    }

    /// Build a window from a start time and a duration in minutes
    pub fn from_duration(
        start: DateTime<FixedOffset>,
        duration_minutes: i64,
    ) -> EngineResult<Self> {
        validate_duration_minutes(duration_minutes).map_err(EngineError::invalid_window)?;
        Self::new(start, start + Duration::minutes(duration_minutes))
    }

    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    pub fn end(&self) -> DateTime<FixedOffset> {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Halfway point between start and end
    pub fn midpoint(&self) -> DateTime<FixedOffset> {
        self.start + self.duration() / 2
    }
}
