//! Validation utilities for the run advisor
//!
//! Input contracts of the collaborators the engine consumes from.

use chrono::{DateTime, Duration, FixedOffset};

use crate::error::{EngineError, EngineResult};
use crate::models::{WeatherSample, MAX_RUN_MINUTES, MIN_RUN_MINUTES};

// ============================================================================
// Run Window Validations
// ============================================================================

/// Validate that a run ends after it starts and lasts 10-180 minutes
pub fn validate_run_window(
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
) -> EngineResult<()> {
    if end <= start {
        return Err(EngineError::invalid_window("run must end after it starts"));
    }
    let duration = end - start;
    if duration < Duration::minutes(MIN_RUN_MINUTES)
        || duration > Duration::minutes(MAX_RUN_MINUTES)
    {
        return Err(EngineError::invalid_window(format!(
            "duration must be between {} and {} minutes, got {} seconds",
            MIN_RUN_MINUTES,
            MAX_RUN_MINUTES,
            duration.num_seconds()
        )));
    }
    Ok(())
}

/// Validate a requested duration in minutes
pub fn validate_duration_minutes(minutes: i64) -> Result<(), &'static str> {
    if !(MIN_RUN_MINUTES..=MAX_RUN_MINUTES).contains(&minutes) {
        return Err("Run duration must be between 10 and 180 minutes");
    }
    Ok(())
}

// ============================================================================
// Forecast Validations
// ============================================================================

/// Validate that hourly samples are strictly ascending, one per hour
pub fn validate_hourly_sequence(samples: &[WeatherSample]) -> Result<(), &'static str> {
    for pair in samples.windows(2) {
        let step = pair[1].timestamp - pair[0].timestamp;
        if step <= Duration::zero() {
            return Err("Hourly samples must be in ascending time order");
        }
        if step < Duration::hours(1) {
            return Err("Hourly samples must not share an hour");
        }
    }
    Ok(())
}

/// Validate GPS coordinates are on the globe
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), &'static str> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err("Latitude must be between -90 and 90");
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}
