//! End-to-end evaluation of one planned run

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::clothing::{recommend_clothing, RunConditions};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    ClothingRecommendation, HourlyReading, RunWindow, ScoreBand, SuitabilityScore, WeatherSample,
};
use crate::resolver::resolve_midpoint;
use crate::scoring::suitability_score;
use crate::validation::validate_hourly_sequence;

/// Everything the presentation layer needs for one run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunAssessment {
    /// Hourly sample closest to the run's midpoint
    pub sample: WeatherSample,
    pub score: SuitabilityScore,
    pub band: ScoreBand,
    pub clothing: ClothingRecommendation,
}

/// Convert raw provider rows into samples, rejecting incomplete or unordered rows
pub fn samples_from_readings(
    readings: Vec<HourlyReading>,
    sunset: DateTime<FixedOffset>,
) -> EngineResult<Vec<WeatherSample>> {
    let samples = readings
        .into_iter()
        .map(|reading| reading.into_sample(sunset))
        .collect::<EngineResult<Vec<_>>>()?;
    validate_hourly_sequence(&samples).map_err(EngineError::unordered_forecast)?;
    Ok(samples)
}

/// Resolve the midpoint sample, then score it and dress for it.
///
/// Samples must be in ascending hourly order. Either every part is produced
/// or an error is returned.
pub fn assess_run(
    samples: &[WeatherSample],
    window: &RunWindow,
    sunset: DateTime<FixedOffset>,
) -> EngineResult<RunAssessment> {
    validate_hourly_sequence(samples).map_err(EngineError::unordered_forecast)?;
    let sample = resolve_midpoint(samples, window)?;
    let score = suitability_score(sample.feels_like, sample.precipitation, sample.wind_speed);
    let clothing = recommend_clothing(&RunConditions::new(sample, window, sunset));

    Ok(RunAssessment {
        sample: sample.clone(),
        score,
        band: score.band(),
        clothing,
    })
}
