//! Midpoint sample resolution

use crate::error::{EngineError, EngineResult};
use crate::models::{RunWindow, WeatherSample};

/// Pick the hourly sample closest to the run's midpoint.
///
/// Equidistant samples resolve to the one that comes first in `samples`.
/// The sample is never interpolated.
pub fn resolve_midpoint<'a>(
    samples: &'a [WeatherSample],
    window: &RunWindow,
) -> EngineResult<&'a WeatherSample> {
    let midpoint = window.midpoint();
    let mut best: Option<(&WeatherSample, i64)> = None;

    for sample in samples {
        let distance = (sample.timestamp - midpoint).num_milliseconds().abs();
        match best {
            // strict comparison keeps the earlier sample on ties
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((sample, distance)),
        }
    }

    best.map(|(sample, _)| sample).ok_or(EngineError::EmptyForecast)
}
