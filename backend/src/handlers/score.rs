//! HTTP handler for the suitability score

use axum::{extract::Query, Json};
use serde::Deserialize;
use shared::{score_breakdown, ScoreBreakdown};

use crate::error::{AppError, AppResult};

/// Midpoint weather to score
#[derive(Debug, Deserialize)]
pub struct ScoreQuery {
    pub feels_like: f64,
    pub precipitation: f64,
    pub wind_speed: f64,
}

/// Score running conditions and explain the deductions
pub async fn get_score(Query(query): Query<ScoreQuery>) -> AppResult<Json<ScoreBreakdown>> {
    if !query.feels_like.is_finite() {
        return Err(AppError::invalid("feels_like", "Feels-like temperature must be a number"));
    }
    if !query.precipitation.is_finite() || query.precipitation < 0.0 {
        return Err(AppError::invalid("precipitation", "Precipitation cannot be negative"));
    }
    if !query.wind_speed.is_finite() || query.wind_speed < 0.0 {
        return Err(AppError::invalid("wind_speed", "Wind speed cannot be negative"));
    }

    Ok(Json(score_breakdown(
        query.feels_like,
        query.precipitation,
        query.wind_speed,
    )))
}
