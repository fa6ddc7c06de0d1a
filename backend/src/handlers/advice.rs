//! HTTP handlers for run advice endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::{GpsCoordinates, Language};

use crate::error::AppResult;
use crate::services::advice::{self, EvaluateRequest, RunAdvice, RunWindowQuery};
use crate::services::AdviceService;
use crate::AppState;

/// Query parameters for a forecast-backed advice request
#[derive(Debug, Deserialize)]
pub struct AdviceQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub start: String,
    pub duration_minutes: i64,
    pub lang: Option<String>,
}

/// Fetch the forecast and advise on a planned run
pub async fn get_advice(
    State(state): State<AppState>,
    Query(query): Query<AdviceQuery>,
) -> AppResult<Json<RunAdvice>> {
    let language = query
        .lang
        .as_deref()
        .map(Language::from_code)
        .unwrap_or_default();
    let location = GpsCoordinates::new(query.latitude, query.longitude);
    let window = RunWindowQuery {
        start: query.start,
        duration_minutes: query.duration_minutes,
    };

    let service = AdviceService::new(state.weather.clone());
    let advice = service.advise(location, window, language).await?;
    Ok(Json(advice))
}

/// Advise on a run using hourly readings supplied in the request body
pub async fn evaluate_advice(Json(request): Json<EvaluateRequest>) -> AppResult<Json<RunAdvice>> {
    let advice = advice::evaluate(request)?;
    Ok(Json(advice))
}
