//! WebAssembly module for the Run Outfit Advisor
//!
//! Runs the clothing decision engine in the browser:
//! - Full run assessment from raw hourly readings
//! - Suitability score and band
//! - Clothing recommendation for given conditions

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

/// Assessment request as sent by the front end
#[derive(Debug, Deserialize)]
struct AssessRequest {
    readings: Vec<HourlyReading>,
    sunset: DateTime<FixedOffset>,
    start: DateTime<FixedOffset>,
    duration_minutes: i64,
}

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("run advisor engine loaded"));
}

fn to_js_error(message: String) -> JsValue {
    web_sys::console::warn_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

/// Assess a planned run from hourly readings; returns a `RunAssessment` as JSON
#[wasm_bindgen]
pub fn assess_run_json(request_json: &str) -> Result<String, JsValue> {
    assess(request_json).map_err(to_js_error)
}

/// Score running conditions, 1 (worst) to 10 (best)
#[wasm_bindgen]
pub fn suitability_score(feels_like: f64, precipitation: f64, wind_speed: f64) -> u8 {
    shared::suitability_score(feels_like, precipitation, wind_speed).value()
}

/// Band label for a score: "poor", "marginal" or "good"
#[wasm_bindgen]
pub fn score_band(score: u8) -> String {
    ScoreBand::for_value(score).to_string()
}

/// Recommend clothing for `RunConditions` JSON; returns a `ClothingRecommendation` as JSON
#[wasm_bindgen]
pub fn recommend_clothing_json(conditions_json: &str) -> Result<String, JsValue> {
    recommend(conditions_json).map_err(to_js_error)
}

/// Garment slot labels in display order for a language code ("en", "nl")
#[wasm_bindgen]
pub fn garment_slot_labels(language: &str) -> js_sys::Array {
    let language = Language::from_code(language);
    ClothingRecommendation::garment_slots()
        .iter()
        .map(|slot| JsValue::from_str(slot.label_in(language)))
        .collect()
}

fn assess(request_json: &str) -> Result<String, String> {
    let request: AssessRequest = serde_json::from_str(request_json)
        .map_err(|e| format!("Invalid assessment JSON: {}", e))?;

    let window = RunWindow::from_duration(request.start, request.duration_minutes)
        .map_err(|e| e.to_string())?;
    let samples = shared::samples_from_readings(request.readings, request.sunset)
        .map_err(|e| e.to_string())?;

    let assessment =
        shared::assess_run(&samples, &window, request.sunset).map_err(|e| e.to_string())?;
    serde_json::to_string(&assessment).map_err(|e| e.to_string())
}

fn recommend(conditions_json: &str) -> Result<String, String> {
    let conditions: shared::RunConditions = serde_json::from_str(conditions_json)
        .map_err(|e| format!("Invalid conditions JSON: {}", e))?;
    serde_json::to_string(&shared::recommend_clothing(&conditions)).map_err(|e| e.to_string())
}
