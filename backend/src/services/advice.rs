//! Advice service: forecast lookup, run window selection and assessment

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};
use shared::{
    assess_run, samples_from_readings, score_breakdown, validate_coordinates,
    validate_duration_minutes, GpsCoordinates, HourlyReading, Language, RunAssessment, RunWindow,
    ScoreBreakdown, WeatherSample,
};

use crate::error::{AppError, AppResult};
use crate::external::OpenMeteoClient;

/// Service that turns a location and a planned run into advice
#[derive(Clone)]
pub struct AdviceService {
    weather: OpenMeteoClient,
}

/// Planned run as chosen by the user
#[derive(Debug, Clone, Deserialize)]
pub struct RunWindowQuery {
    /// RFC 3339, or local `YYYY-MM-DDTHH:MM` in the forecast's timezone
    pub start: String,
    pub duration_minutes: i64,
}

/// Assessment over caller-supplied hourly readings
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluateRequest {
    pub readings: Vec<HourlyReading>,
    pub sunset: DateTime<FixedOffset>,
    pub start: DateTime<FixedOffset>,
    pub duration_minutes: i64,
    #[serde(default)]
    pub lang: Option<String>,
}

/// One rendered slot of the outfit
#[derive(Debug, Clone, Serialize)]
pub struct AdviceLine {
    pub slot: &'static str,
    pub choice: &'static str,
    pub rationale: String,
}

/// Full advice response
#[derive(Debug, Clone, Serialize)]
pub struct RunAdvice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    pub window: RunWindow,
    pub midpoint: DateTime<FixedOffset>,
    pub sunset: DateTime<FixedOffset>,
    pub language: Language,
    pub assessment: RunAssessment,
    pub breakdown: ScoreBreakdown,
    pub garments: Vec<AdviceLine>,
    pub accessories: Vec<AdviceLine>,
}

impl RunWindowQuery {
    /// Build the run window, reading local times in `offset`
    pub fn into_window(self, offset: FixedOffset) -> AppResult<RunWindow> {
        validate_duration_minutes(self.duration_minutes)
            .map_err(|msg| AppError::invalid("duration_minutes", msg))?;
        let start = parse_run_start(&self.start, offset)?;
        Ok(RunWindow::from_duration(start, self.duration_minutes)?)
    }
}

/// Parse a run start given either with an explicit offset or as local time
pub fn parse_run_start(raw: &str, offset: FixedOffset) -> AppResult<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(start) = DateTime::parse_from_rfc3339(raw) {
        return Ok(start);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .ok()
        .and_then(|naive| naive.and_local_timezone(offset).single())
        .ok_or_else(|| {
            AppError::invalid(
                "start",
                "Run start must be RFC 3339 or local time as YYYY-MM-DDTHH:MM",
            )
        })
}

impl AdviceService {
    pub fn new(weather: OpenMeteoClient) -> Self {
        Self { weather }
    }

    /// Fetch the forecast for a location and assess the planned run
    pub async fn advise(
        &self,
        location: GpsCoordinates,
        window: RunWindowQuery,
        language: Language,
    ) -> AppResult<RunAdvice> {
        validate_coordinates(location.latitude, location.longitude)
            .map_err(|msg| AppError::invalid("coordinates", msg))?;
        validate_duration_minutes(window.duration_minutes)
            .map_err(|msg| AppError::invalid("duration_minutes", msg))?;

        let forecast = self.weather.fetch_hourly(location).await?;
        tracing::debug!(
            timezone = %forecast.timezone,
            hours = forecast.samples.len(),
            "Forecast received"
        );

        let window = window.into_window(forecast.utc_offset)?;
        let local_date = window.start().with_timezone(&forecast.utc_offset).date_naive();
        let sunset = forecast.sunset_on(local_date).ok_or_else(|| {
            AppError::invalid("start", "Run start is outside the forecast horizon")
        })?;

        let advice = build_advice(&forecast.samples, window, sunset, language)?;
        tracing::info!(
            midpoint_hour = %advice.assessment.sample.timestamp,
            score = advice.assessment.score.value(),
            "Run assessed"
        );

        Ok(RunAdvice {
            timezone: Some(forecast.timezone),
            ..advice
        })
    }
}

/// Assess caller-supplied readings without contacting the provider
pub fn evaluate(request: EvaluateRequest) -> AppResult<RunAdvice> {
    let language = request
        .lang
        .as_deref()
        .map(Language::from_code)
        .unwrap_or_default();

    validate_duration_minutes(request.duration_minutes)
        .map_err(|msg| AppError::invalid("duration_minutes", msg))?;
    let window = RunWindow::from_duration(request.start, request.duration_minutes)?;

    let sunset = request.sunset;
    let samples = samples_from_readings(request.readings, sunset)?;

    build_advice(&samples, window, sunset, language)
}

fn build_advice(
    samples: &[WeatherSample],
    window: RunWindow,
    sunset: DateTime<FixedOffset>,
    language: Language,
) -> AppResult<RunAdvice> {
    let assessment = assess_run(samples, &window, sunset)?;
    let sample = &assessment.sample;
    let breakdown = score_breakdown(sample.feels_like, sample.precipitation, sample.wind_speed);

    let garments = render_lines(assessment.clothing.garment_items(language));
    let accessories = render_lines(assessment.clothing.accessory_items(language));

    Ok(RunAdvice {
        timezone: None,
        window,
        midpoint: window.midpoint(),
        sunset,
        language,
        assessment,
        breakdown,
        garments,
        accessories,
    })
}

fn render_lines(items: Vec<shared::RenderedSlot<'_>>) -> Vec<AdviceLine> {
    items
        .into_iter()
        .map(|item| AdviceLine {
            slot: item.slot,
            choice: item.choice,
            rationale: item.rationale.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::EngineError;

    fn offset() -> FixedOffset {
        FixedOffset::east_opt(2 * 3600).unwrap()
    }

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn reading(time: &str, feels_like: f64, code: i32) -> HourlyReading {
        HourlyReading {
            timestamp: Some(at(time)),
            temperature: Some(feels_like + 1.0),
            feels_like: Some(feels_like),
            precipitation: Some(0.0),
            wind_speed: Some(8.0),
            weather_code: Some(code),
            uv_index: Some(2.0),
        }
    }

    fn request(readings: Vec<HourlyReading>) -> EvaluateRequest {
        EvaluateRequest {
            readings,
            sunset: at("2026-10-19T18:40:00+02:00"),
            start: at("2026-10-19T07:10:00+02:00"),
            duration_minutes: 40,
            lang: Some("nl".to_string()),
        }
    }

    #[test]
    fn test_parse_local_start_uses_offset() {
        let start = parse_run_start("2026-10-19T07:30", offset()).unwrap();
        assert_eq!(start, at("2026-10-19T07:30:00+02:00"));
    }

    #[test]
    fn test_parse_rfc3339_start_keeps_its_offset() {
        let start = parse_run_start("2026-10-19T05:30:00Z", offset()).unwrap();
        assert_eq!(start, at("2026-10-19T07:30:00+02:00"));
    }

    #[test]
    fn test_parse_start_rejects_garbage() {
        assert!(matches!(
            parse_run_start("tomorrow morning", offset()),
            Err(AppError::Validation { .. })
        ));
    }

    #[test]
    fn test_window_query_checks_duration() {
        let query = RunWindowQuery {
            start: "2026-10-19T07:30".to_string(),
            duration_minutes: 5,
        };
        assert!(matches!(
            query.into_window(offset()),
            Err(AppError::Validation { field, .. }) if field == "duration_minutes"
        ));
    }

    #[test]
    fn test_evaluate_renders_in_dutch() {
        let advice = evaluate(request(vec![
            reading("2026-10-19T07:00:00+02:00", 8.0, 3),
            reading("2026-10-19T08:00:00+02:00", 9.0, 3),
        ]))
        .unwrap();

        assert_eq!(advice.language, Language::Dutch);
        assert_eq!(advice.midpoint, at("2026-10-19T07:30:00+02:00"));
        assert_eq!(advice.assessment.sample.feels_like, 8.0);
        assert_eq!(advice.garments.len(), 6);
        assert_eq!(advice.garments[0].slot, "Hoofd");
        assert_eq!(advice.accessories[0].slot, "Verlichting");
        assert_eq!(advice.breakdown.score, advice.assessment.score);
    }

    #[test]
    fn test_evaluate_empty_readings() {
        assert!(matches!(
            evaluate(request(Vec::new())),
            Err(AppError::Engine(EngineError::EmptyForecast))
        ));
    }

    #[test]
    fn test_evaluate_rejects_unordered_readings() {
        let result = evaluate(request(vec![
            reading("2026-10-19T08:00:00+02:00", 8.0, 3),
            reading("2026-10-19T07:00:00+02:00", 9.0, 3),
        ]));
        assert!(matches!(
            result,
            Err(AppError::Engine(EngineError::UnorderedForecast { .. }))
        ));
    }

    #[test]
    fn test_evaluate_rejects_unknown_weather_code() {
        let result = evaluate(request(vec![reading("2026-10-19T07:00:00+02:00", 8.0, 42)]));
        assert!(matches!(
            result,
            Err(AppError::Engine(EngineError::IncompleteSample {
                field: "weather_code",
                ..
            }))
        ));
    }
}
