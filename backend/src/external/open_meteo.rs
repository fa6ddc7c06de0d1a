//! Open-Meteo client for hourly forecasts
//!
//! Requests the hourly fields the engine needs plus the daily sunset, and
//! converts the columnar response into engine samples in the location's
//! own UTC offset.

use std::time::Duration;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use reqwest::Client;
use serde::Deserialize;
use shared::{validate_hourly_sequence, GpsCoordinates, HourlyReading, WeatherSample};

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

const HOURLY_FIELDS: &str =
    "temperature_2m,apparent_temperature,precipitation,wind_speed_10m,weather_code,uv_index";

/// Open-Meteo API client
#[derive(Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
    forecast_days: u8,
}

/// Hourly samples and sunsets for one location
#[derive(Debug, Clone)]
pub struct ProviderForecast {
    /// IANA timezone name reported by the provider
    pub timezone: String,
    pub utc_offset: FixedOffset,
    pub samples: Vec<WeatherSample>,
    pub sunsets: Vec<DateTime<FixedOffset>>,
}

impl ProviderForecast {
    /// Sunset on a local calendar date
    pub fn sunset_on(&self, date: NaiveDate) -> Option<DateTime<FixedOffset>> {
        self.sunsets
            .iter()
            .find(|s| s.date_naive() == date)
            .copied()
    }
}

/// Open-Meteo `/forecast` response
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub utc_offset_seconds: i32,
    pub timezone: String,
    pub hourly: HourlyBlock,
    pub daily: DailyBlock,
}

/// Hourly columns; any entry may be null
#[derive(Debug, Deserialize)]
pub struct HourlyBlock {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    pub apparent_temperature: Vec<Option<f64>>,
    pub precipitation: Vec<Option<f64>>,
    pub wind_speed_10m: Vec<Option<f64>>,
    pub weather_code: Vec<Option<i32>>,
    pub uv_index: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
pub struct DailyBlock {
    pub time: Vec<String>,
    pub sunset: Vec<Option<String>>,
}

impl OpenMeteoClient {
    /// Create a new client from configuration
    pub fn new(config: &WeatherConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_endpoint.trim_end_matches('/').to_string(),
            forecast_days: config.forecast_days,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch hourly samples and sunsets by GPS coordinates
    pub async fn fetch_hourly(&self, location: GpsCoordinates) -> AppResult<ProviderForecast> {
        let url = format!("{}/forecast", self.base_url);
        tracing::debug!(
            latitude = location.latitude,
            longitude = location.longitude,
            "Requesting Open-Meteo forecast"
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("daily", "sunset".to_string()),
                ("timezone", "auto".to_string()),
                ("forecast_days", self.forecast_days.to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Open-Meteo request failed: {}", e);
                AppError::WeatherServiceUnavailable
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Open-Meteo error: {} - {}",
                status, body
            )));
        }

        let data: ForecastResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse forecast response: {}", e))
        })?;

        parse_forecast(data)
    }
}

/// Convert an Open-Meteo response into engine samples.
///
/// Every hour is zoned with the response's UTC offset and marked as night
/// from that date's sunset onwards. A local hour that repeats at a DST
/// change maps to the same instant twice and is rejected.
pub fn parse_forecast(data: ForecastResponse) -> AppResult<ProviderForecast> {
    let offset = FixedOffset::east_opt(data.utc_offset_seconds).ok_or_else(|| {
        AppError::ExternalService(format!(
            "Invalid UTC offset: {} seconds",
            data.utc_offset_seconds
        ))
    })?;

    let mut sunsets = Vec::with_capacity(data.daily.sunset.len());
    for (date, sunset) in data.daily.time.iter().zip(&data.daily.sunset) {
        let sunset = sunset
            .as_deref()
            .ok_or_else(|| AppError::ExternalService(format!("No sunset for {}", date)))?;
        sunsets.push(local_time(sunset, offset)?);
    }

    let hourly = &data.hourly;
    let mut samples = Vec::with_capacity(hourly.time.len());
    for (i, time) in hourly.time.iter().enumerate() {
        let timestamp = local_time(time, offset)?;
        let sunset = sunsets
            .iter()
            .find(|s| s.date_naive() == timestamp.date_naive())
            .copied()
            .ok_or_else(|| {
                AppError::ExternalService(format!("No sunset for {}", timestamp.date_naive()))
            })?;

        let reading = HourlyReading {
            timestamp: Some(timestamp),
            temperature: column(&hourly.temperature_2m, i),
            feels_like: column(&hourly.apparent_temperature, i),
            precipitation: column(&hourly.precipitation, i),
            wind_speed: column(&hourly.wind_speed_10m, i),
            weather_code: column(&hourly.weather_code, i),
            uv_index: column(&hourly.uv_index, i),
        };
        samples.push(reading.into_sample(sunset)?);
    }
    validate_hourly_sequence(&samples)
        .map_err(|msg| AppError::ExternalService(format!("Forecast hours: {}", msg)))?;

    Ok(ProviderForecast {
        timezone: data.timezone,
        utc_offset: offset,
        samples,
        sunsets,
    })
}

fn column<T: Copy>(values: &[Option<T>], index: usize) -> Option<T> {
    values.get(index).copied().flatten()
}

/// Parse an Open-Meteo local time (`YYYY-MM-DDTHH:MM`) in a fixed offset
pub fn local_time(value: &str, offset: FixedOffset) -> AppResult<DateTime<FixedOffset>> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .ok()
        .and_then(|naive| naive.and_local_timezone(offset).single())
        .ok_or_else(|| AppError::ExternalService(format!("Malformed time: {}", value)))
}
