//! Hourly weather models

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::types::Labelled;

/// Sky condition derived from the WMO weather interpretation code
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SkyCondition {
    /// Code 0
    Clear,
    /// Code 1
    MainlyClear,
    /// Code 2
    PartlyCloudy,
    /// Code 3
    Overcast,
    /// Codes 45, 48
    Fog,
    /// Codes 51-57
    Drizzle,
    /// Codes 61-67
    Rain,
    /// Codes 71-77
    Snow,
    /// Codes 80-82, 85, 86
    Showers,
    /// Codes 95-99
    Thunderstorm,
}

impl SkyCondition {
    /// Map a WMO code to a condition, `None` for codes outside the table
    pub fn from_wmo_code(code: i32) -> Option<Self> {
        let condition = match code {
            0 => SkyCondition::Clear,
            1 => SkyCondition::MainlyClear,
            2 => SkyCondition::PartlyCloudy,
            3 => SkyCondition::Overcast,
            45 | 48 => SkyCondition::Fog,
            51..=57 => SkyCondition::Drizzle,
            61..=67 => SkyCondition::Rain,
            71..=77 => SkyCondition::Snow,
            80..=82 | 85 | 86 => SkyCondition::Showers,
            95..=99 => SkyCondition::Thunderstorm,
            _ => return None,
        };
        Some(condition)
    }

    /// Clear or mainly clear sky
    pub fn is_clear(&self) -> bool {
        matches!(self, SkyCondition::Clear | SkyCondition::MainlyClear)
    }
}

impl Labelled for SkyCondition {
    fn label(&self) -> &'static str {
        match self {
            SkyCondition::Clear => "Clear",
            SkyCondition::MainlyClear => "Mainly clear",
            SkyCondition::PartlyCloudy => "Partly cloudy",
            SkyCondition::Overcast => "Overcast",
            SkyCondition::Fog => "Fog",
            SkyCondition::Drizzle => "Drizzle",
            SkyCondition::Rain => "Rain",
            SkyCondition::Snow => "Snow",
            SkyCondition::Showers => "Showers",
            SkyCondition::Thunderstorm => "Thunderstorm",
        }
    }

    fn label_nl(&self) -> &'static str {
        match self {
            SkyCondition::Clear => "Onbewolkt",
            SkyCondition::MainlyClear => "Overwegend helder",
            SkyCondition::PartlyCloudy => "Half bewolkt",
            SkyCondition::Overcast => "Bewolkt",
            SkyCondition::Fog => "Mist",
            SkyCondition::Drizzle => "Motregen",
            SkyCondition::Rain => "Regen",
            SkyCondition::Snow => "Sneeuw",
            SkyCondition::Showers => "Buien",
            SkyCondition::Thunderstorm => "Onweer",
        }
    }
}

impl std::fmt::Display for SkyCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One hourly forecast point
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSample {
    pub timestamp: DateTime<FixedOffset>,
    /// Air temperature, °C
    pub temperature: f64,
    /// Apparent temperature, °C
    pub feels_like: f64,
    /// mm/hour
    pub precipitation: f64,
    /// km/h
    pub wind_speed: f64,
    pub sky: SkyCondition,
    pub uv_index: f64,
    pub is_night: bool,
}

/// Raw hourly row as delivered by a weather provider.
///
/// Providers may leave any field null; conversion into a [`WeatherSample`]
/// rejects such rows instead of substituting defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HourlyReading {
    pub timestamp: Option<DateTime<FixedOffset>>,
    pub temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub precipitation: Option<f64>,
    pub wind_speed: Option<f64>,
    pub weather_code: Option<i32>,
    pub uv_index: Option<f64>,
}

impl HourlyReading {
    /// Convert into a sample, deriving `is_night` from the day's sunset
    pub fn into_sample(self, sunset: DateTime<FixedOffset>) -> EngineResult<WeatherSample> {
        let timestamp = self.timestamp.ok_or(EngineError::IncompleteSample {
            timestamp: None,
            field: "timestamp",
        })?;

        let required = |value: Option<f64>, field: &'static str| -> EngineResult<f64> {
            match value {
                Some(v) if v.is_finite() => Ok(v),
                _ => Err(EngineError::IncompleteSample {
                    timestamp: Some(timestamp),
                    field,
                }),
            }
        };
        let non_negative = |value: Option<f64>, field: &'static str| -> EngineResult<f64> {
            let v = required(value, field)?;
            if v < 0.0 {
                return Err(EngineError::IncompleteSample {
                    timestamp: Some(timestamp),
                    field,
                });
            }
            Ok(v)
        };

        let temperature = required(self.temperature, "temperature")?;
        let feels_like = required(self.feels_like, "feels_like")?;
        let precipitation = non_negative(self.precipitation, "precipitation")?;
        let wind_speed = non_negative(self.wind_speed, "wind_speed")?;
        let sky = self
            .weather_code
            .and_then(SkyCondition::from_wmo_code)
            .ok_or(EngineError::IncompleteSample {
                timestamp: Some(timestamp),
                field: "weather_code",
            })?;
        let uv_index = non_negative(self.uv_index, "uv_index")?;

        Ok(WeatherSample {
            timestamp,
            temperature,
            feels_like,
            precipitation,
            wind_speed,
            sky,
            uv_index,
            is_night: timestamp >= sunset,
        })
    }
}
