//! Error handling for the Run Outfit Advisor server
//!
//! Provides consistent error responses in English and Dutch

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::EngineError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Decision engine errors
    #[error(transparent)]
    Engine(#[from] EngineError),

    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_nl: String,
    },

    // External service errors
    #[error("Weather service unavailable")]
    WeatherServiceUnavailable,

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Validation failure on a request field with a fixed English message
    pub fn invalid(field: &str, message: &str) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.to_string(),
            message_nl: format!("Ongeldige invoer: {}", message),
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_nl: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

fn engine_error_detail(err: &EngineError) -> (StatusCode, ErrorDetail) {
    let code = err.code().to_string();
    match err {
        EngineError::EmptyForecast => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ErrorDetail {
                code,
                message_en: "The forecast contains no hourly data".to_string(),
                message_nl: "De voorspelling bevat geen uurgegevens".to_string(),
                field: None,
            },
        ),
        EngineError::InvalidWindow { reason } => (
            StatusCode::BAD_REQUEST,
            ErrorDetail {
                code,
                message_en: format!("Invalid run window: {}", reason),
                message_nl: format!("Ongeldig looptijdvenster: {}", reason),
                field: None,
            },
        ),
        EngineError::UnorderedForecast { reason } => (
            StatusCode::BAD_REQUEST,
            ErrorDetail {
                code,
                message_en: format!("Hourly readings are out of order: {}", reason),
                message_nl: format!("Uurgegevens staan niet op volgorde: {}", reason),
                field: Some("readings".to_string()),
            },
        ),
        EngineError::IncompleteSample { field, .. } => (
            StatusCode::BAD_GATEWAY,
            ErrorDetail {
                code,
                message_en: format!("Weather data is missing or malformed: {}", field),
                message_nl: format!("Weerdata ontbreekt of is ongeldig: {}", field),
                field: Some(field.to_string()),
            },
        ),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Engine(err) => engine_error_detail(err),
            AppError::Validation {
                field,
                message,
                message_nl,
            } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: message.clone(),
                    message_nl: message_nl.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::WeatherServiceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "WEATHER_SERVICE_UNAVAILABLE".to_string(),
                    message_en: "Weather service is temporarily unavailable".to_string(),
                    message_nl: "De weerdienst is tijdelijk niet beschikbaar".to_string(),
                    field: None,
                },
            ),
            AppError::ExternalService(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "EXTERNAL_SERVICE_ERROR".to_string(),
                    message_en: format!("External service error: {}", msg),
                    message_nl: format!("Fout bij externe dienst: {}", msg),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message_en: format!("Configuration error: {}", msg),
                    message_nl: format!("Configuratiefout: {}", msg),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::debug!("Request rejected: {:?}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_errors_map_to_status() {
        let cases = [
            (EngineError::EmptyForecast, StatusCode::UNPROCESSABLE_ENTITY),
            (EngineError::invalid_window("too short"), StatusCode::BAD_REQUEST),
            (EngineError::unordered_forecast("descending"), StatusCode::BAD_REQUEST),
            (
                EngineError::IncompleteSample {
                    timestamp: None,
                    field: "uv_index",
                },
                StatusCode::BAD_GATEWAY,
            ),
        ];
        for (err, status) in cases {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), status);
        }
    }

    #[test]
    fn test_incomplete_sample_names_field() {
        let (_, detail) = engine_error_detail(&EngineError::IncompleteSample {
            timestamp: None,
            field: "weather_code",
        });
        assert_eq!(detail.code, "INCOMPLETE_SAMPLE");
        assert_eq!(detail.field.as_deref(), Some("weather_code"));
    }

    #[test]
    fn test_unordered_forecast_points_at_readings() {
        let (status, detail) = engine_error_detail(&EngineError::unordered_forecast("descending"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail.code, "UNORDERED_FORECAST");
        assert_eq!(detail.field.as_deref(), Some("readings"));
    }

    #[test]
    fn test_validation_error_is_bilingual() {
        let err = AppError::invalid("start", "Run start is not a valid time");
        match &err {
            AppError::Validation { message_nl, .. } => {
                assert!(message_nl.starts_with("Ongeldige invoer"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
