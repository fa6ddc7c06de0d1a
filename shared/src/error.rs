//! Error taxonomy of the decision engine

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// Errors raised while turning a forecast and a run window into advice.
///
/// None of these are recoverable inside the engine; callers decide whether to
/// show a message or refetch upstream data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("forecast contains no hourly samples")]
    EmptyForecast,

    #[error("invalid run window: {reason}")]
    InvalidWindow { reason: String },

    #[error("hourly samples out of order: {reason}")]
    UnorderedForecast { reason: String },

    #[error("hourly sample has a missing or malformed `{field}`")]
    IncompleteSample {
        timestamp: Option<DateTime<FixedOffset>>,
        field: &'static str,
    },
}

impl EngineError {
    pub fn invalid_window(reason: impl Into<String>) -> Self {
        EngineError::InvalidWindow {
            reason: reason.into(),
        }
    }

    pub fn unordered_forecast(reason: impl Into<String>) -> Self {
        EngineError::UnorderedForecast {
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::EmptyForecast => "EMPTY_FORECAST",
            EngineError::InvalidWindow { .. } => "INVALID_WINDOW",
            EngineError::UnorderedForecast { .. } => "UNORDERED_FORECAST",
            EngineError::IncompleteSample { .. } => "INCOMPLETE_SAMPLE",
        }
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
