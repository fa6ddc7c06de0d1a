//! Common types used across the advisor

use serde::{Deserialize, Serialize};

/// GPS coordinates in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Supported languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Dutch,
}

impl Language {
    /// Parse an ISO 639-1 code, falling back to English
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "nl" => Language::Dutch,
            _ => Language::English,
        }
    }
}

/// Text carried in every supported language
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocalizedText {
    pub message: String,
    pub message_nl: String,
}

impl LocalizedText {
    pub fn new(message: &str, message_nl: &str) -> Self {
        Self {
            message: message.to_string(),
            message_nl: message_nl.to_string(),
        }
    }

    pub fn in_language(&self, language: Language) -> &str {
        match language {
            Language::English => &self.message,
            Language::Dutch => &self.message_nl,
        }
    }
}

/// A value that has an English and a Dutch display label
pub trait Labelled {
    fn label(&self) -> &'static str;
    fn label_nl(&self) -> &'static str;

    fn label_in(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.label(),
            Language::Dutch => self.label_nl(),
        }
    }
}
