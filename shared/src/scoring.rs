//! Suitability scoring
//!
//! Starts from a perfect 10 and deducts independent penalties for feels-like
//! temperature, precipitation and wind. The result is clamped to 1..=10.

use crate::models::{ScoreBand, ScoreBreakdown, ScoreFactor, ScorePenalty, SuitabilityScore};
use crate::types::LocalizedText;

const BASE_SCORE: i32 = 10;

/// Score running conditions from the midpoint weather
pub fn suitability_score(feels_like: f64, precipitation: f64, wind_speed: f64) -> SuitabilityScore {
    let deducted: i32 = penalties(feels_like, precipitation, wind_speed)
        .iter()
        .map(|p| p.points as i32)
        .sum();
    SuitabilityScore::clamped(BASE_SCORE - deducted)
}

/// Score plus the individual deductions behind it
pub fn score_breakdown(feels_like: f64, precipitation: f64, wind_speed: f64) -> ScoreBreakdown {
    let score = suitability_score(feels_like, precipitation, wind_speed);
    ScoreBreakdown {
        score,
        band: score.band(),
        penalties: penalties(feels_like, precipitation, wind_speed),
    }
}

/// Qualitative band for a score
pub fn classify_score(score: SuitabilityScore) -> ScoreBand {
    score.band()
}

fn penalties(feels_like: f64, precipitation: f64, wind_speed: f64) -> Vec<ScorePenalty> {
    [
        temperature_penalty(feels_like),
        precipitation_penalty(precipitation),
        wind_penalty(wind_speed),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn temperature_penalty(feels_like: f64) -> Option<ScorePenalty> {
    let (points, reason) = if feels_like < 0.0 {
        (3, LocalizedText::new("Freezing feels-like temperature", "Gevoelstemperatuur onder nul"))
    } else if feels_like < 5.0 {
        (2, LocalizedText::new("Cold feels-like temperature", "Koude gevoelstemperatuur"))
    } else if feels_like > 20.0 {
        (2, LocalizedText::new("Warm feels-like temperature", "Warme gevoelstemperatuur"))
    } else {
        return None;
    };
    Some(ScorePenalty {
        factor: ScoreFactor::Temperature,
        points,
        reason,
    })
}

fn precipitation_penalty(precipitation: f64) -> Option<ScorePenalty> {
    let (points, reason) = if precipitation > 1.0 {
        (3, LocalizedText::new("Heavy precipitation", "Veel neerslag"))
    } else if precipitation > 0.0 {
        (1, LocalizedText::new("Light precipitation", "Lichte neerslag"))
    } else {
        return None;
    };
    Some(ScorePenalty {
        factor: ScoreFactor::Precipitation,
        points,
        reason,
    })
}

fn wind_penalty(wind_speed: f64) -> Option<ScorePenalty> {
    let (points, reason) = if wind_speed > 25.0 {
        (2, LocalizedText::new("Strong wind", "Harde wind"))
    } else if wind_speed > 15.0 {
        (1, LocalizedText::new("Noticeable wind", "Merkbare wind"))
    } else {
        return None;
    };
    Some(ScorePenalty {
        factor: ScoreFactor::Wind,
        points,
        reason,
    })
}
