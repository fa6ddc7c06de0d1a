//! Suitability score models

use serde::{Deserialize, Serialize};

use crate::types::{Labelled, LocalizedText};

/// Running suitability, 1 (worst) to 10 (best)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct SuitabilityScore(u8);

impl SuitabilityScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Clamp any penalty total into the valid range
    pub fn clamped(value: i32) -> Self {
        Self(value.clamp(Self::MIN as i32, Self::MAX as i32) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_value(self.0)
    }
}

impl TryFrom<u8> for SuitabilityScore {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err("Suitability score must be between 1 and 10");
        }
        Ok(Self(value))
    }
}

impl From<SuitabilityScore> for u8 {
    fn from(score: SuitabilityScore) -> Self {
        score.0
    }
}

impl std::fmt::Display for SuitabilityScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

/// Qualitative category of a score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// 4 or lower
    Poor,
    /// 5-6
    Marginal,
    /// 7 or higher
    Good,
}

impl ScoreBand {
    pub fn for_value(score: u8) -> Self {
        match score {
            0..=4 => ScoreBand::Poor,
            5..=6 => ScoreBand::Marginal,
            _ => ScoreBand::Good,
        }
    }
}

impl Labelled for ScoreBand {
    fn label(&self) -> &'static str {
        match self {
            ScoreBand::Poor => "poor",
            ScoreBand::Marginal => "marginal",
            ScoreBand::Good => "good",
        }
    }

    fn label_nl(&self) -> &'static str {
        match self {
            ScoreBand::Poor => "slecht",
            ScoreBand::Marginal => "matig",
            ScoreBand::Good => "goed",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Weather factor that can lower the score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Temperature,
    Precipitation,
    Wind,
}

/// A single deduction from the base score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScorePenalty {
    pub factor: ScoreFactor,
    /// Points deducted, always positive
    pub points: u8,
    pub reason: LocalizedText,
}

/// Score together with the deductions that produced it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    pub score: SuitabilityScore,
    pub band: ScoreBand,
    pub penalties: Vec<ScorePenalty>,
}
