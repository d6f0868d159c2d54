//! Creativity levels and the sampling temperature they map to

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Lowest accepted sampling temperature.
pub const MIN_TEMPERATURE: f64 = 0.0;

/// Highest accepted sampling temperature.
pub const MAX_TEMPERATURE: f64 = 1.0;

/// Temperature used when a request does not specify one.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Named creativity settings offered to users instead of a raw temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreativityLevel {
    VeryLow,
    Low,
    #[default]
    Medium,
    High,
    VeryHigh,
}

impl CreativityLevel {
    /// All levels from least to most creative.
    pub const ALL: [CreativityLevel; 5] = [
        Self::VeryLow,
        Self::Low,
        Self::Medium,
        Self::High,
        Self::VeryHigh,
    ];

    /// The sampling temperature for this level.
    pub fn temperature(&self) -> f64 {
        match self {
            Self::VeryLow => 0.2,
            Self::Low => 0.4,
            Self::Medium => 0.6,
            Self::High => 0.8,
            Self::VeryHigh => 0.95,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// What a user should expect from this level.
    pub fn description(&self) -> &'static str {
        match self {
            Self::VeryLow => "Predictable, safe stories",
            Self::Low => "Slightly creative with familiar elements",
            Self::Medium => "Balanced creativity and coherence",
            Self::High => "Creative with unexpected twists",
            Self::VeryHigh => "Highly creative and unpredictable",
        }
    }
}

impl fmt::Display for CreativityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a creativity label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown creativity level: {0}")]
pub struct UnknownCreativityLevel(pub String);

impl FromStr for CreativityLevel {
    type Err = UnknownCreativityLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "verylow" => Ok(Self::VeryLow),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "veryhigh" => Ok(Self::VeryHigh),
            _ => Err(UnknownCreativityLevel(s.to_string())),
        }
    }
}

/// Check a temperature lies within the accepted range.
pub fn require_temperature_in_range(value: f64) -> Result<(), ValidationError> {
    if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&value) {
        return Err(ValidationError::TemperatureOutOfRange {
            value,
            min: MIN_TEMPERATURE,
            max: MAX_TEMPERATURE,
        });
    }
    Ok(())
}
