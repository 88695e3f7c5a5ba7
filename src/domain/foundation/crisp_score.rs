//! Crisp score value object (four-level banded score).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A fuzzified attribute value: 0.25, 0.5, 0.75 or 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum CrispScore {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl CrispScore {
    /// Creates a CrispScore from its numeric value, rejecting anything off the four levels.
    pub fn try_from_value(value: f64) -> Result<Self, ValidationError> {
        if value == 0.25 {
            Ok(CrispScore::Poor)
        } else if value == 0.5 {
            Ok(CrispScore::Fair)
        } else if value == 0.75 {
            Ok(CrispScore::Good)
        } else if value == 1.0 {
            Ok(CrispScore::Excellent)
        } else {
            Err(ValidationError::invalid_format(
                "crisp_score",
                format!("{} is not one of 0.25, 0.5, 0.75, 1.0", value),
            ))
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> f64 {
        match self {
            CrispScore::Poor => 0.25,
            CrispScore::Fair => 0.5,
            CrispScore::Good => 0.75,
            CrispScore::Excellent => 1.0,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            CrispScore::Poor => "Poor",
            CrispScore::Fair => "Fair",
            CrispScore::Good => "Good",
            CrispScore::Excellent => "Excellent",
        }
    }
}

impl TryFrom<f64> for CrispScore {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_from_value(value)
    }
}

impl From<CrispScore> for f64 {
    fn from(score: CrispScore) -> Self {
        score.value()
    }
}

impl fmt::Display for CrispScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
