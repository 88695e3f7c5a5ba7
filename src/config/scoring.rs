//! Scoring configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{WeightVector, DEFAULT_WEIGHTS};
use crate::domain::foundation::Criterion;

/// Scoring configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    /// Weights used to seed new workspaces
    #[serde(default)]
    pub default_weights: WeightsConfig,
}

/// Per-criterion weights; unset criteria fall back to the built-in defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeightsConfig {
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
    pub c5: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        let [c1, c2, c3, c4, c5] = DEFAULT_WEIGHTS.as_array();
        Self { c1, c2, c3, c4, c5 }
    }
}

impl ScoringConfig {
    /// Default weights as a domain weight vector
    pub fn default_weights(&self) -> WeightVector {
        let w = &self.default_weights;
        WeightVector::new(w.c1, w.c2, w.c3, w.c4, w.c5)
    }

    /// Validate scoring configuration
    ///
    /// Configured defaults must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let weights = self.default_weights();
        for criterion in Criterion::all() {
            let value = weights.get(*criterion);
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidDefaultWeight {
                    criterion: criterion.code(),
                    value,
                });
            }
        }
        Ok(())
    }
}
