//! Computation faults raised during a calculation pass.

use thiserror::Error;

use crate::domain::foundation::Criterion;

/// Scoring method that produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringMethod {
    Saw,
    Wp,
}

impl std::fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringMethod::Saw => write!(f, "SAW"),
            ScoringMethod::Wp => write!(f, "WP"),
        }
    }
}

/// A fault that aborts the whole calculation pass.
///
/// None of these are reachable with a validated table and finite weights
/// of ordinary magnitude.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    #[error("raw value {value} for {criterion} falls outside every band")]
    OutOfBand { criterion: Criterion, value: u64 },

    #[error("weight for {criterion} is not a finite number ({value})")]
    MalformedWeight { criterion: Criterion, value: f64 },

    #[error("{method} score for '{alternative}' is not a finite number")]
    NonFiniteScore {
        method: ScoringMethod,
        alternative: String,
    },

    #[error("alternative '{alternative}' is missing from one of the scorer outputs")]
    ComparisonMismatch { alternative: String },
}
