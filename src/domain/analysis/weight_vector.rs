//! Weight vector for SAW and WP scoring.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Criterion;

/// One weight per criterion.
///
/// Weights are used exactly as supplied. Nothing checks or enforces that
/// they sum to 1, and totals are not bounded to [0, 1] when they don't.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
    pub c5: f64,
}

impl WeightVector {
    /// Creates a weight vector from values in criterion order.
    pub const fn new(c1: f64, c2: f64, c3: f64, c4: f64, c5: f64) -> Self {
        Self { c1, c2, c3, c4, c5 }
    }

    /// Creates a weight vector with the same weight on every criterion.
    pub const fn uniform(weight: f64) -> Self {
        Self::new(weight, weight, weight, weight, weight)
    }

    /// Returns the weight for a criterion.
    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::C1 => self.c1,
            Criterion::C2 => self.c2,
            Criterion::C3 => self.c3,
            Criterion::C4 => self.c4,
            Criterion::C5 => self.c5,
        }
    }

    /// Returns the weights in criterion order.
    pub fn as_array(&self) -> [f64; Criterion::COUNT] {
        [self.c1, self.c2, self.c3, self.c4, self.c5]
    }

    /// Sum of all weights (informational only).
    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }

    /// Returns the first weight that is NaN or infinite.
    pub fn first_non_finite(&self) -> Option<(Criterion, f64)> {
        Criterion::all()
            .iter()
            .map(|c| (*c, self.get(*c)))
            .find(|(_, w)| !w.is_finite())
    }
}

impl Default for WeightVector {
    fn default() -> Self {
        super::DEFAULT_WEIGHTS
    }
}
