//! WP Scorer - Weighted Product.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Criterion;

use super::ranking::{best_flags, competition_ranks};
use super::{CalculationError, CrispMatrix, ScoringMethod, WeightVector};

/// WP outcome for one alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WpRow {
    pub alternative: String,
    /// Un-normalized weighted product.
    pub vector_s: f64,
    /// Preference value, `vector_s / Σ vector_s`.
    pub vector_v: f64,
    pub rank: u32,
    pub is_best: bool,
}

/// WP outcome for every alternative, in crisp-matrix order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WpResult {
    pub rows: Vec<WpRow>,
    /// Σ vector_s across all alternatives.
    pub total_s: f64,
}

impl WpResult {
    /// Rows ordered by rank; tied rows keep input order.
    pub fn sorted_by_rank(&self) -> Vec<&WpRow> {
        let mut sorted: Vec<_> = self.rows.iter().collect();
        sorted.sort_by_key(|r| r.rank);
        sorted
    }

    /// Looks up a row by alternative name.
    pub fn get(&self, alternative: &str) -> Option<&WpRow> {
        self.rows.iter().find(|r| r.alternative == alternative)
    }

    /// Rows holding the maximum preference value.
    pub fn best(&self) -> Vec<&WpRow> {
        self.rows.iter().filter(|r| r.is_best).collect()
    }
}

/// Weighted Product scorer.
pub struct WpScorer;

impl WpScorer {
    /// Scores every alternative.
    ///
    /// # Algorithm
    /// - S = Π(crisp[c] ^ weight[c]) using real exponentiation
    /// - V = S / ΣS, or 0 for every alternative when ΣS is 0
    /// - ranked descending by V with competition ranks
    ///
    /// Crisp scores are at least 0.25, so zero, negative and fractional
    /// weights are all well defined.
    pub fn score(matrix: &CrispMatrix, weights: &WeightVector) -> Result<WpResult, CalculationError> {
        let vector_s = matrix
            .rows
            .iter()
            .map(|row| {
                let s: f64 = Criterion::all()
                    .iter()
                    .map(|c| row.score(*c).value().powf(weights.get(*c)))
                    .product();
                Self::ensure_finite(s, &row.alternative)
            })
            .collect::<Result<Vec<f64>, CalculationError>>()?;

        // Each S may be finite while the running sum overflows.
        let mut total_s = 0.0;
        for (s, row) in vector_s.iter().zip(&matrix.rows) {
            total_s = Self::ensure_finite(total_s + s, &row.alternative)?;
        }

        let vector_v = if total_s == 0.0 {
            vec![0.0; vector_s.len()]
        } else {
            vector_s
                .iter()
                .zip(&matrix.rows)
                .map(|(s, row)| Self::ensure_finite(s / total_s, &row.alternative))
                .collect::<Result<Vec<f64>, CalculationError>>()?
        };

        let ranks = competition_ranks(&vector_v);
        let best = best_flags(&vector_v);

        let rows = matrix
            .rows
            .iter()
            .zip(vector_s.into_iter().zip(vector_v))
            .zip(ranks.into_iter().zip(best))
            .map(|((row, (vector_s, vector_v)), (rank, is_best))| WpRow {
                alternative: row.alternative.clone(),
                vector_s,
                vector_v,
                rank,
                is_best,
            })
            .collect();

        Ok(WpResult { rows, total_s })
    }

    fn ensure_finite(value: f64, alternative: &str) -> Result<f64, CalculationError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalculationError::NonFiniteScore {
                method: ScoringMethod::Wp,
                alternative: alternative.to_string(),
            })
        }
    }
}
