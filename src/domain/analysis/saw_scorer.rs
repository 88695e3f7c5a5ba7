//! SAW Scorer - Simple Additive Weighting.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Criterion;

use super::ranking::{best_flags, competition_ranks};
use super::{CalculationError, CrispMatrix, ScoringMethod, WeightVector};

/// SAW outcome for one alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SawRow {
    pub alternative: String,
    pub total: f64,
    pub rank: u32,
    pub is_best: bool,
}

/// SAW outcome for every alternative, in crisp-matrix order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SawResult {
    pub rows: Vec<SawRow>,
}

impl SawResult {
    /// Rows ordered by rank; tied rows keep input order.
    pub fn sorted_by_rank(&self) -> Vec<&SawRow> {
        let mut sorted: Vec<_> = self.rows.iter().collect();
        sorted.sort_by_key(|r| r.rank);
        sorted
    }

    /// Looks up a row by alternative name.
    pub fn get(&self, alternative: &str) -> Option<&SawRow> {
        self.rows.iter().find(|r| r.alternative == alternative)
    }

    /// Rows holding the maximum total.
    pub fn best(&self) -> Vec<&SawRow> {
        self.rows.iter().filter(|r| r.is_best).collect()
    }
}

/// Simple Additive Weighting scorer.
pub struct SawScorer;

impl SawScorer {
    /// Scores every alternative.
    ///
    /// # Algorithm
    /// total = Σ(crisp[c] × weight[c]), ranked descending with competition ranks.
    ///
    /// Weights are not normalized.
    pub fn score(matrix: &CrispMatrix, weights: &WeightVector) -> Result<SawResult, CalculationError> {
        let totals = matrix
            .rows
            .iter()
            .map(|row| {
                let total: f64 = Criterion::all()
                    .iter()
                    .map(|c| row.score(*c).value() * weights.get(*c))
                    .sum();
                if total.is_finite() {
                    Ok(total)
                } else {
                    Err(CalculationError::NonFiniteScore {
                        method: ScoringMethod::Saw,
                        alternative: row.alternative.clone(),
                    })
                }
            })
            .collect::<Result<Vec<f64>, CalculationError>>()?;

        let ranks = competition_ranks(&totals);
        let best = best_flags(&totals);

        let rows = matrix
            .rows
            .iter()
            .zip(totals)
            .zip(ranks.into_iter().zip(best))
            .map(|((row, total), (rank, is_best))| SawRow {
                alternative: row.alternative.clone(),
                total,
                rank,
                is_best,
            })
            .collect();

        Ok(SawResult { rows })
    }
}
