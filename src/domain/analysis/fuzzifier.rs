//! Fuzzifier - Converts raw attribute values into crisp scores.
//!
//! # Bands
//!
//! | Criterion | 1.0       | 0.75            | 0.5               | 0.25       |
//! |-----------|-----------|-----------------|-------------------|------------|
//! | C1 (cost) | < 3000    | 3000..=3999     | 4000..=4499       | >= 4500    |
//! | C2 (cost) | 0         | 1..=199999      | 200000..=499999   | >= 500000  |
//! | C3        | > 25      | 20..=25         | 15..=19           | < 15       |
//! | C4, C5    | 4         | 3               | 2                 | 1          |

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CrispScore, Criterion};

use super::{AlternativesTable, CalculationError};

/// Crisp scores for one alternative, in criterion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrispRow {
    pub alternative: String,
    pub scores: [CrispScore; Criterion::COUNT],
}

impl CrispRow {
    /// Returns the crisp score for a criterion.
    pub fn score(&self, criterion: Criterion) -> CrispScore {
        self.scores[criterion.index()]
    }
}

/// One crisp row per alternative, in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrispMatrix {
    pub rows: Vec<CrispRow>,
}

impl CrispMatrix {
    /// Returns true if the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Banding rules for every criterion.
pub struct Fuzzifier;

impl Fuzzifier {
    /// Maps a raw value to its crisp score.
    ///
    /// C1..C3 bands cover every non-negative integer. C4/C5 values outside
    /// 1-4 are rejected as `OutOfBand`; a validated table never contains one.
    pub fn fuzzify(criterion: Criterion, raw: u64) -> Result<CrispScore, CalculationError> {
        let score = match criterion {
            Criterion::C1 => Some(Self::mdr_fee_band(raw)),
            Criterion::C2 => Some(Self::monthly_fee_band(raw)),
            Criterion::C3 => Some(Self::channel_count_band(raw)),
            Criterion::C4 | Criterion::C5 => Self::ordinal_band(raw),
        };

        score.ok_or(CalculationError::OutOfBand {
            criterion,
            value: raw,
        })
    }

    /// Fuzzifies every cell of the table.
    pub fn fuzzify_table(table: &AlternativesTable) -> Result<CrispMatrix, CalculationError> {
        let rows = table
            .rows()
            .iter()
            .map(|alt| {
                let mut scores = [CrispScore::Poor; Criterion::COUNT];
                for criterion in Criterion::all() {
                    scores[criterion.index()] =
                        Self::fuzzify(*criterion, alt.attributes.get(*criterion))?;
                }
                Ok(CrispRow {
                    alternative: alt.name.clone(),
                    scores,
                })
            })
            .collect::<Result<Vec<_>, CalculationError>>()?;

        Ok(CrispMatrix { rows })
    }

    fn mdr_fee_band(raw: u64) -> CrispScore {
        match raw {
            0..=2999 => CrispScore::Excellent,
            3000..=3999 => CrispScore::Good,
            4000..=4499 => CrispScore::Fair,
            _ => CrispScore::Poor,
        }
    }

    fn monthly_fee_band(raw: u64) -> CrispScore {
        match raw {
            0 => CrispScore::Excellent,
            1..=199_999 => CrispScore::Good,
            200_000..=499_999 => CrispScore::Fair,
            _ => CrispScore::Poor,
        }
    }

    fn channel_count_band(raw: u64) -> CrispScore {
        match raw {
            0..=14 => CrispScore::Poor,
            15..=19 => CrispScore::Fair,
            20..=25 => CrispScore::Good,
            _ => CrispScore::Excellent,
        }
    }

    // Shared by C4 and C5.
    fn ordinal_band(raw: u64) -> Option<CrispScore> {
        match raw {
            4 => Some(CrispScore::Excellent),
            3 => Some(CrispScore::Good),
            2 => Some(CrispScore::Fair),
            1 => Some(CrispScore::Poor),
            _ => None,
        }
    }
}
