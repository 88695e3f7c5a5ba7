//! Calculation Pipeline - One complete scoring pass.
//!
//! raw table + weights → crisp matrix → {SAW, WP} → comparison series.
//! The pass is pure: identical inputs give identical outputs (apart from
//! `computed_at`), and any fault aborts the pass without partial results.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::Timestamp;

use super::{
    AlternativesTable, CalculationError, ComparisonAssembler, ComparisonSeries, CrispMatrix,
    Fuzzifier, SawResult, SawScorer, WeightVector, WpResult, WpScorer,
};

/// Everything one calculation pass produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationReport {
    pub crisp_matrix: CrispMatrix,
    pub saw: SawResult,
    pub wp: WpResult,
    pub comparison: ComparisonSeries,
    pub computed_at: Timestamp,
}

/// Runs fuzzification, both scorers and the comparison join.
pub struct CalculationPipeline;

impl CalculationPipeline {
    /// Runs one pass over a table snapshot and weight vector.
    ///
    /// # Errors
    /// - `MalformedWeight` if any weight is NaN or infinite
    /// - `OutOfBand` / `NonFiniteScore` / `ComparisonMismatch` from the stages
    pub fn run(
        table: &AlternativesTable,
        weights: &WeightVector,
    ) -> Result<CalculationReport, CalculationError> {
        if let Some((criterion, value)) = weights.first_non_finite() {
            return Err(CalculationError::MalformedWeight { criterion, value });
        }

        let crisp_matrix = Fuzzifier::fuzzify_table(table)?;
        let saw = SawScorer::score(&crisp_matrix, weights)?;
        let wp = WpScorer::score(&crisp_matrix, weights)?;
        let comparison = ComparisonAssembler::assemble(&saw, &wp)?;

        debug!(
            alternatives = crisp_matrix.len(),
            weight_sum = weights.sum(),
            saw_best = ?saw.best().iter().map(|r| r.alternative.as_str()).collect::<Vec<_>>(),
            wp_best = ?wp.best().iter().map(|r| r.alternative.as_str()).collect::<Vec<_>>(),
            "Calculation pass completed"
        );

        Ok(CalculationReport {
            crisp_matrix,
            saw,
            wp,
            comparison,
            computed_at: Timestamp::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::default_table;
    use crate::domain::foundation::Criterion;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn names<'a>(rows: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
        rows.collect()
    }

    #[test]
    fn default_dataset_rankings() {
        let report = CalculationPipeline::run(&default_table(), &WeightVector::default()).unwrap();

        let saw_order = names(report.saw.sorted_by_rank().into_iter().map(|r| r.alternative.as_str()));
        assert_eq!(
            saw_order,
            vec!["A5 (Tripay)", "A1 (Midtrans)", "A2 (Xendit)", "A3 (Doku)", "A4 (Faspay)"]
        );

        let wp_order = names(report.wp.sorted_by_rank().into_iter().map(|r| r.alternative.as_str()));
        assert_eq!(
            wp_order,
            vec!["A1 (Midtrans)", "A5 (Tripay)", "A2 (Xendit)", "A3 (Doku)", "A4 (Faspay)"]
        );

        assert!((report.saw.get("A5 (Tripay)").unwrap().total - 0.8).abs() < EPS);
        assert!((report.saw.get("A4 (Faspay)").unwrap().total - 0.4625).abs() < EPS);
        assert!((report.wp.get("A1 (Midtrans)").unwrap().vector_v - 0.231_757_797_999_8).abs() < EPS);
        assert!((report.wp.get("A4 (Faspay)").unwrap().vector_v - 0.139_342_261_378_6).abs() < EPS);
    }

    #[test]
    fn default_dataset_crisp_matrix() {
        let report = CalculationPipeline::run(&default_table(), &WeightVector::default()).unwrap();
        let xendit = &report.crisp_matrix.rows[1];
        assert_eq!(xendit.alternative, "A2 (Xendit)");
        let values: Vec<f64> = xendit.scores.iter().map(|s| s.value()).collect();
        assert_eq!(values, vec![0.25, 1.0, 1.0, 0.75, 1.0]);
    }

    #[test]
    fn comparison_follows_table_order() {
        let report = CalculationPipeline::run(&default_table(), &WeightVector::default()).unwrap();
        let order = names(report.comparison.rows.iter().map(|r| r.alternative.as_str()));
        assert_eq!(
            order,
            vec!["A1 (Midtrans)", "A2 (Xendit)", "A3 (Doku)", "A4 (Faspay)", "A5 (Tripay)"]
        );
        let tripay = &report.comparison.rows[4];
        assert!((tripay.saw_value - 0.8).abs() < EPS);
        assert!((tripay.wp_value - report.wp.get("A5 (Tripay)").unwrap().vector_v).abs() < EPS);
    }

    #[test]
    fn malformed_weight_aborts_pass() {
        let weights = WeightVector::new(0.25, f64::NAN, 0.2, 0.2, 0.2);
        let err = CalculationPipeline::run(&default_table(), &weights).unwrap_err();
        assert!(matches!(
            err,
            CalculationError::MalformedWeight {
                criterion: Criterion::C2,
                ..
            }
        ));
    }

    #[test]
    fn overflowing_wp_total_aborts_pass() {
        let table = AlternativesTable::builder()
            .alternative("Big", [9000, 0, 30, 4, 4])
            .alternative("Big2", [9000, 0, 30, 4, 4])
            .alternative("Small", [1000, 0, 30, 4, 4])
            .build()
            .unwrap();
        let weights = WeightVector::new(-511.5, 0.0, 0.0, 0.0, 0.0);

        let err = CalculationPipeline::run(&table, &weights).unwrap_err();
        assert!(matches!(err, CalculationError::NonFiniteScore { .. }));
    }

    #[test]
    fn empty_table_gives_empty_report() {
        let report = CalculationPipeline::run(&AlternativesTable::empty(), &WeightVector::default()).unwrap();
        assert!(report.crisp_matrix.is_empty());
        assert!(report.saw.rows.is_empty());
        assert!(report.wp.rows.is_empty());
        assert!(report.comparison.rows.is_empty());
    }

    #[test]
    fn all_zero_weights_split_wp_evenly() {
        let report = CalculationPipeline::run(&default_table(), &WeightVector::uniform(0.0)).unwrap();
        for row in &report.wp.rows {
            assert!((row.vector_v - 0.2).abs() < EPS);
            assert_eq!(row.rank, 1);
        }
        for row in &report.saw.rows {
            assert_eq!(row.total, 0.0);
            assert_eq!(row.rank, 1);
        }
    }

    fn arb_table() -> impl Strategy<Value = AlternativesTable> {
        prop::collection::vec(
            (0u64..10_000, 0u64..1_000_000, 0u64..40, 1u64..=4, 1u64..=4),
            0..8,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .fold(AlternativesTable::builder(), |b, (i, (c1, c2, c3, c4, c5))| {
                    b.alternative(format!("Alt {}", i), [c1, c2, c3, c4, c5])
                })
                .build()
                .unwrap()
        })
    }

    fn arb_weights() -> impl Strategy<Value = WeightVector> {
        (0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0)
            .prop_map(|(a, b, c, d, e)| WeightVector::new(a, b, c, d, e))
    }

    proptest! {
        #[test]
        fn pass_is_idempotent(table in arb_table(), weights in arb_weights()) {
            let first = CalculationPipeline::run(&table, &weights).unwrap();
            let second = CalculationPipeline::run(&table, &weights).unwrap();
            prop_assert_eq!(first.crisp_matrix, second.crisp_matrix);
            prop_assert_eq!(first.saw, second.saw);
            prop_assert_eq!(first.wp, second.wp);
            prop_assert_eq!(first.comparison, second.comparison);
        }

        #[test]
        fn ranks_are_monotone_for_both_methods(table in arb_table(), weights in arb_weights()) {
            let report = CalculationPipeline::run(&table, &weights).unwrap();
            for a in &report.saw.rows {
                for b in &report.saw.rows {
                    if a.total > b.total {
                        prop_assert!(a.rank < b.rank);
                    }
                }
            }
            for a in &report.wp.rows {
                for b in &report.wp.rows {
                    if a.vector_v > b.vector_v {
                        prop_assert!(a.rank < b.rank);
                    }
                }
            }
        }

        #[test]
        fn wp_preferences_sum_to_one(table in arb_table(), weights in arb_weights()) {
            prop_assume!(!table.is_empty());
            let report = CalculationPipeline::run(&table, &weights).unwrap();
            let sum: f64 = report.wp.rows.iter().map(|r| r.vector_v).sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
        }
    }
}
