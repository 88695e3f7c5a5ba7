//! Comparison Assembler - Joins SAW and WP headline values side by side.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{CalculationError, SawResult, WpResult};

/// Series label for SAW totals.
pub const SAW_SERIES_LABEL: &str = "SAW";

/// Series label for WP preference values.
pub const WP_SERIES_LABEL: &str = "WP";

/// One alternative's values under both methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub alternative: String,
    pub saw_value: f64,
    pub wp_value: f64,
}

/// Grouped series keyed by alternative, suitable for a grouped bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSeries {
    pub saw_label: String,
    pub wp_label: String,
    pub rows: Vec<ComparisonRow>,
}

impl Default for ComparisonSeries {
    fn default() -> Self {
        Self {
            saw_label: SAW_SERIES_LABEL.to_string(),
            wp_label: WP_SERIES_LABEL.to_string(),
            rows: Vec::new(),
        }
    }
}

/// Joins scorer outputs on alternative name.
pub struct ComparisonAssembler;

impl ComparisonAssembler {
    /// Inner-joins SAW totals with WP preference values, in SAW row order.
    ///
    /// Both scorers run over the same crisp matrix, so every alternative must
    /// appear on both sides; anything else is a `ComparisonMismatch`.
    pub fn assemble(saw: &SawResult, wp: &WpResult) -> Result<ComparisonSeries, CalculationError> {
        let wp_values: HashMap<&str, f64> = wp
            .rows
            .iter()
            .map(|r| (r.alternative.as_str(), r.vector_v))
            .collect();

        let rows = saw
            .rows
            .iter()
            .map(|r| {
                wp_values
                    .get(r.alternative.as_str())
                    .map(|wp_value| ComparisonRow {
                        alternative: r.alternative.clone(),
                        saw_value: r.total,
                        wp_value: *wp_value,
                    })
                    .ok_or_else(|| CalculationError::ComparisonMismatch {
                        alternative: r.alternative.clone(),
                    })
            })
            .collect::<Result<Vec<_>, CalculationError>>()?;

        if let Some(extra) = wp
            .rows
            .iter()
            .find(|r| saw.get(&r.alternative).is_none())
        {
            return Err(CalculationError::ComparisonMismatch {
                alternative: extra.alternative.clone(),
            });
        }

        Ok(ComparisonSeries {
            rows,
            ..ComparisonSeries::default()
        })
    }
}
