//! Table submission - an edited table as it arrives from the editing grid.
//!
//! Cells are optional here so that a half-filled grid can be rejected with a
//! clear message instead of failing to decode.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{Alternative, AlternativesTable, RawAttributes};
use crate::domain::foundation::ValidationError;

/// One edited row; any cell may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedRow {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mdr_fee: Option<u64>,
    #[serde(default)]
    pub monthly_fee: Option<u64>,
    #[serde(default)]
    pub channel_count: Option<u64>,
    #[serde(default)]
    pub settlement_speed: Option<u64>,
    #[serde(default)]
    pub integration_ease: Option<u64>,
}

impl SubmittedRow {
    /// Creates a fully populated row with values in C1..C5 order.
    pub fn complete(name: impl Into<String>, values: [u64; 5]) -> Self {
        Self {
            name: Some(name.into()),
            mdr_fee: Some(values[0]),
            monthly_fee: Some(values[1]),
            channel_count: Some(values[2]),
            settlement_speed: Some(values[3]),
            integration_ease: Some(values[4]),
        }
    }

    /// Names of the cells that are missing, in column order.
    pub fn missing_cells(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
            missing.push("name");
        }
        let cells = [
            ("mdr_fee", self.mdr_fee),
            ("monthly_fee", self.monthly_fee),
            ("channel_count", self.channel_count),
            ("settlement_speed", self.settlement_speed),
            ("integration_ease", self.integration_ease),
        ];
        missing.extend(cells.iter().filter(|(_, v)| v.is_none()).map(|(n, _)| *n));
        missing
    }

    fn into_alternative(self, index: usize) -> Result<Alternative, ValidationError> {
        let missing = |cell: &str| ValidationError::empty_field(format!("rows[{}].{}", index, cell));

        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| missing("name"))?;

        let attributes = RawAttributes {
            mdr_fee: self.mdr_fee.ok_or_else(|| missing("mdr_fee"))?,
            monthly_fee: self.monthly_fee.ok_or_else(|| missing("monthly_fee"))?,
            channel_count: self.channel_count.ok_or_else(|| missing("channel_count"))?,
            settlement_speed: self
                .settlement_speed
                .ok_or_else(|| missing("settlement_speed"))?,
            integration_ease: self
                .integration_ease
                .ok_or_else(|| missing("integration_ease"))?,
        };

        Ok(Alternative::new(name, attributes))
    }
}

/// A whole edited table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableSubmission {
    pub rows: Vec<SubmittedRow>,
}

impl TableSubmission {
    /// Creates a submission from rows.
    pub fn new(rows: Vec<SubmittedRow>) -> Self {
        Self { rows }
    }

    /// Returns true if any cell in any row is missing.
    pub fn has_missing_cells(&self) -> bool {
        self.rows.iter().any(|r| !r.missing_cells().is_empty())
    }

    /// Converts into a validated table.
    ///
    /// # Errors
    ///
    /// - `EmptyField` for the first missing cell (`rows[i].cell`)
    /// - `Duplicate` / `OutOfRange` from table validation
    pub fn into_table(self) -> Result<AlternativesTable, ValidationError> {
        let rows = self
            .rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| row.into_alternative(i))
            .collect::<Result<Vec<_>, _>>()?;

        AlternativesTable::new(rows)
    }
}
