//! Alternatives Table - Raw attribute values for every alternative.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{Criterion, ValidationError};

/// One raw value per criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAttributes {
    /// C1: merchant discount rate fee (Rp).
    pub mdr_fee: u64,
    /// C2: monthly fee (Rp).
    pub monthly_fee: u64,
    /// C3: number of payment channels.
    pub channel_count: u64,
    /// C4: settlement speed, 1-4.
    pub settlement_speed: u64,
    /// C5: ease of integration, 1-4.
    pub integration_ease: u64,
}

impl RawAttributes {
    /// Creates attributes from values in criterion order (C1..C5).
    pub const fn from_array(values: [u64; Criterion::COUNT]) -> Self {
        Self {
            mdr_fee: values[0],
            monthly_fee: values[1],
            channel_count: values[2],
            settlement_speed: values[3],
            integration_ease: values[4],
        }
    }

    /// Returns the raw value for a criterion.
    pub fn get(&self, criterion: Criterion) -> u64 {
        match criterion {
            Criterion::C1 => self.mdr_fee,
            Criterion::C2 => self.monthly_fee,
            Criterion::C3 => self.channel_count,
            Criterion::C4 => self.settlement_speed,
            Criterion::C5 => self.integration_ease,
        }
    }

    /// Returns the values in criterion order.
    pub fn as_array(&self) -> [u64; Criterion::COUNT] {
        [
            self.mdr_fee,
            self.monthly_fee,
            self.channel_count,
            self.settlement_speed,
            self.integration_ease,
        ]
    }
}

/// A named alternative with its raw attribute values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    pub attributes: RawAttributes,
}

impl Alternative {
    /// Creates a new alternative.
    pub fn new(name: impl Into<String>, attributes: RawAttributes) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }
}

/// Ordered, validated snapshot of alternatives for one calculation pass.
///
/// # Invariants
///
/// - every name is non-empty after trimming
/// - names are unique
/// - C4 and C5 lie within their 1-4 scale
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Alternative>", into = "Vec<Alternative>")]
pub struct AlternativesTable {
    rows: Vec<Alternative>,
}

impl AlternativesTable {
    /// Creates a table, validating every row.
    ///
    /// An empty table is valid.
    pub fn new(rows: Vec<Alternative>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(rows.len());

        for row in &rows {
            let name = row.name.trim();
            if name.is_empty() {
                return Err(ValidationError::empty_field("alternative"));
            }
            if !seen.insert(name) {
                return Err(ValidationError::duplicate("alternative", name));
            }

            for criterion in Criterion::all() {
                if let Some((min, max)) = criterion.scale_bounds() {
                    let value = row.attributes.get(*criterion);
                    if value < min || value > max {
                        return Err(ValidationError::out_of_range(
                            criterion.code(),
                            min as i64,
                            max as i64,
                            i64::try_from(value).unwrap_or(i64::MAX),
                        ));
                    }
                }
            }
        }

        Ok(Self { rows })
    }

    /// Creates an empty table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing a table.
    pub fn builder() -> AlternativesTableBuilder {
        AlternativesTableBuilder::new()
    }

    /// Wraps rows known to satisfy the table invariants.
    pub(crate) fn from_trusted_rows(rows: Vec<Alternative>) -> Self {
        Self { rows }
    }

    /// Returns the rows in input order.
    pub fn rows(&self) -> &[Alternative] {
        &self.rows
    }

    /// Looks up an alternative by name.
    pub fn get(&self, name: &str) -> Option<&Alternative> {
        self.rows.iter().find(|r| r.name == name)
    }

    /// Returns true if the table has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of alternatives.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl TryFrom<Vec<Alternative>> for AlternativesTable {
    type Error = ValidationError;

    fn try_from(rows: Vec<Alternative>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<AlternativesTable> for Vec<Alternative> {
    fn from(table: AlternativesTable) -> Self {
        table.rows
    }
}

/// Builder for constructing AlternativesTable instances.
#[derive(Debug, Default)]
pub struct AlternativesTableBuilder {
    rows: Vec<Alternative>,
}

impl AlternativesTableBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an alternative with values in criterion order (C1..C5).
    pub fn alternative(mut self, name: impl Into<String>, values: [u64; Criterion::COUNT]) -> Self {
        self.rows
            .push(Alternative::new(name, RawAttributes::from_array(values)));
        self
    }

    /// Builds and validates the table.
    pub fn build(self) -> Result<AlternativesTable, ValidationError> {
        AlternativesTable::new(self.rows)
    }
}
