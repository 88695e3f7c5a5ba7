//! Built-in dataset that new workspaces start from and reset back to.

use super::{Alternative, AlternativesTable, RawAttributes, WeightVector};

/// Default alternatives: five payment-service providers, values in C1..C5 order.
pub const DEFAULT_ALTERNATIVES: [(&str, RawAttributes); 5] = [
    ("A1 (Midtrans)", RawAttributes::from_array([4000, 0, 24, 3, 4])),
    ("A2 (Xendit)", RawAttributes::from_array([4500, 0, 28, 3, 4])),
    ("A3 (Doku)", RawAttributes::from_array([3500, 250_000, 20, 2, 3])),
    ("A4 (Faspay)", RawAttributes::from_array([4000, 500_000, 18, 2, 2])),
    ("A5 (Tripay)", RawAttributes::from_array([2500, 0, 12, 4, 3])),
];

/// Default criterion weights.
pub const DEFAULT_WEIGHTS: WeightVector = WeightVector::new(0.25, 0.15, 0.20, 0.20, 0.20);

/// Builds a fresh copy of the default table.
pub fn default_table() -> AlternativesTable {
    AlternativesTable::from_trusted_rows(
        DEFAULT_ALTERNATIVES
            .iter()
            .map(|(name, attributes)| Alternative::new(*name, *attributes))
            .collect(),
    )
}
