//! Workspace aggregate entity.
//!
//! A workspace is one user's working session: the current alternatives
//! table and weight vector. Calculation passes read a snapshot of both and
//! never mutate the workspace.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{
    default_table, AlternativesTable, CalculationError, CalculationPipeline, CalculationReport,
    WeightVector,
};
use crate::domain::foundation::{Timestamp, WorkspaceId};

/// Workspace aggregate - current table and weights for one session.
///
/// # Invariants
///
/// - `table` always satisfies `AlternativesTable` validation
/// - a rejected submission leaves `table` untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    id: WorkspaceId,
    table: AlternativesTable,
    weights: WeightVector,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Workspace {
    /// Create a workspace seeded with the default table and the given weights.
    pub fn new(id: WorkspaceId, weights: WeightVector) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            table: default_table(),
            weights,
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the workspace ID.
    pub fn id(&self) -> &WorkspaceId {
        &self.id
    }

    /// Returns the current alternatives table.
    pub fn table(&self) -> &AlternativesTable {
        &self.table
    }

    /// Returns the current weights.
    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    /// Returns when the workspace was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the workspace was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the alternatives table.
    pub fn replace_table(&mut self, table: AlternativesTable) {
        self.table = table;
        self.updated_at = Timestamp::now();
    }

    /// Replace the weight vector. Weights are stored as given.
    pub fn update_weights(&mut self, weights: WeightVector) {
        self.weights = weights;
        self.updated_at = Timestamp::now();
    }

    /// Discard the current table and restore the default dataset.
    ///
    /// Weights are left as they are.
    pub fn reset_table(&mut self) {
        self.table = default_table();
        self.updated_at = Timestamp::now();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Run one calculation pass over the current table and weights.
    pub fn calculate(&self) -> Result<CalculationReport, CalculationError> {
        CalculationPipeline::run(&self.table, &self.weights)
    }
}
