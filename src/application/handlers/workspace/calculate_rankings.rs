//! CalculateRankingsHandler - Query handler running one calculation pass.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::analysis::CalculationReport;
use crate::domain::foundation::WorkspaceId;
use crate::domain::workspace::WorkspaceError;
use crate::ports::WorkspaceRepository;

/// Query to compute SAW and WP rankings for a workspace.
#[derive(Debug, Clone)]
pub struct CalculateRankingsQuery {
    pub workspace_id: WorkspaceId,
}

/// Handler for calculation passes.
///
/// Reads a snapshot of the workspace and never writes it back.
pub struct CalculateRankingsHandler {
    repository: Arc<dyn WorkspaceRepository>,
}

impl CalculateRankingsHandler {
    pub fn new(repository: Arc<dyn WorkspaceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: CalculateRankingsQuery,
    ) -> Result<CalculationReport, WorkspaceError> {
        let workspace = self
            .repository
            .find_by_id(&query.workspace_id)
            .await?
            .ok_or_else(|| WorkspaceError::not_found(query.workspace_id))?;

        let report = workspace.calculate().map_err(|e| {
            warn!(
                workspace_id = %query.workspace_id,
                error = %e,
                "Calculation pass aborted"
            );
            WorkspaceError::from(e)
        })?;

        debug!(
            workspace_id = %query.workspace_id,
            alternatives = report.saw.rows.len(),
            "Calculation pass completed"
        );

        Ok(report)
    }
}
