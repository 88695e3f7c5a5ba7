//! CreateWorkspaceHandler - Command handler for opening a new workspace.

use std::sync::Arc;

use tracing::info;

use crate::domain::analysis::WeightVector;
use crate::domain::foundation::WorkspaceId;
use crate::domain::workspace::{Workspace, WorkspaceError};
use crate::ports::WorkspaceRepository;

/// Command to create a new workspace.
#[derive(Debug, Clone, Default)]
pub struct CreateWorkspaceCommand {
    /// Initial weights; the configured defaults are used when absent.
    pub weights: Option<WeightVector>,
}

/// Handler for creating workspaces.
pub struct CreateWorkspaceHandler {
    repository: Arc<dyn WorkspaceRepository>,
    default_weights: WeightVector,
}

impl CreateWorkspaceHandler {
    pub fn new(repository: Arc<dyn WorkspaceRepository>, default_weights: WeightVector) -> Self {
        Self {
            repository,
            default_weights,
        }
    }

    pub async fn handle(&self, cmd: CreateWorkspaceCommand) -> Result<Workspace, WorkspaceError> {
        let weights = cmd.weights.unwrap_or(self.default_weights);
        let workspace = Workspace::new(WorkspaceId::new(), weights);

        self.repository.save(&workspace).await?;

        info!(
            workspace_id = %workspace.id(),
            alternatives = workspace.table().len(),
            "Workspace created"
        );

        Ok(workspace)
    }
}
