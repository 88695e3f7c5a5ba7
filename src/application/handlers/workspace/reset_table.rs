//! ResetTableHandler - Command handler for restoring the default dataset.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::WorkspaceId;
use crate::domain::workspace::{Workspace, WorkspaceError};
use crate::ports::WorkspaceRepository;

/// Command to discard a workspace's table and restore the defaults.
#[derive(Debug, Clone)]
pub struct ResetTableCommand {
    pub workspace_id: WorkspaceId,
}

/// Handler for table resets.
pub struct ResetTableHandler {
    repository: Arc<dyn WorkspaceRepository>,
}

impl ResetTableHandler {
    pub fn new(repository: Arc<dyn WorkspaceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ResetTableCommand) -> Result<Workspace, WorkspaceError> {
        let mut workspace = self
            .repository
            .find_by_id(&cmd.workspace_id)
            .await?
            .ok_or_else(|| WorkspaceError::not_found(cmd.workspace_id))?;

        workspace.reset_table();
        self.repository.update(&workspace).await?;

        info!(workspace_id = %cmd.workspace_id, "Alternatives table reset to defaults");

        Ok(workspace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::workspace::test_support::MockWorkspaceRepository;
    use crate::domain::analysis::{default_table, AlternativesTable, WeightVector};

    #[tokio::test]
    async fn restores_default_table() {
        let mut workspace = Workspace::new(WorkspaceId::new(), WeightVector::default());
        workspace.replace_table(AlternativesTable::empty());
        let id = *workspace.id();
        let repo = Arc::new(MockWorkspaceRepository::with_workspace(workspace));
        let handler = ResetTableHandler::new(repo.clone());

        let reset = handler
            .handle(ResetTableCommand { workspace_id: id })
            .await
            .unwrap();

        assert_eq!(reset.table(), &default_table());
        assert_eq!(repo.stored(&id).unwrap().table(), &default_table());
    }

    #[tokio::test]
    async fn storage_failure_is_reported() {
        let workspace = Workspace::new(WorkspaceId::new(), WeightVector::default());
        let id = *workspace.id();
        let handler = ResetTableHandler::new(Arc::new(MockWorkspaceRepository::failing_with(workspace)));

        let result = handler.handle(ResetTableCommand { workspace_id: id }).await;
        assert!(matches!(result, Err(WorkspaceError::Infrastructure(_))));
    }

    #[tokio::test]
    async fn unknown_workspace_is_not_found() {
        let handler = ResetTableHandler::new(Arc::new(MockWorkspaceRepository::new()));
        let id = WorkspaceId::new();

        let result = handler.handle(ResetTableCommand { workspace_id: id }).await;
        assert_eq!(result, Err(WorkspaceError::NotFound(id)));
    }
}
