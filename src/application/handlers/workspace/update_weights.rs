//! UpdateWeightsHandler - Command handler for changing a workspace's weights.

use std::sync::Arc;

use tracing::info;

use crate::domain::analysis::WeightVector;
use crate::domain::foundation::WorkspaceId;
use crate::domain::workspace::{Workspace, WorkspaceError};
use crate::ports::WorkspaceRepository;

/// Command to replace the weight vector of a workspace.
#[derive(Debug, Clone)]
pub struct UpdateWeightsCommand {
    pub workspace_id: WorkspaceId,
    pub weights: WeightVector,
}

/// Handler for weight updates.
///
/// Weights are stored as given; they are not normalized and are not
/// required to sum to one.
pub struct UpdateWeightsHandler {
    repository: Arc<dyn WorkspaceRepository>,
}

impl UpdateWeightsHandler {
    pub fn new(repository: Arc<dyn WorkspaceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateWeightsCommand) -> Result<Workspace, WorkspaceError> {
        let mut workspace = self
            .repository
            .find_by_id(&cmd.workspace_id)
            .await?
            .ok_or_else(|| WorkspaceError::not_found(cmd.workspace_id))?;

        workspace.update_weights(cmd.weights);
        self.repository.update(&workspace).await?;

        info!(
            workspace_id = %cmd.workspace_id,
            weight_sum = cmd.weights.sum(),
            "Weights updated"
        );

        Ok(workspace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::workspace::test_support::MockWorkspaceRepository;

    #[tokio::test]
    async fn stores_weights_without_normalizing() {
        let workspace = Workspace::new(WorkspaceId::new(), WeightVector::default());
        let id = *workspace.id();
        let repo = Arc::new(MockWorkspaceRepository::with_workspace(workspace));
        let handler = UpdateWeightsHandler::new(repo.clone());
        let weights = WeightVector::new(0.5, 0.5, 0.5, 0.5, 0.5);

        let updated = handler
            .handle(UpdateWeightsCommand {
                workspace_id: id,
                weights,
            })
            .await
            .unwrap();

        assert_eq!(updated.weights(), &weights);
        assert_eq!(repo.stored(&id).unwrap().weights(), &weights);
    }

    #[tokio::test]
    async fn unknown_workspace_is_not_found() {
        let handler = UpdateWeightsHandler::new(Arc::new(MockWorkspaceRepository::new()));
        let id = WorkspaceId::new();

        let result = handler
            .handle(UpdateWeightsCommand {
                workspace_id: id,
                weights: WeightVector::default(),
            })
            .await;

        assert_eq!(result, Err(WorkspaceError::NotFound(id)));
    }
}
