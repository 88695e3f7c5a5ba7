//! SubmitTableHandler - Command handler for replacing a workspace's table.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::WorkspaceId;
use crate::domain::workspace::{TableSubmission, Workspace, WorkspaceError};
use crate::ports::WorkspaceRepository;

/// Command to replace the alternatives table of a workspace.
#[derive(Debug, Clone)]
pub struct SubmitTableCommand {
    pub workspace_id: WorkspaceId,
    pub submission: TableSubmission,
}

/// Handler for table submissions.
///
/// A submission is all-or-nothing: if any cell is missing or any row fails
/// validation, the stored table is left exactly as it was.
pub struct SubmitTableHandler {
    repository: Arc<dyn WorkspaceRepository>,
}

impl SubmitTableHandler {
    pub fn new(repository: Arc<dyn WorkspaceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SubmitTableCommand) -> Result<Workspace, WorkspaceError> {
        let mut workspace = self
            .repository
            .find_by_id(&cmd.workspace_id)
            .await?
            .ok_or_else(|| WorkspaceError::not_found(cmd.workspace_id))?;

        let table = cmd.submission.into_table().map_err(|e| {
            warn!(
                workspace_id = %cmd.workspace_id,
                field = e.field(),
                "Table submission rejected"
            );
            WorkspaceError::from(e)
        })?;

        workspace.replace_table(table);
        self.repository.update(&workspace).await?;

        info!(
            workspace_id = %cmd.workspace_id,
            alternatives = workspace.table().len(),
            "Alternatives table replaced"
        );

        Ok(workspace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::workspace::test_support::MockWorkspaceRepository;
    use crate::domain::analysis::{default_table, WeightVector};
    use crate::domain::workspace::{SubmittedRow, INCOMPLETE_TABLE_MESSAGE};

    fn seeded() -> (Arc<MockWorkspaceRepository>, WorkspaceId) {
        let workspace = Workspace::new(WorkspaceId::new(), WeightVector::default());
        let id = *workspace.id();
        (Arc::new(MockWorkspaceRepository::with_workspace(workspace)), id)
    }

    #[tokio::test]
    async fn replaces_table_on_valid_submission() {
        let (repo, id) = seeded();
        let handler = SubmitTableHandler::new(repo.clone());

        let workspace = handler
            .handle(SubmitTableCommand {
                workspace_id: id,
                submission: TableSubmission::new(vec![
                    SubmittedRow::complete("X", [1000, 0, 30, 4, 4]),
                    SubmittedRow::complete("Y", [5000, 600_000, 5, 1, 1]),
                ]),
            })
            .await
            .unwrap();

        assert_eq!(workspace.table().len(), 2);
        assert_eq!(repo.stored(&id).unwrap().table().len(), 2);
        assert_eq!(repo.update_count(), 1);
    }

    #[tokio::test]
    async fn missing_cell_keeps_previous_table() {
        let (repo, id) = seeded();
        let handler = SubmitTableHandler::new(repo.clone());
        let mut row = SubmittedRow::complete("X", [1000, 0, 30, 4, 4]);
        row.mdr_fee = None;

        let result = handler
            .handle(SubmitTableCommand {
                workspace_id: id,
                submission: TableSubmission::new(vec![row]),
            })
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.message(), INCOMPLETE_TABLE_MESSAGE);
        assert_eq!(repo.stored(&id).unwrap().table(), &default_table());
        assert_eq!(repo.update_count(), 0);
    }

    #[tokio::test]
    async fn out_of_scale_rating_is_rejected() {
        let (repo, id) = seeded();
        let handler = SubmitTableHandler::new(repo.clone());

        let result = handler
            .handle(SubmitTableCommand {
                workspace_id: id,
                submission: TableSubmission::new(vec![SubmittedRow::complete(
                    "X",
                    [1000, 0, 30, 5, 4],
                )]),
            })
            .await;

        assert!(matches!(result, Err(WorkspaceError::ValidationFailed { .. })));
        assert_eq!(repo.stored(&id).unwrap().table(), &default_table());
    }

    #[tokio::test]
    async fn empty_submission_is_accepted() {
        let (repo, id) = seeded();
        let handler = SubmitTableHandler::new(repo);

        let workspace = handler
            .handle(SubmitTableCommand {
                workspace_id: id,
                submission: TableSubmission::default(),
            })
            .await
            .unwrap();

        assert!(workspace.table().is_empty());
    }

    #[tokio::test]
    async fn unknown_workspace_is_not_found() {
        let handler = SubmitTableHandler::new(Arc::new(MockWorkspaceRepository::new()));
        let id = WorkspaceId::new();

        let result = handler
            .handle(SubmitTableCommand {
                workspace_id: id,
                submission: TableSubmission::default(),
            })
            .await;

        assert_eq!(result, Err(WorkspaceError::NotFound(id)));
    }
}
