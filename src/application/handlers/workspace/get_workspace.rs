//! GetWorkspaceHandler - Query handler for retrieving a workspace.

use std::sync::Arc;

use crate::domain::foundation::WorkspaceId;
use crate::domain::workspace::{Workspace, WorkspaceError};
use crate::ports::WorkspaceRepository;

/// Query to get a workspace by ID.
#[derive(Debug, Clone)]
pub struct GetWorkspaceQuery {
    pub workspace_id: WorkspaceId,
}

/// Handler for retrieving workspaces.
pub struct GetWorkspaceHandler {
    repository: Arc<dyn WorkspaceRepository>,
}

impl GetWorkspaceHandler {
    pub fn new(repository: Arc<dyn WorkspaceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetWorkspaceQuery) -> Result<Workspace, WorkspaceError> {
        self.repository
            .find_by_id(&query.workspace_id)
            .await?
            .ok_or_else(|| WorkspaceError::not_found(query.workspace_id))
    }
}
