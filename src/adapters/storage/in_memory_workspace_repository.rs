//! In-Memory Workspace Repository Adapter
//!
//! Keeps workspaces in a process-local map. Concurrent calculation passes
//! take read locks only and can run in parallel.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, WorkspaceId};
use crate::domain::workspace::Workspace;
use crate::ports::WorkspaceRepository;

/// In-memory storage for workspaces
#[derive(Debug, Clone)]
pub struct InMemoryWorkspaceRepository {
    workspaces: Arc<RwLock<HashMap<WorkspaceId, Workspace>>>,
}

impl InMemoryWorkspaceRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            workspaces: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored workspaces (useful for tests)
    pub async fn clear(&self) {
        self.workspaces.write().await.clear();
    }

    /// Get the number of stored workspaces
    pub async fn workspace_count(&self) -> usize {
        self.workspaces.read().await.len()
    }
}

impl Default for InMemoryWorkspaceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorkspaceRepository for InMemoryWorkspaceRepository {
    async fn save(&self, workspace: &Workspace) -> Result<(), DomainError> {
        let mut workspaces = self.workspaces.write().await;
        workspaces.insert(*workspace.id(), workspace.clone());
        Ok(())
    }

    async fn update(&self, workspace: &Workspace) -> Result<(), DomainError> {
        let mut workspaces = self.workspaces.write().await;
        match workspaces.get_mut(workspace.id()) {
            Some(existing) => {
                *existing = workspace.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::WorkspaceNotFound,
                format!("Workspace not found: {}", workspace.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &WorkspaceId) -> Result<Option<Workspace>, DomainError> {
        let workspaces = self.workspaces.read().await;
        Ok(workspaces.get(id).cloned())
    }

    async fn exists(&self, id: &WorkspaceId) -> Result<bool, DomainError> {
        let workspaces = self.workspaces.read().await;
        Ok(workspaces.contains_key(id))
    }
}
