//! Shared test doubles for workspace handler tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, WorkspaceId};
use crate::domain::workspace::Workspace;
use crate::ports::WorkspaceRepository;

pub(crate) struct MockWorkspaceRepository {
    workspaces: Mutex<HashMap<WorkspaceId, Workspace>>,
    update_count: Mutex<usize>,
    fail_writes: bool,
}

impl MockWorkspaceRepository {
    pub(crate) fn new() -> Self {
        Self {
            workspaces: Mutex::new(HashMap::new()),
            update_count: Mutex::new(0),
            fail_writes: false,
        }
    }

    pub(crate) fn with_workspace(workspace: Workspace) -> Self {
        let repo = Self::new();
        repo.workspaces
            .lock()
            .unwrap()
            .insert(*workspace.id(), workspace);
        repo
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::new()
        }
    }

    pub(crate) fn failing_with(workspace: Workspace) -> Self {
        let repo = Self::with_workspace(workspace);
        Self {
            fail_writes: true,
            ..repo
        }
    }

    pub(crate) fn stored(&self, id: &WorkspaceId) -> Option<Workspace> {
        self.workspaces.lock().unwrap().get(id).cloned()
    }

    pub(crate) fn update_count(&self) -> usize {
        *self.update_count.lock().unwrap()
    }
}

#[async_trait]
impl WorkspaceRepository for MockWorkspaceRepository {
    async fn save(&self, workspace: &Workspace) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                "Simulated save failure",
            ));
        }
        self.workspaces
            .lock()
            .unwrap()
            .insert(*workspace.id(), workspace.clone());
        Ok(())
    }

    async fn update(&self, workspace: &Workspace) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                "Simulated update failure",
            ));
        }
        *self.update_count.lock().unwrap() += 1;
        self.workspaces
            .lock()
            .unwrap()
            .insert(*workspace.id(), workspace.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &WorkspaceId) -> Result<Option<Workspace>, DomainError> {
        Ok(self.workspaces.lock().unwrap().get(id).cloned())
    }

    async fn exists(&self, id: &WorkspaceId) -> Result<bool, DomainError> {
        Ok(self.workspaces.lock().unwrap().contains_key(id))
    }
}
