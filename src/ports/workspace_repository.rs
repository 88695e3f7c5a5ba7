//! Workspace repository port.
//!
//! Defines the contract for persisting and retrieving Workspace aggregates.
//! Each stored workspace is an independent session; nothing is shared
//! between them.

use crate::domain::foundation::{DomainError, WorkspaceId};
use crate::domain::workspace::Workspace;
use async_trait::async_trait;

/// Repository port for Workspace aggregate persistence.
#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
    /// Save a new workspace.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, workspace: &Workspace) -> Result<(), DomainError>;

    /// Update an existing workspace.
    ///
    /// # Errors
    ///
    /// - `WorkspaceNotFound` if the workspace doesn't exist
    /// - `StorageError` on persistence failure
    async fn update(&self, workspace: &Workspace) -> Result<(), DomainError>;

    /// Find a workspace by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &WorkspaceId) -> Result<Option<Workspace>, DomainError>;

    /// Check if a workspace exists.
    async fn exists(&self, id: &WorkspaceId) -> Result<bool, DomainError>;
}
