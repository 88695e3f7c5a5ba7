//! Storage Adapters
//!
//! Implementations of the WorkspaceRepository port.
//!
//! ## Available Adapters
//!
//! - **InMemoryWorkspaceRepository** - Stores workspaces in memory
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryWorkspaceRepository;
//!
//! let repository = Arc::new(InMemoryWorkspaceRepository::new());
//! ```

mod in_memory_workspace_repository;

pub use in_memory_workspace_repository::InMemoryWorkspaceRepository;
