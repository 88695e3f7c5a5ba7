//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! - `WorkspaceRepository` - Persistence of per-session workspaces

mod workspace_repository;

pub use workspace_repository::WorkspaceRepository;
