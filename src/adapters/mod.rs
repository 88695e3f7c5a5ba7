//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST endpoints
//! - `storage` - Workspace repository implementations

pub mod http;
pub mod storage;

pub use storage::InMemoryWorkspaceRepository;
