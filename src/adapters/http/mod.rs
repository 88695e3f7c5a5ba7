//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod workspace;

// Re-export key types for convenience
pub use workspace::workspace_router;
pub use workspace::WorkspaceAppState;
