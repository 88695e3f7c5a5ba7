//! Axum router configuration for workspace endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    create_workspace, get_results, get_workspace, health, reset_alternatives,
    submit_alternatives, update_weights, WorkspaceAppState,
};

/// Create the workspace API router.
///
/// # Routes
///
/// - `POST /` - Create a workspace seeded with the default dataset
/// - `GET /:id` - Get the current table and weights
/// - `PUT /:id/alternatives` - Replace the alternatives table
/// - `PUT /:id/weights` - Replace the weight vector
/// - `POST /:id/reset` - Restore the default dataset
/// - `GET /:id/results` - Run a calculation pass
pub fn workspace_routes() -> Router<WorkspaceAppState> {
    Router::new()
        .route("/", post(create_workspace))
        .route("/:id", get(get_workspace))
        .route("/:id/alternatives", put(submit_alternatives))
        .route("/:id/weights", put(update_weights))
        .route("/:id/reset", post(reset_alternatives))
        .route("/:id/results", get(get_results))
}

/// Create the complete workspace module router.
///
/// Mounts the workspace routes under `/api/workspaces` and adds `/health`.
///
/// # Example
///
/// ```ignore
/// let state = WorkspaceAppState::new(repository, WeightVector::default());
/// let app = workspace_router().with_state(state);
/// ```
pub fn workspace_router() -> Router<WorkspaceAppState> {
    Router::new()
        .nest("/api/workspaces", workspace_routes())
        .route("/health", get(health))
}
