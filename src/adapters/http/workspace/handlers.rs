//! HTTP handlers for workspace endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::workspace::{
    CalculateRankingsHandler, CalculateRankingsQuery, CreateWorkspaceCommand,
    CreateWorkspaceHandler, GetWorkspaceHandler, GetWorkspaceQuery, ResetTableCommand,
    ResetTableHandler, SubmitTableCommand, SubmitTableHandler, UpdateWeightsCommand,
    UpdateWeightsHandler,
};
use crate::domain::analysis::WeightVector;
use crate::domain::foundation::WorkspaceId;
use crate::domain::workspace::WorkspaceError;
use crate::ports::WorkspaceRepository;

use super::dto::{
    CalculationResponse, CreateWorkspaceRequest, ErrorResponse, SubmitAlternativesRequest,
    UpdateWeightsRequest, WorkspaceResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned for each request; handlers are built on demand from the shared ports.
#[derive(Clone)]
pub struct WorkspaceAppState {
    pub workspace_repository: Arc<dyn WorkspaceRepository>,
    pub default_weights: WeightVector,
}

impl WorkspaceAppState {
    pub fn new(workspace_repository: Arc<dyn WorkspaceRepository>, default_weights: WeightVector) -> Self {
        Self {
            workspace_repository,
            default_weights,
        }
    }

    pub fn create_workspace_handler(&self) -> CreateWorkspaceHandler {
        CreateWorkspaceHandler::new(self.workspace_repository.clone(), self.default_weights)
    }

    pub fn get_workspace_handler(&self) -> GetWorkspaceHandler {
        GetWorkspaceHandler::new(self.workspace_repository.clone())
    }

    pub fn submit_table_handler(&self) -> SubmitTableHandler {
        SubmitTableHandler::new(self.workspace_repository.clone())
    }

    pub fn update_weights_handler(&self) -> UpdateWeightsHandler {
        UpdateWeightsHandler::new(self.workspace_repository.clone())
    }

    pub fn reset_table_handler(&self) -> ResetTableHandler {
        ResetTableHandler::new(self.workspace_repository.clone())
    }

    pub fn calculate_rankings_handler(&self) -> CalculateRankingsHandler {
        CalculateRankingsHandler::new(self.workspace_repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/workspaces/:id - Get the current table and weights
pub async fn get_workspace(
    State(state): State<WorkspaceAppState>,
    Path(workspace_id): Path<String>,
) -> Result<impl IntoResponse, WorkspaceApiError> {
    let query = GetWorkspaceQuery {
        workspace_id: parse_workspace_id(&workspace_id)?,
    };

    let workspace = state.get_workspace_handler().handle(query).await?;

    Ok(Json(WorkspaceResponse::from(&workspace)))
}

/// GET /api/workspaces/:id/results - Run a calculation pass
pub async fn get_results(
    State(state): State<WorkspaceAppState>,
    Path(workspace_id): Path<String>,
) -> Result<impl IntoResponse, WorkspaceApiError> {
    let query = CalculateRankingsQuery {
        workspace_id: parse_workspace_id(&workspace_id)?,
    };

    let report = state.calculate_rankings_handler().handle(query).await?;

    Ok(Json(CalculationResponse::from(&report)))
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/PUT endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/workspaces - Create a workspace seeded with the default dataset
pub async fn create_workspace(
    State(state): State<WorkspaceAppState>,
    body: Option<Json<CreateWorkspaceRequest>>,
) -> Result<impl IntoResponse, WorkspaceApiError> {
    let request = body.map(|Json(req)| req).unwrap_or_default();
    let cmd = CreateWorkspaceCommand {
        weights: request.weights.map(Into::into),
    };

    let workspace = state.create_workspace_handler().handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(WorkspaceResponse::from(&workspace))))
}

/// PUT /api/workspaces/:id/alternatives - Replace the alternatives table
pub async fn submit_alternatives(
    State(state): State<WorkspaceAppState>,
    Path(workspace_id): Path<String>,
    Json(request): Json<SubmitAlternativesRequest>,
) -> Result<impl IntoResponse, WorkspaceApiError> {
    let cmd = SubmitTableCommand {
        workspace_id: parse_workspace_id(&workspace_id)?,
        submission: request.into(),
    };

    let workspace = state.submit_table_handler().handle(cmd).await?;

    Ok(Json(WorkspaceResponse::from(&workspace)))
}

/// PUT /api/workspaces/:id/weights - Replace the weight vector
pub async fn update_weights(
    State(state): State<WorkspaceAppState>,
    Path(workspace_id): Path<String>,
    Json(request): Json<UpdateWeightsRequest>,
) -> Result<impl IntoResponse, WorkspaceApiError> {
    let cmd = UpdateWeightsCommand {
        workspace_id: parse_workspace_id(&workspace_id)?,
        weights: request.weights.into(),
    };

    let workspace = state.update_weights_handler().handle(cmd).await?;

    Ok(Json(WorkspaceResponse::from(&workspace)))
}

/// POST /api/workspaces/:id/reset - Restore the default dataset
pub async fn reset_alternatives(
    State(state): State<WorkspaceAppState>,
    Path(workspace_id): Path<String>,
) -> Result<impl IntoResponse, WorkspaceApiError> {
    let cmd = ResetTableCommand {
        workspace_id: parse_workspace_id(&workspace_id)?,
    };

    let workspace = state.reset_table_handler().handle(cmd).await?;

    Ok(Json(WorkspaceResponse::from(&workspace)))
}

fn parse_workspace_id(raw: &str) -> Result<WorkspaceId, WorkspaceApiError> {
    raw.parse::<WorkspaceId>()
        .map_err(|_| WorkspaceApiError::BadRequest("Invalid workspace ID".to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts workspace errors to HTTP responses.
#[derive(Debug)]
pub enum WorkspaceApiError {
    BadRequest(String),
    Workspace(WorkspaceError),
}

impl From<WorkspaceError> for WorkspaceApiError {
    fn from(err: WorkspaceError) -> Self {
        Self::Workspace(err)
    }
}

impl IntoResponse for WorkspaceApiError {
    fn into_response(self) -> axum::response::Response {
        let err = match self {
            WorkspaceApiError::BadRequest(message) => {
                return (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(message)))
                    .into_response();
            }
            WorkspaceApiError::Workspace(err) => err,
        };

        let status = match &err {
            WorkspaceError::NotFound(_) => StatusCode::NOT_FOUND,
            WorkspaceError::IncompleteTable { .. } | WorkspaceError::ValidationFailed { .. } => {
                StatusCode::BAD_REQUEST
            }
            WorkspaceError::Calculation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            WorkspaceError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &err {
            WorkspaceError::IncompleteTable { field }
            | WorkspaceError::ValidationFailed { field, .. } => ErrorResponse::with_details(
                err.code().to_string(),
                err.message(),
                serde_json::json!({ "field": field }),
            ),
            _ => ErrorResponse::new(err.code().to_string(), err.message()),
        };

        (status, Json(body)).into_response()
    }
}
