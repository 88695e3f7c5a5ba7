//! HTTP adapter for workspace endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AlternativeRowRequest, AlternativeRowResponse, CalculationResponse, CreateWorkspaceRequest,
    CriterionResponse, CrispRowResponse, ErrorResponse, SawRowResponse, SubmitAlternativesRequest,
    UpdateWeightsRequest, WeightsDto, WorkspaceResponse, WpRowResponse,
};
pub use handlers::{WorkspaceApiError, WorkspaceAppState};
pub use routes::{workspace_router, workspace_routes};
