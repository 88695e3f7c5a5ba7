//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod workspace;

pub use workspace::{
    CalculateRankingsHandler, CalculateRankingsQuery, CreateWorkspaceCommand,
    CreateWorkspaceHandler, GetWorkspaceHandler, GetWorkspaceQuery, ResetTableCommand,
    ResetTableHandler, SubmitTableCommand, SubmitTableHandler, UpdateWeightsCommand,
    UpdateWeightsHandler,
};
