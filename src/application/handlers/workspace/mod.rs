//! Workspace command and query handlers.

mod calculate_rankings;
mod create_workspace;
mod get_workspace;
mod reset_table;
mod submit_table;
mod update_weights;

#[cfg(test)]
mod test_support;

pub use calculate_rankings::{CalculateRankingsHandler, CalculateRankingsQuery};
pub use create_workspace::{CreateWorkspaceCommand, CreateWorkspaceHandler};
pub use get_workspace::{GetWorkspaceHandler, GetWorkspaceQuery};
pub use reset_table::{ResetTableCommand, ResetTableHandler};
pub use submit_table::{SubmitTableCommand, SubmitTableHandler};
pub use update_weights::{UpdateWeightsCommand, UpdateWeightsHandler};
