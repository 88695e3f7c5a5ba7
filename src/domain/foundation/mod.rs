//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the decision calculator.

mod criterion;
mod crisp_score;
mod errors;
mod ids;
mod timestamp;

pub use criterion::{Criterion, Direction};
pub use crisp_score::CrispScore;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::WorkspaceId;
pub use timestamp::Timestamp;
