//! Workspace module - one session's editable table and weights.
//!
//! Holds the state an editing front end works against: the current
//! alternatives table (replaceable, resettable to the default dataset)
//! and the weight vector. Calculation itself is delegated to
//! `domain::analysis`.

mod aggregate;
mod errors;
mod submission;

pub use aggregate::Workspace;
pub use errors::{WorkspaceError, INCOMPLETE_TABLE_MESSAGE};
pub use submission::{SubmittedRow, TableSubmission};
