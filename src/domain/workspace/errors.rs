//! Workspace-specific error types.

use crate::domain::analysis::CalculationError;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError, WorkspaceId};

/// Message shown when a submitted table has empty cells.
pub const INCOMPLETE_TABLE_MESSAGE: &str = "Data must not be empty. Please complete all cells.";

/// Workspace-specific errors.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkspaceError {
    /// Workspace was not found.
    NotFound(WorkspaceId),
    /// A submitted table has at least one empty cell.
    IncompleteTable { field: String },
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// A calculation pass was aborted.
    Calculation(CalculationError),
    /// Infrastructure error.
    Infrastructure(String),
}

impl WorkspaceError {
    pub fn not_found(id: WorkspaceId) -> Self {
        WorkspaceError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        WorkspaceError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        WorkspaceError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            WorkspaceError::NotFound(_) => ErrorCode::WorkspaceNotFound,
            WorkspaceError::IncompleteTable { .. } => ErrorCode::EmptyField,
            WorkspaceError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            WorkspaceError::Calculation(_) => ErrorCode::CalculationFailed,
            WorkspaceError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            WorkspaceError::NotFound(id) => format!("Workspace not found: {}", id),
            WorkspaceError::IncompleteTable { .. } => INCOMPLETE_TABLE_MESSAGE.to_string(),
            WorkspaceError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            WorkspaceError::Calculation(err) => format!("Calculation error: {}", err),
            WorkspaceError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for WorkspaceError {}

impl From<ValidationError> for WorkspaceError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyField { field } => WorkspaceError::IncompleteTable { field },
            other => WorkspaceError::ValidationFailed {
                field: other.field().to_string(),
                message: other.to_string(),
            },
        }
    }
}

impl From<CalculationError> for WorkspaceError {
    fn from(err: CalculationError) -> Self {
        WorkspaceError::Calculation(err)
    }
}

impl From<DomainError> for WorkspaceError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat
            | ErrorCode::DuplicateValue => WorkspaceError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.to_string(),
            },
            _ => WorkspaceError::Infrastructure(err.to_string()),
        }
    }
}
