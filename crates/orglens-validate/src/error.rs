use thiserror::Error;

use orglens_model::EmployeeId;

/// A structural defect found in the employee data.
///
/// Validators collect these instead of halting; the pipeline treats any
/// non-empty collection as fatal before the hierarchy is used.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("No employee records found")]
    EmptyRecordSet,

    #[error("Duplicate employee ID found: {0}")]
    DuplicateId(EmployeeId),

    #[error("Manager ID {manager_id} not found for employee {employee_name} (ID: {employee_id})")]
    ManagerNotFound {
        manager_id: EmployeeId,
        employee_id: EmployeeId,
        employee_name: String,
    },

    #[error("No CEO found (no employee without manager)")]
    NoRoot,

    #[error("Multiple CEOs found: {first} and {second}")]
    MultipleRoots { first: String, second: String },

    #[error("Circular reference detected: {employee_name} (ID: {employee_id}) has manager chain leading back to ID {closed_at}")]
    CircularReference {
        employee_id: EmployeeId,
        employee_name: String,
        closed_at: EmployeeId,
    },
}

impl ValidationError {
    /// Stable short code for error listings, one per defect kind.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::EmptyRecordSet => "EMPTY_EMPLOYEE_LIST",
            ValidationError::DuplicateId(_) => "UNIQUE_ID_VIOLATION",
            ValidationError::ManagerNotFound { .. } => "MANAGER_NOT_FOUND",
            ValidationError::NoRoot => "NO_CEO_FOUND",
            ValidationError::MultipleRoots { .. } => "MULTIPLE_CEOS",
            ValidationError::CircularReference { .. } => "CIRCULAR_REFERENCE",
        }
    }
}
