//! Record-level checks that run on the raw list, before indexing.

use std::collections::HashSet;

use orglens_model::Employee;

use crate::error::ValidationError;

/// Check the raw record set: an empty list is itself an error, and every
/// distinct duplicated ID is reported exactly once, however many times it
/// repeats. Findings come back in first-repeat order.
pub fn validate_records(employees: &[Employee]) -> Vec<ValidationError> {
    if employees.is_empty() {
        return vec![ValidationError::EmptyRecordSet];
    }

    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for employee in employees {
        if !seen.insert(employee.id) && !duplicates.contains(&employee.id) {
            duplicates.push(employee.id);
        }
    }

    duplicates
        .into_iter()
        .map(ValidationError::DuplicateId)
        .collect()
}
