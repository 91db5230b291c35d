use orglens_model::{Employee, Organization};

use crate::cycle::CycleValidator;
use crate::error::ValidationError;
use crate::manager::ManagerReferenceValidator;
use crate::records::validate_records;
use crate::root::RootCountValidator;
use crate::OrganizationValidator;

/// Runs an ordered set of validators and concatenates their findings.
///
/// No deduplication happens across validators; the same structural defect
/// may surface from more than one of them. The composite itself performs no
/// additional checks.
pub struct CompositeValidator {
    validators: Vec<Box<dyn OrganizationValidator>>,
}

impl CompositeValidator {
    pub fn new(validators: Vec<Box<dyn OrganizationValidator>>) -> Self {
        Self { validators }
    }

    /// The standard suite in its fixed order: manager references, root
    /// count, cycles.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(ManagerReferenceValidator),
            Box::new(RootCountValidator),
            Box::new(CycleValidator),
        ])
    }
}

impl OrganizationValidator for CompositeValidator {
    fn validate(&self, org: &Organization) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for validator in &self.validators {
            errors.extend(validator.validate(org));
        }
        errors
    }
}

/// The full validation pipeline: record-level checks on the raw list, then
/// indexing, then the standard organization-level suite.
///
/// Returns the indexed organization together with the union of all
/// findings. Callers must treat a non-empty union as fatal - the hierarchy
/// build and the analyzers assume validated data.
pub fn validate_and_index(employees: Vec<Employee>) -> (Organization, Vec<ValidationError>) {
    let mut errors = validate_records(&employees);
    let org = Organization::from_employees(employees);
    errors.extend(CompositeValidator::standard().validate(&org));
    if !errors.is_empty() {
        tracing::warn!(count = errors.len(), "Validation found structural defects");
    }
    (org, errors)
}
