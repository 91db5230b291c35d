use orglens_model::Organization;

use crate::error::ValidationError;
use crate::OrganizationValidator;

/// Checks that every non-root employee's manager reference resolves against
/// the organization's index.
///
/// Root candidates (no manager reference) are exempt; the root-count
/// validator owns them. A self-reference passes here because the identity
/// does exist in the index - the cycle validator is the one that flags it.
pub struct ManagerReferenceValidator;

impl OrganizationValidator for ManagerReferenceValidator {
    fn validate(&self, org: &Organization) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for employee in org.employees() {
            let Some(manager_id) = employee.manager_id else {
                continue;
            };
            if !org.contains(manager_id) {
                errors.push(ValidationError::ManagerNotFound {
                    manager_id,
                    employee_id: employee.id,
                    employee_name: employee.full_name(),
                });
            }
        }
        errors
    }
}
