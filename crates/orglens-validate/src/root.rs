use orglens_model::Organization;

use crate::error::ValidationError;
use crate::OrganizationValidator;

/// Checks that exactly one employee has no manager reference.
///
/// Zero roots is an error; more than one yields a single error naming
/// exactly the first two roots in input order, even when more exist (a
/// reporting truncation kept for compatibility, not a completeness
/// guarantee).
pub struct RootCountValidator;

impl OrganizationValidator for RootCountValidator {
    fn validate(&self, org: &Organization) -> Vec<ValidationError> {
        if org.is_empty() {
            return Vec::new();
        }

        let roots: Vec<_> = org.employees().filter(|e| e.is_root()).collect();

        match roots.as_slice() {
            [] => vec![ValidationError::NoRoot],
            [_single] => Vec::new(),
            [first, second, ..] => vec![ValidationError::MultipleRoots {
                first: first.full_name(),
                second: second.full_name(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orglens_model::Employee;

    #[test]
    fn test_single_root_passes() {
        let org = Organization::from_employees(vec![
            Employee::new(1, "Jane", "Root", 100.0, None),
            Employee::new(2, "Sub", "Ordinate", 80.0, Some(1)),
        ]);
        assert!(RootCountValidator.validate(&org).is_empty());
    }

    #[test]
    fn test_no_root_is_an_error() {
        let org = Organization::from_employees(vec![
            Employee::new(1, "A", "One", 100.0, Some(2)),
            Employee::new(2, "B", "Two", 100.0, Some(1)),
        ]);
        assert_eq!(
            RootCountValidator.validate(&org),
            vec![ValidationError::NoRoot]
        );
    }

    #[test]
    fn test_two_roots_named_in_input_order() {
        let org = Organization::from_employees(vec![
            Employee::new(1, "First", "Boss", 100.0, None),
            Employee::new(2, "Second", "Boss", 100.0, None),
        ]);
        assert_eq!(
            RootCountValidator.validate(&org),
            vec![ValidationError::MultipleRoots {
                first: "First Boss".into(),
                second: "Second Boss".into(),
            }]
        );
    }

    #[test]
    fn test_three_roots_still_name_only_first_two() {
        let org = Organization::from_employees(vec![
            Employee::new(1, "First", "Boss", 100.0, None),
            Employee::new(2, "Second", "Boss", 100.0, None),
            Employee::new(3, "Third", "Boss", 100.0, None),
        ]);
        let errors = RootCountValidator.validate(&org);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0],
            ValidationError::MultipleRoots {
                first: "First Boss".into(),
                second: "Second Boss".into(),
            }
        );
    }

    #[test]
    fn test_empty_organization_yields_nothing() {
        let org = Organization::from_employees(Vec::new());
        assert!(RootCountValidator.validate(&org).is_empty());
    }
}
