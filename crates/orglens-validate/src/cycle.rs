//! Cycle detection over raw manager references.
//!
//! Runs before the hierarchy build, so it walks `manager_id` references
//! through the index rather than built links. Each walk is bounded by the
//! number of distinct IDs in the organization; total work is bounded by
//! employees x longest chain, since members of a discovered cycle are
//! skipped as later starting points.

use std::collections::HashSet;

use orglens_model::Organization;

use crate::error::ValidationError;
use crate::OrganizationValidator;

/// Detects cyclic manager chains, including the one-node self-reference.
///
/// A walk that revisits an ID already on the current walk confirms a cycle:
/// every ID on that walk is marked so the same cycle is never re-reported
/// from a different starting node, and one error is emitted naming the
/// walk's origin and the ID that closed the loop. A walk that hits an
/// unresolvable reference terminates quietly - that defect belongs to the
/// manager-existence validator.
pub struct CycleValidator;

impl OrganizationValidator for CycleValidator {
    fn validate(&self, org: &Organization) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut in_cycle: HashSet<_> = HashSet::new();

        for employee in org.employees() {
            if in_cycle.contains(&employee.id) {
                continue;
            }

            let mut visited = HashSet::new();
            visited.insert(employee.id);
            let mut manager_id = employee.manager_id;

            while let Some(mid) = manager_id {
                if visited.contains(&mid) {
                    in_cycle.extend(visited.iter().copied());
                    tracing::warn!(
                        origin = %employee.id,
                        closed_at = %mid,
                        "Cyclic manager chain detected"
                    );
                    errors.push(ValidationError::CircularReference {
                        employee_id: employee.id,
                        employee_name: employee.full_name(),
                        closed_at: mid,
                    });
                    break;
                }
                visited.insert(mid);
                match org.get(mid) {
                    Some(manager) => manager_id = manager.manager_id,
                    // Dangling reference; the manager validator owns it.
                    None => break,
                }
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orglens_model::{Employee, EmployeeId};

    #[test]
    fn test_acyclic_chain_passes() {
        let org = Organization::from_employees(vec![
            Employee::new(1, "Jane", "Root", 100.0, None),
            Employee::new(2, "Mid", "Manager", 90.0, Some(1)),
            Employee::new(3, "Leaf", "Worker", 80.0, Some(2)),
        ]);
        assert!(CycleValidator.validate(&org).is_empty());
    }

    #[test]
    fn test_two_node_cycle_reported_once() {
        let org = Organization::from_employees(vec![
            Employee::new(1, "A", "One", 100.0, Some(2)),
            Employee::new(2, "B", "Two", 100.0, Some(1)),
        ]);
        let errors = CycleValidator.validate(&org);
        assert_eq!(errors.len(), 1, "A->B->A must yield exactly one error");
        assert_eq!(
            errors[0],
            ValidationError::CircularReference {
                employee_id: EmployeeId::new(1),
                employee_name: "A One".into(),
                closed_at: EmployeeId::new(1),
            }
        );
    }

    #[test]
    fn test_self_reference_is_the_degenerate_cycle() {
        let org = Organization::from_employees(vec![Employee::new(
            1, "Own", "Boss", 100.0, Some(1),
        )]);
        let errors = CycleValidator.validate(&org);
        assert_eq!(
            errors,
            vec![ValidationError::CircularReference {
                employee_id: EmployeeId::new(1),
                employee_name: "Own Boss".into(),
                closed_at: EmployeeId::new(1),
            }]
        );
    }

    #[test]
    fn test_dead_end_walk_terminates_quietly() {
        // 2's chain dead-ends at missing ID 99; not a cycle.
        let org = Organization::from_employees(vec![
            Employee::new(1, "Jane", "Root", 100.0, None),
            Employee::new(2, "Pete", "Lost", 80.0, Some(99)),
        ]);
        assert!(CycleValidator.validate(&org).is_empty());
    }
}
