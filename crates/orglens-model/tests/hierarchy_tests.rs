//! Tests for hierarchy construction over the indexed organization.
//!
//! Verifies:
//! - Reachability: after a build on valid data, every non-root employee is
//!   reachable from the root by following subordinate links
//! - Link consistency: manager and subordinate fields stay inverses
//! - Depth/chain computation over built links

use std::collections::HashSet;

use orglens_model::{Employee, EmployeeId, Organization};

fn build_org(employees: Vec<Employee>) -> Organization {
    let mut org = Organization::from_employees(employees);
    org.build_hierarchy();
    org
}

/// Three-level line plus one branch: 1 <- 2 <- 3, 1 <- 4.
fn small_tree() -> Organization {
    build_org(vec![
        Employee::new(1, "Root", "One", 120_000.0, None),
        Employee::new(2, "Mid", "Two", 80_000.0, Some(1)),
        Employee::new(3, "Leaf", "Three", 55_000.0, Some(2)),
        Employee::new(4, "Leaf", "Four", 58_000.0, Some(1)),
    ])
}

// =====================================================================
// Reachability
// =====================================================================

#[test]
fn every_non_root_employee_reachable_from_root() {
    let org = small_tree();
    let root = org.root().expect("root designated");

    let mut reached = HashSet::new();
    let mut stack = vec![root.id];
    while let Some(id) = stack.pop() {
        if !reached.insert(id) {
            continue;
        }
        if let Some(employee) = org.get(id) {
            stack.extend(employee.subordinates.iter().copied());
        }
    }

    for employee in org.employees() {
        assert!(
            reached.contains(&employee.id),
            "employee {} not reachable from root",
            employee.id
        );
    }
}

#[test]
fn reachability_holds_for_deep_chain() {
    // 1 <- 2 <- 3 <- 4 <- 5 <- 6 <- 7
    let employees: Vec<Employee> = (1..=7)
        .map(|id| {
            let manager = if id == 1 { None } else { Some(id - 1) };
            Employee::new(id, "Chain", format!("Member{id}"), 50_000.0, manager)
        })
        .collect();
    let org = build_org(employees);

    let mut count = 0;
    let mut stack = vec![org.root().unwrap().id];
    let mut seen = HashSet::new();
    while let Some(id) = stack.pop() {
        if seen.insert(id) {
            count += 1;
            stack.extend(org.get(id).unwrap().subordinates.iter().copied());
        }
    }
    assert_eq!(count, 7);
}

// =====================================================================
// Link consistency
// =====================================================================

#[test]
fn manager_and_subordinates_are_inverses() {
    let org = small_tree();
    for employee in org.employees() {
        if let Some(mid) = employee.manager {
            let manager = org.get(mid).expect("manager exists");
            assert!(
                manager.subordinates.contains(&employee.id),
                "manager {} missing back-link to {}",
                mid,
                employee.id
            );
        }
        for sid in &employee.subordinates {
            let subordinate = org.get(*sid).expect("subordinate exists");
            assert_eq!(subordinate.manager, Some(employee.id));
        }
    }
}

#[test]
fn subordinates_never_contain_duplicates() {
    let org = small_tree();
    for employee in org.employees() {
        let unique: HashSet<&EmployeeId> = employee.subordinates.iter().collect();
        assert_eq!(unique.len(), employee.subordinates.len());
    }
}

// =====================================================================
// Depth and chain over built links
// =====================================================================

#[test]
fn depth_counts_hops_to_root() {
    let org = small_tree();
    assert_eq!(org.depth_and_chain(EmployeeId::new(1)).depth, 0);
    assert_eq!(org.depth_and_chain(EmployeeId::new(2)).depth, 1);
    assert_eq!(org.depth_and_chain(EmployeeId::new(3)).depth, 2);
}

#[test]
fn chain_lists_managers_between_employee_and_root_nearest_first() {
    // 1 <- 2 <- 3 <- 4 <- 5
    let employees: Vec<Employee> = (1..=5)
        .map(|id| {
            let manager = if id == 1 { None } else { Some(id - 1) };
            Employee::new(id, "Deep", format!("Member{id}"), 50_000.0, manager)
        })
        .collect();
    let org = build_org(employees);

    let dc = org.depth_and_chain(EmployeeId::new(5));
    assert_eq!(dc.depth, 4);
    assert_eq!(
        dc.chain,
        vec![EmployeeId::new(4), EmployeeId::new(3), EmployeeId::new(2)],
        "chain must exclude the root and start with the nearest manager"
    );
}
