//! The central owning table of employees and the hierarchy build.
//!
//! An `Organization` owns every [`Employee`] in a map keyed by ID and keeps
//! the insertion order so that every traversal is deterministic in input
//! order. Parent/child association is a relation maintained through the
//! table: link fields hold [`EmployeeId`]s, and only the organization
//! mutates them.

use std::collections::HashMap;

use crate::employee::{Employee, EmployeeId};

/// Depth and reporting chain of one employee, computed in a single upward
/// traversal.
///
/// `depth` counts manager hops to the root (the root itself is depth 0).
/// `chain` lists the managers strictly between the employee and the root,
/// nearest manager first; the root is not included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthAndChain {
    pub depth: u32,
    pub chain: Vec<EmployeeId>,
}

/// Indexed collection of employees plus the designated root.
///
/// Lifecycle: construct with [`Organization::from_employees`], run the
/// structural validators, then call [`Organization::build_hierarchy`]
/// exactly once. Links are mutated only during the build and are read-only
/// afterward.
#[derive(Debug, Clone, Default)]
pub struct Organization {
    table: HashMap<EmployeeId, Employee>,
    /// Insertion order of IDs; all iteration follows this.
    order: Vec<EmployeeId>,
    root: Option<EmployeeId>,
}

impl Organization {
    /// Index a list of employees by ID.
    ///
    /// On a duplicate ID the first occurrence wins and later records are
    /// dropped. Duplicates are a validation error reported by the record
    /// validator, which runs on the raw list before this index is trusted;
    /// keeping indexing total lets the remaining validators still run and
    /// report everything they find.
    pub fn from_employees(employees: Vec<Employee>) -> Self {
        let mut table = HashMap::with_capacity(employees.len());
        let mut order = Vec::with_capacity(employees.len());
        for employee in employees {
            let id = employee.id;
            if table.contains_key(&id) {
                tracing::debug!(%id, "Dropping duplicate employee record during indexing");
                continue;
            }
            table.insert(id, employee);
            order.push(id);
        }
        Self {
            table,
            order,
            root: None,
        }
    }

    /// Resolve manager references into bidirectional links and designate
    /// the root.
    ///
    /// For each employee with a `manager_id` that resolves against the
    /// table, the manager/subordinate links are wired up; an unresolvable
    /// reference leaves the employee parent-less (that defect belongs to
    /// the manager-existence validator, not to the build). An employee with
    /// no `manager_id` becomes the root.
    ///
    /// Assumes validation has passed. On data with multiple roots or cycles
    /// the resulting structure is unspecified and must not be relied upon.
    pub fn build_hierarchy(&mut self) {
        for id in self.order.clone() {
            let manager_id = match self.table.get(&id) {
                Some(employee) => employee.manager_id,
                None => continue,
            };
            match manager_id {
                None => self.root = Some(id),
                Some(mid) => {
                    if self.table.contains_key(&mid) {
                        self.set_manager(id, Some(mid));
                    }
                }
            }
        }
        tracing::debug!(
            employees = self.order.len(),
            root = ?self.root,
            "Hierarchy links built"
        );
    }

    /// Set or replace an employee's manager, keeping both sides of the
    /// relation consistent.
    ///
    /// No-ops when the manager is unchanged. On re-assignment the employee
    /// is detached from the old manager's subordinate list before being
    /// attached to the new one; attachment guards against duplicate
    /// insertion.
    pub fn set_manager(&mut self, employee: EmployeeId, new_manager: Option<EmployeeId>) {
        let old_manager = match self.table.get(&employee) {
            Some(e) => e.manager,
            None => return,
        };
        if old_manager == new_manager {
            return;
        }

        if let Some(old_id) = old_manager {
            if let Some(old) = self.table.get_mut(&old_id) {
                old.subordinates.retain(|s| *s != employee);
            }
        }

        if let Some(e) = self.table.get_mut(&employee) {
            e.manager = new_manager;
        }

        if let Some(new_id) = new_manager {
            if let Some(manager) = self.table.get_mut(&new_id) {
                if !manager.subordinates.contains(&employee) {
                    manager.subordinates.push(employee);
                }
            }
        }
    }

    /// The designated root. `None` until a successful build.
    pub fn root(&self) -> Option<&Employee> {
        self.root.and_then(|id| self.table.get(&id))
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.table.get(&id)
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.table.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Employees in input order.
    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.order.iter().filter_map(|id| self.table.get(id))
    }

    /// IDs in input order.
    pub fn ids(&self) -> impl Iterator<Item = EmployeeId> + '_ {
        self.order.iter().copied()
    }

    /// Arithmetic mean of the direct subordinates' salaries, or `0.0` when
    /// the employee has none (or does not exist).
    pub fn avg_subordinate_salary(&self, id: EmployeeId) -> f64 {
        let Some(employee) = self.table.get(&id) else {
            return 0.0;
        };
        if employee.subordinates.is_empty() {
            return 0.0;
        }
        let total: f64 = employee
            .subordinates
            .iter()
            .filter_map(|sid| self.table.get(sid))
            .map(|s| s.salary)
            .sum();
        total / employee.subordinates.len() as f64
    }

    /// Depth and reporting chain in one upward traversal over the built
    /// links. The chain excludes the root.
    pub fn depth_and_chain(&self, id: EmployeeId) -> DepthAndChain {
        let mut chain = Vec::new();
        let mut current = self.table.get(&id).and_then(|e| e.manager);
        while let Some(mid) = current {
            chain.push(mid);
            current = self.table.get(&mid).and_then(|e| e.manager);
        }
        let depth = chain.len() as u32;
        // The last hop is the root; the chain covers managers strictly
        // between the employee and the root.
        chain.pop();
        DepthAndChain { depth, chain }
    }
}
