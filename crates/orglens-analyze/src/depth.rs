//! Reporting-depth analysis: who is buried too deep in the chart.

use orglens_model::{EmployeeRef, Organization, ReportingDepthIssue};

use crate::policy::DepthPolicy;

/// Flags every employee whose distance to the root exceeds the configured
/// maximum, carrying the chain of managers strictly between the employee
/// and the root.
///
/// Depth and chain come from a single upward traversal per employee; the
/// root's own depth is 0, so it can never be flagged against a positive
/// maximum.
pub struct ReportingDepthAnalyzer {
    policy: DepthPolicy,
}

impl ReportingDepthAnalyzer {
    pub fn new(policy: DepthPolicy) -> Self {
        Self { policy }
    }

    pub fn analyze(&self, org: &Organization) -> Vec<ReportingDepthIssue> {
        let mut issues = Vec::new();
        for employee in org.employees() {
            let dc = org.depth_and_chain(employee.id);
            if dc.depth > self.policy.max_depth {
                let chain: Vec<EmployeeRef> = dc
                    .chain
                    .iter()
                    .filter_map(|id| org.get(*id))
                    .map(EmployeeRef::from)
                    .collect();
                issues.push(ReportingDepthIssue::new(
                    employee,
                    dc.depth,
                    self.policy.max_depth,
                    chain,
                ));
            }
        }
        issues
    }
}

impl Default for ReportingDepthAnalyzer {
    fn default() -> Self {
        Self::new(DepthPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orglens_model::{Employee, EmployeeId};

    /// A straight chain of `n` employees: 1 is the root, each next reports
    /// to the previous.
    fn chain_org(n: u32) -> Organization {
        let employees: Vec<Employee> = (1..=n)
            .map(|id| {
                let manager = if id == 1 { None } else { Some(id - 1) };
                Employee::new(id, "Chain", format!("Member{id}"), 50_000.0, manager)
            })
            .collect();
        let mut org = Organization::from_employees(employees);
        org.build_hierarchy();
        org
    }

    #[test]
    fn test_depth_within_limit_passes() {
        // Depth of the deepest employee is 4 == max.
        let org = chain_org(5);
        assert!(ReportingDepthAnalyzer::default().analyze(&org).is_empty());
    }

    #[test]
    fn test_five_hops_exceed_default_by_one() {
        let org = chain_org(6);
        let issues = ReportingDepthAnalyzer::default().analyze(&org);
        assert_eq!(issues.len(), 1);
        let issue = &issues[0];
        assert_eq!(issue.employee.id, EmployeeId::new(6));
        assert_eq!(issue.actual_depth, 5);
        assert_eq!(issue.excess_depth, 1);
        // Chain: managers 5, 4, 3, 2 - the root (1) is excluded.
        assert_eq!(issue.reporting_chain.len(), 4);
        assert_eq!(issue.reporting_chain[0].id, EmployeeId::new(5));
        assert_eq!(issue.reporting_chain[3].id, EmployeeId::new(2));
    }

    #[test]
    fn test_root_never_appears_in_any_issue() {
        let org = chain_org(8);
        let issues = ReportingDepthAnalyzer::default().analyze(&org);
        assert!(!issues.is_empty());
        for issue in &issues {
            assert_ne!(issue.employee.id, EmployeeId::new(1));
            assert!(issue
                .reporting_chain
                .iter()
                .all(|link| link.id != EmployeeId::new(1)));
        }
    }

    #[test]
    fn test_custom_max_depth() {
        let org = chain_org(4);
        let issues = ReportingDepthAnalyzer::new(DepthPolicy::new(2)).analyze(&org);
        // Employee 4 is at depth 3.
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].max_allowed_depth, 2);
        assert_eq!(issues[0].excess_depth, 1);
    }
}
