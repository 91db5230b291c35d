//! Salary-band analysis of managers against their direct reports.

use orglens_model::{Employee, Organization, SalaryDirection, SalaryIssue};

use crate::policy::SalaryPolicy;

/// Flags every manager compensated outside the configured multiple of
/// their direct subordinates' average.
///
/// Only direct reports count toward the average; employees without
/// subordinates are skipped entirely. Salaries exactly at either bound are
/// acceptable. Each manager yields at most one issue.
pub struct SalaryAnalyzer {
    policy: SalaryPolicy,
}

impl SalaryAnalyzer {
    pub fn new(policy: SalaryPolicy) -> Self {
        Self { policy }
    }

    /// Check every employee in input order.
    pub fn analyze(&self, org: &Organization) -> Vec<SalaryIssue> {
        org.employees()
            .filter_map(|employee| self.check_manager(org, employee))
            .collect()
    }

    /// Check one manager. `None` if they have no subordinates or their
    /// salary is within the band.
    pub fn check_manager(&self, org: &Organization, manager: &Employee) -> Option<SalaryIssue> {
        if !manager.is_manager() {
            return None;
        }

        let average = org.avg_subordinate_salary(manager.id);
        let expected_min = average * self.policy.min_multiplier;
        let expected_max = average * self.policy.max_multiplier;

        if manager.salary < expected_min {
            return Some(SalaryIssue::new(
                manager,
                SalaryDirection::Underpaid,
                average,
                expected_min,
                expected_max,
            ));
        }
        if manager.salary > expected_max {
            return Some(SalaryIssue::new(
                manager,
                SalaryDirection::Overpaid,
                average,
                expected_min,
                expected_max,
            ));
        }
        None
    }
}

impl Default for SalaryAnalyzer {
    fn default() -> Self {
        Self::new(SalaryPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orglens_model::EmployeeId;

    /// One manager over two reports averaging 50,000.
    fn org_with_manager_salary(salary: f64) -> Organization {
        let mut org = Organization::from_employees(vec![
            Employee::new(1, "Mid", "Manager", salary, None),
            Employee::new(2, "First", "Report", 45_000.0, Some(1)),
            Employee::new(3, "Second", "Report", 55_000.0, Some(1)),
        ]);
        org.build_hierarchy();
        org
    }

    #[test]
    fn test_salary_at_lower_bound_is_acceptable() {
        let org = org_with_manager_salary(60_000.0);
        assert!(SalaryAnalyzer::default().analyze(&org).is_empty());
    }

    #[test]
    fn test_salary_at_upper_bound_is_acceptable() {
        let org = org_with_manager_salary(75_000.0);
        assert!(SalaryAnalyzer::default().analyze(&org).is_empty());
    }

    #[test]
    fn test_one_below_lower_bound_is_underpaid_by_one() {
        let org = org_with_manager_salary(59_999.0);
        let issues = SalaryAnalyzer::default().analyze(&org);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].direction, SalaryDirection::Underpaid);
        assert!((issues[0].difference - 1.0).abs() < 1e-9);
        assert_eq!(issues[0].manager.id, EmployeeId::new(1));
    }

    #[test]
    fn test_one_above_upper_bound_is_overpaid_by_one() {
        let org = org_with_manager_salary(75_001.0);
        let issues = SalaryAnalyzer::default().analyze(&org);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].direction, SalaryDirection::Overpaid);
        assert!((issues[0].difference - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_managers_are_skipped() {
        let org = org_with_manager_salary(60_000.0);
        let leaf = org.get(EmployeeId::new(2)).unwrap();
        assert!(SalaryAnalyzer::default().check_manager(&org, leaf).is_none());
    }

    #[test]
    fn test_average_counts_only_direct_reports() {
        // 1 manages 2; 2 manages 3. Employee 3's salary must not leak into
        // 1's average.
        let mut org = Organization::from_employees(vec![
            Employee::new(1, "Top", "Boss", 120_000.0, None),
            Employee::new(2, "Mid", "Manager", 100_000.0, Some(1)),
            Employee::new(3, "Low", "Worker", 10_000.0, Some(2)),
        ]);
        org.build_hierarchy();
        let analyzer = SalaryAnalyzer::default();
        let top = org.get(EmployeeId::new(1)).unwrap();
        let issue = analyzer.check_manager(&org, top).expect("flagged");
        assert_eq!(issue.subordinates_average, 100_000.0);
    }
}
