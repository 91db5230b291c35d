use serde::{Deserialize, Serialize};

use crate::issue::{Issue, ReportingDepthIssue, SalaryDirection, SalaryIssue};

/// Aggregated result of running every analyzer over one organization.
///
/// Salary issues are partitioned into underpaid/overpaid buckets once at
/// construction, so the split is free for every consumer afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    underpaid_managers: Vec<SalaryIssue>,
    overpaid_managers: Vec<SalaryIssue>,
    reporting_depth_issues: Vec<ReportingDepthIssue>,
    total_employees: usize,
    total_managers: usize,
}

impl AnalysisReport {
    pub fn new(
        salary_issues: Vec<SalaryIssue>,
        reporting_depth_issues: Vec<ReportingDepthIssue>,
        total_employees: usize,
        total_managers: usize,
    ) -> Self {
        let mut underpaid = Vec::new();
        let mut overpaid = Vec::new();
        for issue in salary_issues {
            match issue.direction {
                SalaryDirection::Underpaid => underpaid.push(issue),
                SalaryDirection::Overpaid => overpaid.push(issue),
            }
        }
        Self {
            underpaid_managers: underpaid,
            overpaid_managers: overpaid,
            reporting_depth_issues,
            total_employees,
            total_managers,
        }
    }

    /// Managers earning below the acceptable band.
    pub fn underpaid_managers(&self) -> &[SalaryIssue] {
        &self.underpaid_managers
    }

    /// Managers earning above the acceptable band.
    pub fn overpaid_managers(&self) -> &[SalaryIssue] {
        &self.overpaid_managers
    }

    /// All salary issues, underpaid first.
    pub fn salary_issues(&self) -> Vec<&SalaryIssue> {
        self.underpaid_managers
            .iter()
            .chain(self.overpaid_managers.iter())
            .collect()
    }

    /// Employees with a reporting line longer than allowed.
    pub fn reporting_depth_issues(&self) -> &[ReportingDepthIssue] {
        &self.reporting_depth_issues
    }

    /// Every finding as the tagged [`Issue`] sum, salary issues first.
    pub fn issues(&self) -> Vec<Issue> {
        self.underpaid_managers
            .iter()
            .chain(self.overpaid_managers.iter())
            .cloned()
            .map(Issue::Salary)
            .chain(
                self.reporting_depth_issues
                    .iter()
                    .cloned()
                    .map(Issue::Depth),
            )
            .collect()
    }

    pub fn total_employees(&self) -> usize {
        self.total_employees
    }

    /// Employees with at least one direct subordinate.
    pub fn total_managers(&self) -> usize {
        self.total_managers
    }

    pub fn has_issues(&self) -> bool {
        !self.underpaid_managers.is_empty()
            || !self.overpaid_managers.is_empty()
            || !self.reporting_depth_issues.is_empty()
    }

    pub fn total_issue_count(&self) -> usize {
        self.underpaid_managers.len()
            + self.overpaid_managers.len()
            + self.reporting_depth_issues.len()
    }
}
