use orglens_model::{AnalysisReport, Organization};

use crate::depth::ReportingDepthAnalyzer;
use crate::policy::{DepthPolicy, SalaryPolicy};
use crate::salary::SalaryAnalyzer;

/// Runs every analyzer over one validated organization and packages the
/// combined report.
pub struct OrganizationAnalyzer {
    salary: SalaryAnalyzer,
    depth: ReportingDepthAnalyzer,
}

impl OrganizationAnalyzer {
    pub fn new(salary_policy: SalaryPolicy, depth_policy: DepthPolicy) -> Self {
        Self {
            salary: SalaryAnalyzer::new(salary_policy),
            depth: ReportingDepthAnalyzer::new(depth_policy),
        }
    }

    /// Salary and depth analysis plus summary counts, in one pass over the
    /// same employee set. Assumes the hierarchy has been built.
    pub fn analyze(&self, org: &Organization) -> AnalysisReport {
        let salary_issues = self.salary.analyze(org);
        let depth_issues = self.depth.analyze(org);
        let manager_count = org.employees().filter(|e| e.is_manager()).count();

        tracing::debug!(
            employees = org.len(),
            managers = manager_count,
            salary_issues = salary_issues.len(),
            depth_issues = depth_issues.len(),
            "Analysis complete"
        );

        AnalysisReport::new(salary_issues, depth_issues, org.len(), manager_count)
    }
}

impl Default for OrganizationAnalyzer {
    fn default() -> Self {
        Self::new(SalaryPolicy::default(), DepthPolicy::default())
    }
}
