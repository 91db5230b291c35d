//! Analysis findings as a closed, tagged sum type.
//!
//! Consumers branch exhaustively on the issue kind; there is no open
//! hierarchy to downcast. Each variant captures a snapshot of the numbers
//! behind the finding so the report sink needs nothing but the issue itself.

use serde::{Deserialize, Serialize};

use crate::employee::{Employee, EmployeeId};

/// Whether a manager sits below or above the acceptable salary band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryDirection {
    Underpaid,
    Overpaid,
}

/// Identity snapshot of an employee, carried inside issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRef {
    pub id: EmployeeId,
    pub name: String,
}

impl From<&Employee> for EmployeeRef {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.full_name(),
        }
    }
}

/// A manager whose salary falls outside the configured band around their
/// direct subordinates' average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryIssue {
    pub manager: EmployeeRef,
    pub direction: SalaryDirection,
    pub current_salary: f64,
    pub subordinates_average: f64,
    pub expected_min: f64,
    pub expected_max: f64,
    /// Distance from the violated bound; always positive.
    pub difference: f64,
}

impl SalaryIssue {
    pub fn new(
        manager: &Employee,
        direction: SalaryDirection,
        subordinates_average: f64,
        expected_min: f64,
        expected_max: f64,
    ) -> Self {
        let difference = match direction {
            SalaryDirection::Underpaid => expected_min - manager.salary,
            SalaryDirection::Overpaid => manager.salary - expected_max,
        };
        Self {
            manager: EmployeeRef::from(manager),
            direction,
            current_salary: manager.salary,
            subordinates_average,
            expected_min,
            expected_max,
            difference,
        }
    }
}

impl std::fmt::Display for SalaryIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = match self.direction {
            SalaryDirection::Underpaid => "earns less than they should",
            SalaryDirection::Overpaid => "earns more than they should",
        };
        write!(
            f,
            "{} (ID: {}) {} by {:.2}",
            self.manager.name, self.manager.id, verdict, self.difference
        )
    }
}

/// An employee whose reporting line to the root is longer than allowed.
///
/// `reporting_chain` lists the managers strictly between the employee and
/// the root, nearest manager first; the root is not part of the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportingDepthIssue {
    pub employee: EmployeeRef,
    pub actual_depth: u32,
    pub max_allowed_depth: u32,
    pub excess_depth: u32,
    pub reporting_chain: Vec<EmployeeRef>,
}

impl ReportingDepthIssue {
    pub fn new(
        employee: &Employee,
        actual_depth: u32,
        max_allowed_depth: u32,
        reporting_chain: Vec<EmployeeRef>,
    ) -> Self {
        Self {
            employee: EmployeeRef::from(employee),
            actual_depth,
            max_allowed_depth,
            excess_depth: actual_depth - max_allowed_depth,
            reporting_chain,
        }
    }
}

impl std::fmt::Display for ReportingDepthIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (ID: {}) has reporting line too long by {} (depth: {}, max allowed: {})",
            self.employee.name,
            self.employee.id,
            self.excess_depth,
            self.actual_depth,
            self.max_allowed_depth
        )
    }
}

/// Any finding produced by the analyzers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    Salary(SalaryIssue),
    Depth(ReportingDepthIssue),
}

impl Issue {
    /// Section heading under which this issue is reported.
    pub fn headline(&self) -> &'static str {
        match self {
            Issue::Salary(issue) => match issue.direction {
                SalaryDirection::Underpaid => "MANAGERS WHO EARN LESS THAN THEY SHOULD",
                SalaryDirection::Overpaid => "MANAGERS WHO EARN MORE THAN THEY SHOULD",
            },
            Issue::Depth(_) => "EMPLOYEES WITH REPORTING LINE TOO LONG",
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Issue::Salary(issue) => write!(f, "{issue}"),
            Issue::Depth(issue) => write!(f, "{issue}"),
        }
    }
}
