//! OrgLens model - employees, the indexed organization, issues, reports
//!
//! The entity layer of the analyzer:
//! - [`Employee`]/[`EmployeeId`]: hierarchy nodes whose links are IDs into
//!   the organization's owning table
//! - [`Organization`]: the table itself, plus the hierarchy build that
//!   resolves manager references into bidirectional links
//! - [`Issue`] and its variants: the closed sum of analyzer findings
//! - [`AnalysisReport`]: the aggregated analysis result

pub mod constants;
pub mod employee;
pub mod issue;
pub mod organization;
pub mod report;

pub use constants::*;
pub use employee::{Employee, EmployeeId};
pub use issue::{EmployeeRef, Issue, ReportingDepthIssue, SalaryDirection, SalaryIssue};
pub use organization::{DepthAndChain, Organization};
pub use report::AnalysisReport;
