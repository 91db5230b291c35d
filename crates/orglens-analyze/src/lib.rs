//! OrgLens analysis - business rules over a validated hierarchy
//!
//! Two independent, read-only analyzers and their aggregator:
//! - [`SalaryAnalyzer`]: managers compensated outside the configured band
//!   around their direct reports' average
//! - [`ReportingDepthAnalyzer`]: employees with a reporting line to the
//!   root longer than allowed
//! - [`OrganizationAnalyzer`]: runs both and packages an
//!   [`AnalysisReport`](orglens_model::AnalysisReport)
//!
//! Both analyzers assume the organization has passed validation and had
//! its hierarchy built; results are in input order.

pub mod analyzer;
pub mod depth;
pub mod policy;
pub mod salary;

pub use analyzer::OrganizationAnalyzer;
pub use depth::ReportingDepthAnalyzer;
pub use policy::{DepthPolicy, SalaryPolicy};
pub use salary::SalaryAnalyzer;
