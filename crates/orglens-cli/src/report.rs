//! Report sink: renders the aggregated analysis result.
//!
//! The text layout mirrors what people read in a terminal: banner, summary
//! counts, one section per issue kind with its configured constraint, and a
//! closing line that differs when issues were found. The JSON mode emits
//! the `AnalysisReport` verbatim for machine consumers.

use std::io::{self, Write};

use orglens_analyze::{DepthPolicy, SalaryPolicy};
use orglens_model::{AnalysisReport, Organization, ReportingDepthIssue, SalaryDirection, SalaryIssue};

/// How the report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sectioned text.
    Text,
    /// The analysis report as pretty-printed JSON.
    Json,
}

/// Renders an [`AnalysisReport`] to any writer.
pub struct ReportPrinter {
    salary: SalaryPolicy,
    depth: DepthPolicy,
}

impl ReportPrinter {
    pub fn new(salary: SalaryPolicy, depth: DepthPolicy) -> Self {
        Self { salary, depth }
    }

    pub fn print<W: Write>(
        &self,
        out: &mut W,
        report: &AnalysisReport,
        org: &Organization,
        format: OutputFormat,
    ) -> io::Result<()> {
        match format {
            OutputFormat::Text => self.print_text(out, report, org),
            OutputFormat::Json => self.print_json(out, report),
        }
    }

    /// The full sectioned text report.
    pub fn print_text<W: Write>(
        &self,
        out: &mut W,
        report: &AnalysisReport,
        org: &Organization,
    ) -> io::Result<()> {
        self.print_header(out)?;
        self.print_summary(out, report)?;
        self.print_salary_section(
            out,
            "MANAGERS WHO EARN LESS THAN THEY SHOULD",
            "at least",
            self.salary.min_percent(),
            report.underpaid_managers(),
        )?;
        self.print_salary_section(
            out,
            "MANAGERS WHO EARN MORE THAN THEY SHOULD",
            "no more than",
            self.salary.max_percent(),
            report.overpaid_managers(),
        )?;
        self.print_depth_section(out, report, org)?;
        self.print_footer(out, report)
    }

    /// The report as pretty-printed JSON.
    pub fn print_json<W: Write>(&self, out: &mut W, report: &AnalysisReport) -> io::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(out, "{json}")
    }

    fn print_header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", separator())?;
        writeln!(out, "        EMPLOYEE ORGANIZATIONAL STRUCTURE ANALYSIS REPORT")?;
        writeln!(out, "{}", separator())?;
        writeln!(out)
    }

    fn print_summary<W: Write>(&self, out: &mut W, report: &AnalysisReport) -> io::Result<()> {
        writeln!(out, "SUMMARY")?;
        writeln!(out, "{}", section_separator())?;
        writeln!(out, "Total employees analyzed: {}", report.total_employees())?;
        writeln!(out, "Total managers: {}", report.total_managers())?;
        writeln!(out, "Issues found: {}", report.total_issue_count())?;
        writeln!(out)
    }

    fn print_salary_section<W: Write>(
        &self,
        out: &mut W,
        title: &str,
        constraint: &str,
        percent: i64,
        issues: &[SalaryIssue],
    ) -> io::Result<()> {
        writeln!(out, "{title}")?;
        writeln!(out, "{}", section_separator())?;
        writeln!(
            out,
            "(Managers should earn {constraint} {percent}% more than their direct subordinates' average)"
        )?;
        writeln!(out)?;

        if issues.is_empty() {
            writeln!(out, "  No issues found.")?;
        } else {
            for issue in issues {
                self.print_salary_issue(out, issue)?;
            }
        }
        writeln!(out)
    }

    fn print_salary_issue<W: Write>(&self, out: &mut W, issue: &SalaryIssue) -> io::Result<()> {
        writeln!(out, "  • {} (ID: {})", issue.manager.name, issue.manager.id)?;
        writeln!(out, "      Current salary: ${:.2}", issue.current_salary)?;
        writeln!(
            out,
            "      Subordinates' average: ${:.2}",
            issue.subordinates_average
        )?;
        writeln!(
            out,
            "      Expected range: ${:.2} - ${:.2}",
            issue.expected_min, issue.expected_max
        )?;
        match issue.direction {
            SalaryDirection::Underpaid => {
                writeln!(out, "      Underpaid by: ${:.2}", issue.difference)?
            }
            SalaryDirection::Overpaid => {
                writeln!(out, "      Overpaid by: ${:.2}", issue.difference)?
            }
        }
        writeln!(out)
    }

    fn print_depth_section<W: Write>(
        &self,
        out: &mut W,
        report: &AnalysisReport,
        org: &Organization,
    ) -> io::Result<()> {
        writeln!(out, "EMPLOYEES WITH REPORTING LINE TOO LONG")?;
        writeln!(out, "{}", section_separator())?;
        writeln!(
            out,
            "(Maximum allowed: {} managers between employee and CEO)",
            self.depth.max_depth
        )?;
        writeln!(out)?;

        let issues = report.reporting_depth_issues();
        if issues.is_empty() {
            writeln!(out, "  No issues found.")?;
        } else {
            let root_name = org.root().map(|root| root.full_name());
            for issue in issues {
                self.print_depth_issue(out, issue, root_name.as_deref())?;
            }
        }
        writeln!(out)
    }

    fn print_depth_issue<W: Write>(
        &self,
        out: &mut W,
        issue: &ReportingDepthIssue,
        root_name: Option<&str>,
    ) -> io::Result<()> {
        writeln!(out, "  • {} (ID: {})", issue.employee.name, issue.employee.id)?;
        writeln!(
            out,
            "      Reporting line depth: {} (exceeds by {})",
            issue.actual_depth, issue.excess_depth
        )?;
        write!(out, "      Chain: {}", issue.employee.name)?;
        for manager in &issue.reporting_chain {
            write!(out, " → {}", manager.name)?;
        }
        // The chain stops short of the root; close the line with it.
        match root_name {
            Some(name) => writeln!(out, " → {name} (CEO)")?,
            None => writeln!(out, " (CEO)")?,
        }
        writeln!(out)
    }

    fn print_footer<W: Write>(&self, out: &mut W, report: &AnalysisReport) -> io::Result<()> {
        writeln!(out, "{}", separator())?;
        if report.has_issues() {
            writeln!(out, "Analysis complete. Please review the issues above.")?;
        } else {
            writeln!(
                out,
                "Analysis complete. No issues found in the organizational structure."
            )?;
        }
        writeln!(out, "{}", separator())?;
        writeln!(out)
    }
}

impl Default for ReportPrinter {
    fn default() -> Self {
        Self::new(SalaryPolicy::default(), DepthPolicy::default())
    }
}

fn separator() -> String {
    "═".repeat(70)
}

fn section_separator() -> String {
    "─".repeat(70)
}
