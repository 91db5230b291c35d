//! OrgLens CLI - the pipeline wiring around the core crates
//!
//! Read a CSV of employee records, validate the structure, build the
//! hierarchy, run the analyzers, and render the report:
//!
//! records -> uniqueness check -> indexed organization -> reference/root/
//! cycle checks -> hierarchy build -> analyzers -> report
//!
//! Validation failures halt the pipeline before analysis: the full error
//! list goes to stderr and the run fails with a distinct exit code.

pub mod config;
pub mod exit;
pub mod reader;
pub mod report;

use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;

use orglens_analyze::OrganizationAnalyzer;
use orglens_model::AnalysisReport;
use orglens_validate::validate_and_index;

use crate::config::AnalyzerConfig;
use crate::reader::{CsvEmployeeReader, ReadError};
use crate::report::{OutputFormat, ReportPrinter};

/// Pipeline failure, mapped onto a process exit code by the binary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Input file not found or not a regular file: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Read(#[from] ReadError),

    #[error("Found {0} validation error(s) in the input data")]
    Validation(usize),

    #[error("Failed to write report: {0}")]
    Report(#[from] std::io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidInput(_) => exit::INVALID_INPUT,
            AppError::Read(_) => exit::READ_ERROR,
            AppError::Validation(_) => exit::VALIDATION_FAILURE,
            AppError::Report(_) => exit::UNEXPECTED,
        }
    }
}

/// What one invocation runs on.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub csv: PathBuf,
    pub format: OutputFormat,
}

/// The whole pipeline: read -> validate -> build -> analyze -> print.
///
/// The report goes to `out`; validation error listings go to `err`. Returns
/// the analysis report so callers (and tests) can inspect it beyond the
/// rendered output.
pub fn run<W: Write, E: Write>(
    options: &RunOptions,
    config: &AnalyzerConfig,
    out: &mut W,
    err: &mut E,
) -> Result<AnalysisReport, AppError> {
    if !options.csv.is_file() {
        return Err(AppError::InvalidInput(options.csv.display().to_string()));
    }

    tracing::info!(path = %options.csv.display(), "Reading employee records");
    let employees = CsvEmployeeReader.read_employees(&options.csv)?;
    tracing::info!(count = employees.len(), "Loaded employee records");

    let (mut org, errors) = validate_and_index(employees);
    if !errors.is_empty() {
        writeln!(err, "Validation errors found:")?;
        for error in &errors {
            writeln!(err, "  [{}] {}", error.code(), error)?;
        }
        return Err(AppError::Validation(errors.len()));
    }

    org.build_hierarchy();

    let analyzer = OrganizationAnalyzer::new(config.salary_policy(), config.depth_policy());
    let report = analyzer.analyze(&org);
    for issue in report.issues() {
        tracing::debug!(kind = issue.headline(), finding = %issue, "Analysis finding");
    }

    let printer = ReportPrinter::new(config.salary_policy(), config.depth_policy());
    printer.print(out, &report, &org, options.format)?;

    Ok(report)
}
