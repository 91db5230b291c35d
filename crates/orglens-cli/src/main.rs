//! CLI binary entry point for the OrgLens analyzer.
//!
//! Usage:
//!   orglens <CSV> [OPTIONS]
//!
//! Options:
//!   -c, --config <FILE>       Path to configuration TOML file
//!   -f, --format <FORMAT>     Report format: text (default) or json
//!   --min-multiplier <FACTOR> Override the minimum salary multiplier
//!   --max-multiplier <FACTOR> Override the maximum salary multiplier
//!   --max-depth <HOPS>        Override the maximum reporting depth
//!   -v, --verbose             Increase logging verbosity
//!
//! Exit codes: 0 = ok, 1 = bad input path, 2 = read/parse error,
//! 3 = validation failed, 4 = unexpected.

use std::path::PathBuf;

use clap::Parser;

use orglens_cli::config::AnalyzerConfig;
use orglens_cli::report::OutputFormat;
use orglens_cli::{exit, run, RunOptions};

/// OrgLens - analyze an employee CSV for salary-band and reporting-depth issues.
#[derive(Parser, Debug)]
#[command(name = "orglens")]
#[command(about = "Analyzes employee organizational structure for salary and reporting-line issues")]
#[command(version)]
struct Cli {
    /// Path to the employee CSV (Id,firstName,lastName,salary,managerId;
    /// the CEO row leaves managerId empty).
    #[arg(value_name = "CSV")]
    csv: PathBuf,

    /// Path to configuration TOML file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report output format.
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Override the minimum salary multiplier (e.g., 1.2).
    #[arg(long, value_name = "FACTOR")]
    min_multiplier: Option<f64>,

    /// Override the maximum salary multiplier (e.g., 1.5).
    #[arg(long, value_name = "FACTOR")]
    max_multiplier: Option<f64>,

    /// Override the maximum reporting depth.
    #[arg(long, value_name = "HOPS")]
    max_depth: Option<u32>,

    /// Increase logging verbosity (can be repeated: -v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    // Load configuration.
    let mut config = AnalyzerConfig::load(cli.config.as_deref());

    // Apply CLI overrides.
    if let Some(min) = cli.min_multiplier {
        config.salary.min_multiplier = min;
    }
    if let Some(max) = cli.max_multiplier {
        config.salary.max_multiplier = max;
    }
    if let Some(depth) = cli.max_depth {
        config.reporting.max_depth = depth;
    }

    // Adjust log level based on verbosity.
    let log_level = match cli.verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };

    // Initialize logging. The report owns stdout; logs go to stderr.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        csv = %cli.csv.display(),
        format = ?cli.format,
        min_multiplier = config.salary.min_multiplier,
        max_multiplier = config.salary.max_multiplier,
        max_depth = config.reporting.max_depth,
        "Starting OrgLens analysis"
    );

    let options = RunOptions {
        csv: cli.csv,
        format: cli.format,
    };

    let code = match run(
        &options,
        &config,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    ) {
        Ok(_) => exit::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            error.exit_code()
        }
    };
    std::process::exit(code);
}
