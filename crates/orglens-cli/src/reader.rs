//! CSV record source.
//!
//! Expects `Id,firstName,lastName,salary,managerId` with a header line
//! (skipped). An empty managerId column marks the root candidate. Malformed
//! lines are rejected here with their line number; structural problems
//! across records (duplicates, dangling references, cycles) are the
//! validators' concern, not the reader's.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use orglens_model::Employee;

const EXPECTED_COLUMNS: usize = 5;

/// Failure reading or parsing the employee CSV.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Failed to read employee file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Empty CSV file")]
    EmptyFile,

    #[error("No employee data found in file")]
    NoRecords,

    #[error("Error parsing line {line}: {content} - {reason}")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },
}

/// Reads employee records from a delimited file, in file order.
pub struct CsvEmployeeReader;

impl CsvEmployeeReader {
    /// Parse the CSV at `path`. Empty lines are skipped; any malformed
    /// line fails the whole read.
    pub fn read_employees(&self, path: &Path) -> Result<Vec<Employee>, ReadError> {
        let file = File::open(path)?;
        let mut lines = BufReader::new(file).lines();

        let Some(header) = lines.next() else {
            return Err(ReadError::EmptyFile);
        };
        header?;

        let mut employees = Vec::new();
        let mut line_number = 1; // header is line 1
        for line in lines {
            let line = line?;
            line_number += 1;
            if line.trim().is_empty() {
                continue;
            }
            employees.push(parse_line(&line, line_number)?);
        }

        if employees.is_empty() {
            return Err(ReadError::NoRecords);
        }

        tracing::debug!(count = employees.len(), "Parsed employee records");
        Ok(employees)
    }
}

fn parse_line(line: &str, line_number: usize) -> Result<Employee, ReadError> {
    let fail = |reason: String| ReadError::Parse {
        line: line_number,
        content: line.to_string(),
        reason,
    };

    // split keeps trailing empty fields, so an empty managerId column
    // still counts.
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != EXPECTED_COLUMNS {
        return Err(fail(format!(
            "expected {EXPECTED_COLUMNS} columns but found {}",
            parts.len()
        )));
    }

    let id: u32 = parts[0]
        .trim()
        .parse()
        .map_err(|_| fail(format!("invalid employee ID '{}'", parts[0].trim())))?;
    if id == 0 {
        return Err(fail("employee ID must be positive".to_string()));
    }

    let first_name = parts[1].trim();
    if first_name.is_empty() {
        return Err(fail("first name cannot be empty".to_string()));
    }
    let last_name = parts[2].trim();
    if last_name.is_empty() {
        return Err(fail("last name cannot be empty".to_string()));
    }

    let salary: f64 = parts[3]
        .trim()
        .parse()
        .map_err(|_| fail(format!("invalid salary '{}'", parts[3].trim())))?;
    if salary < 0.0 {
        return Err(fail("salary cannot be negative".to_string()));
    }

    let manager_raw = parts[4].trim();
    let manager_id = if manager_raw.is_empty() {
        None
    } else {
        let mid: u32 = manager_raw
            .parse()
            .map_err(|_| fail(format!("invalid manager ID '{manager_raw}'")))?;
        if mid == 0 {
            return Err(fail("manager ID must be positive".to_string()));
        }
        Some(mid)
    };

    Ok(Employee::new(id, first_name, last_name, salary, manager_id))
}
