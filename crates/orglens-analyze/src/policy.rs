use serde::{Deserialize, Serialize};

use orglens_model::{
    DEFAULT_MAX_REPORTING_DEPTH, DEFAULT_MAX_SALARY_MULTIPLIER, DEFAULT_MIN_SALARY_MULTIPLIER,
};

/// Acceptable-band configuration for the salary analyzer.
///
/// A manager's salary must land in
/// `[average x min_multiplier, average x max_multiplier]` where the average
/// is over their direct subordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryPolicy {
    pub min_multiplier: f64,
    pub max_multiplier: f64,
}

impl SalaryPolicy {
    pub fn new(min_multiplier: f64, max_multiplier: f64) -> Self {
        Self {
            min_multiplier,
            max_multiplier,
        }
    }

    /// Lower bound as a whole percentage above the average (1.20 -> 20).
    pub fn min_percent(&self) -> i64 {
        ((self.min_multiplier - 1.0) * 100.0).round() as i64
    }

    /// Upper bound as a whole percentage above the average (1.50 -> 50).
    pub fn max_percent(&self) -> i64 {
        ((self.max_multiplier - 1.0) * 100.0).round() as i64
    }
}

impl Default for SalaryPolicy {
    fn default() -> Self {
        Self {
            min_multiplier: DEFAULT_MIN_SALARY_MULTIPLIER,
            max_multiplier: DEFAULT_MAX_SALARY_MULTIPLIER,
        }
    }
}

/// Depth limit for the reporting-depth analyzer: the maximum number of
/// managers allowed between an employee and the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthPolicy {
    pub max_depth: u32,
}

impl DepthPolicy {
    pub fn new(max_depth: u32) -> Self {
        Self { max_depth }
    }
}

impl Default for DepthPolicy {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_REPORTING_DEPTH,
        }
    }
}
