/// Default lower salary multiplier: a manager should earn at least
/// 20% more than the average of their direct subordinates.
pub const DEFAULT_MIN_SALARY_MULTIPLIER: f64 = 1.20;

/// Default upper salary multiplier: a manager should earn no more
/// than 50% above the average of their direct subordinates.
pub const DEFAULT_MAX_SALARY_MULTIPLIER: f64 = 1.50;

/// Default maximum number of managers allowed between an employee
/// and the root of the organization.
pub const DEFAULT_MAX_REPORTING_DEPTH: u32 = 4;
