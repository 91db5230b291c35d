//! Process exit codes for the `orglens` binary.

pub const SUCCESS: i32 = 0;
/// The input path is not a readable file.
pub const INVALID_INPUT: i32 = 1;
/// The CSV could not be read or parsed.
pub const READ_ERROR: i32 = 2;
/// Validation found structural defects; no report was produced.
pub const VALIDATION_FAILURE: i32 = 3;
/// Anything else (report I/O and the like).
pub const UNEXPECTED: i32 = 4;
