//! Error types for tabsum.

use thiserror::Error;

/// All errors produced by tabsum operations.
///
/// Validation errors fail the whole summarization call; there is no
/// partial or best-effort output. Empty subgroups and undefined
/// statistics (NaN std on a single-row subgroup) are values, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    /// A requested group or feature column does not exist in the frame.
    #[error("column '{name}' not found")]
    ColumnNotFound { name: String },
    /// A continuous summary was requested over a non-numeric column.
    #[error("column '{column}' is not numeric")]
    NonNumericColumn { column: String },
    /// Column length does not match the frame's row count.
    #[error("expected {expected} rows, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    /// Unrecognized style theme name (rendering only).
    #[error("unknown theme '{name}'; valid themes: {valid}")]
    UnknownTheme { name: String, valid: String },
}
