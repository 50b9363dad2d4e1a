//! Error handling
//!
//! Only schema and data-volume failures stop a run. Field coercion problems
//! and undefined metrics are absorbed where they happen (see `features`).

use thiserror::Error;

pub type InsightResult<T> = Result<T, InsightError>;

#[derive(Debug, Error)]
pub enum InsightError {
    // Validation errors (user facing)
    #[error("CSV must have column: {column}")]
    MissingColumn { column: String },

    #[error("Need at least {required} valid students, found {valid}.")]
    InsufficientData { valid: usize, required: usize },

    #[error("Input table is empty: no header row found")]
    EmptyInput,

    // Boundary errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Student {index} not found (valid range 0 to {max})")]
    StudentNotFound { index: usize, max: usize },
}

impl InsightError {
    /// True for failures caused by the uploaded table itself
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            InsightError::MissingColumn { .. }
                | InsightError::InsufficientData { .. }
                | InsightError::EmptyInput
        )
    }

    /// Short machine readable code
    pub fn code(&self) -> &'static str {
        match self {
            InsightError::MissingColumn { .. } | InsightError::EmptyInput => "schema_error",
            InsightError::InsufficientData { .. } => "insufficient_data",
            InsightError::Io(_) => "io_error",
            InsightError::Csv(_) => "csv_error",
            InsightError::Json(_) => "json_error",
            InsightError::StudentNotFound { .. } => "student_not_found",
        }
    }
}
