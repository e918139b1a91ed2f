//! Failures of the prioritization pipeline.

use std::fmt;
use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

use super::schema::required_columns_sorted;

/// A validation failure tied to one data row.
///
/// Row numbers are 1-based and count data rows only; the header row is not
/// numbered.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub row_number: usize,
    pub error: ValidationError,
}

impl RowError {
    /// Creates a row error.
    pub fn new(row_number: usize, error: ValidationError) -> Self {
        Self { row_number, error }
    }
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}: {}", self.row_number, self.error)
    }
}

/// Terminal failure of one analysis run.
///
/// No variant carries partial results: either every row scores or the run
/// reports why none did.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Invalid file format. Only .csv files are accepted.")]
    InvalidFormat,

    #[error("The uploaded CSV file appears to be empty.")]
    EmptyFile,

    #[error("Unable to read the file. Ensure it is a valid UTF-8 CSV.")]
    UnreadableFile,

    #[error("CSV parsing error: {0}")]
    MalformedCsv(String),

    #[error(
        "Missing required columns: {}. Required columns are: {}.",
        .missing.join(", "),
        required_columns_sorted().join(", ")
    )]
    MissingColumns { missing: Vec<String> },

    #[error("No data rows found in file.")]
    NoDataRows,

    #[error("Validation errors found:\n{}", join_lines(.0))]
    RowValidation(Vec<RowError>),
}

impl AnalysisError {
    /// Returns the error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::InvalidFormat => ErrorCode::InvalidFileFormat,
            AnalysisError::EmptyFile => ErrorCode::EmptyFile,
            AnalysisError::UnreadableFile => ErrorCode::UnreadableFile,
            AnalysisError::MalformedCsv(_) => ErrorCode::MalformedCsv,
            AnalysisError::MissingColumns { .. } => ErrorCode::MissingColumns,
            AnalysisError::NoDataRows => ErrorCode::NoDataRows,
            AnalysisError::RowValidation(_) => ErrorCode::RowValidationFailed,
        }
    }

    /// Returns the row-level errors, empty for file-level failures.
    pub fn row_errors(&self) -> &[RowError] {
        match self {
            AnalysisError::RowValidation(errors) => errors,
            _ => &[],
        }
    }
}

fn join_lines(errors: &[RowError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
