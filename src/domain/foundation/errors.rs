//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur while turning a raw cell into a typed value.
///
/// The display text is what ends up in the row-level report, prefixed by
/// the row number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("'{field}' is missing or empty.")]
    EmptyField { field: String },

    #[error("'{field}' must be a number (got '{raw}').")]
    InvalidNumber { field: String, raw: String },

    #[error("'{field}' must be between {min} and {max} (got {actual}).")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a non-numeric value validation error.
    pub fn invalid_number(field: impl Into<String>, raw: impl Into<String>) -> Self {
        ValidationError::InvalidNumber {
            field: field.into(),
            raw: raw.into(),
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::InvalidNumber { field, .. }
            | ValidationError::OutOfRange { field, .. } => field,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Upload errors
    NoFile,
    InvalidFileFormat,
    FileTooLarge,

    // Content errors
    EmptyFile,
    UnreadableFile,
    MalformedCsv,

    // Validation errors
    MissingColumns,
    NoDataRows,
    RowValidationFailed,

    // Infrastructure errors
    InternalError,
}

impl ErrorCode {
    /// Returns the wire representation of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NoFile => "NO_FILE",
            ErrorCode::InvalidFileFormat => "INVALID_FILE_FORMAT",
            ErrorCode::FileTooLarge => "FILE_TOO_LARGE",
            ErrorCode::EmptyFile => "EMPTY_FILE",
            ErrorCode::UnreadableFile => "UNREADABLE_FILE",
            ErrorCode::MalformedCsv => "MALFORMED_CSV",
            ErrorCode::MissingColumns => "MISSING_COLUMNS",
            ErrorCode::NoDataRows => "NO_DATA_ROWS",
            ErrorCode::RowValidationFailed => "ROW_VALIDATION_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
