//! Table Reader Port - tabular file decoding interface.
//!
//! The domain works on a `RawTable`; adapters (like `CsvTableReader`) turn
//! uploaded bytes into one.

use thiserror::Error;

use crate::domain::prioritization::{AnalysisError, RawTable};

/// Port for decoding uploaded file contents.
///
/// # Contract
///
/// Implementations must:
/// - Return an empty header row for an empty file rather than failing
/// - Trim surrounding whitespace from header names and cells
/// - Keep records in file order
/// - Tolerate records shorter or longer than the header row
pub trait TableReader: Send + Sync {
    /// Decodes the full file contents into a header row and records.
    ///
    /// # Errors
    ///
    /// Returns `TableReadError` when the bytes are not text or not
    /// parseable as a table at all.
    fn read_table(&self, contents: &[u8]) -> Result<RawTable, TableReadError>;
}

/// Errors raised while decoding a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableReadError {
    /// Contents are not valid UTF-8.
    #[error("File is not valid UTF-8")]
    NotUtf8,

    /// Contents could not be split into records.
    #[error("Malformed table: {0}")]
    Malformed(String),
}

impl From<TableReadError> for AnalysisError {
    fn from(error: TableReadError) -> Self {
        match error {
            TableReadError::NotUtf8 => AnalysisError::UnreadableFile,
            TableReadError::Malformed(reason) => AnalysisError::MalformedCsv(reason),
        }
    }
}
