//! CSV table reader adapter.
//!
//! Decodes an uploaded CSV file into a `RawTable`. Accepts an optional
//! UTF-8 byte order mark, trims whitespace around every cell, skips blank
//! lines, and tolerates ragged rows.

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::domain::prioritization::RawTable;
use crate::ports::{TableReadError, TableReader};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// `csv`-crate implementation of TableReader.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvTableReader;

impl CsvTableReader {
    /// Creates a new CSV table reader.
    pub fn new() -> Self {
        Self
    }

    fn to_cells(record: &StringRecord) -> Vec<String> {
        record.iter().map(str::to_string).collect()
    }
}

impl TableReader for CsvTableReader {
    fn read_table(&self, contents: &[u8]) -> Result<RawTable, TableReadError> {
        let contents = contents.strip_prefix(UTF8_BOM).unwrap_or(contents);
        let text = std::str::from_utf8(contents).map_err(|_| TableReadError::NotUtf8)?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| TableReadError::Malformed(e.to_string()))?;
        let headers = Self::to_cells(headers);

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| TableReadError::Malformed(e.to_string()))?;
            records.push(Self::to_cells(&record));
        }

        tracing::debug!(
            columns = headers.len(),
            records = records.len(),
            "Decoded CSV table"
        );

        Ok(RawTable::new(headers, records))
    }
}
