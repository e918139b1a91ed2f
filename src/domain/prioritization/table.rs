//! Raw tabular input as read from an uploaded file.

/// Header row plus data records, untyped.
///
/// Cells are kept as text until the row parser validates them. Records may
/// be shorter than the header; missing trailing cells read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl RawTable {
    /// Creates a table from a header row and its records.
    pub fn new(headers: Vec<String>, records: Vec<Vec<String>>) -> Self {
        Self { headers, records }
    }

    /// Returns true when the file had no header row at all.
    pub fn has_header(&self) -> bool {
        self.headers.iter().any(|h| !h.is_empty())
    }

    /// Returns the number of data records.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Returns the position of a column in the header row.
    ///
    /// A repeated header name resolves to its last occurrence, so a later
    /// column overrides an earlier one of the same name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().rposition(|h| h == name)
    }
}
