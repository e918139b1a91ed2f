//! Project Analyzer - the validation-and-scoring pipeline.

use super::{
    AnalysisError, AnalysisResult, Ranker, RawTable, RowParser, SchemaValidator, ScoredProject,
};

/// Accepted upload extension, compared case-insensitively.
pub const ACCEPTED_EXTENSION: &str = "csv";

/// Returns true when the file name ends in `.csv` (any case).
pub fn has_accepted_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, extension)| extension.eq_ignore_ascii_case(ACCEPTED_EXTENSION))
        .unwrap_or(false)
}

/// Stateless pipeline over one table.
pub struct ProjectAnalyzer;

impl ProjectAnalyzer {
    /// Runs schema validation, row validation, scoring, and ranking.
    ///
    /// # Errors
    ///
    /// Stops at the first failing stage:
    /// - `EmptyFile` when there is no header row
    /// - `MissingColumns` listing every absent required column
    /// - `NoDataRows` when the header is valid but no rows follow
    /// - `RowValidation` listing every bad field of every row
    pub fn analyze(table: &RawTable) -> Result<AnalysisResult, AnalysisError> {
        if !table.has_header() {
            return Err(AnalysisError::EmptyFile);
        }

        let layout = SchemaValidator::validate(table)?;

        if table.record_count() == 0 {
            return Err(AnalysisError::NoDataRows);
        }

        let projects = RowParser::parse_all(&table.records, &layout)?;
        let scored = projects.into_iter().map(ScoredProject::evaluate).collect();

        Ok(Ranker::rank(scored))
    }
}
