//! Row Parser & Range Validator - typed parse of every data row.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ScoreValue, ValidationError};

use super::schema::{
    ColumnLayout, COST_COLUMN, EFFORT_COLUMN, IMPACT_COLUMN, PROJECT_NAME_COLUMN, URGENCY_COLUMN,
};
use super::{AnalysisError, RowError};

/// One data row with the required cells picked out, still untyped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow<'a> {
    pub name: &'a str,
    pub impact: &'a str,
    pub urgency: &'a str,
    pub effort: &'a str,
    pub cost: &'a str,
}

impl<'a> RawRow<'a> {
    /// Picks the required cells out of a record. Absent cells read as empty.
    pub fn from_record(record: &'a [String], layout: &ColumnLayout) -> Self {
        let cell = move |index: usize| record.get(index).map(String::as_str).unwrap_or("");
        Self {
            name: cell(layout.name),
            impact: cell(layout.impact),
            urgency: cell(layout.urgency),
            effort: cell(layout.effort),
            cost: cell(layout.cost),
        }
    }
}

/// A row whose name is present and whose four scores are all within [1, 5].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedProject {
    pub name: String,
    pub impact: ScoreValue,
    pub urgency: ScoreValue,
    pub effort: ScoreValue,
    pub cost: ScoreValue,
}

/// Collects per-field parse outcomes for one row.
struct FieldCollector {
    row_number: usize,
    errors: Vec<RowError>,
}

impl FieldCollector {
    fn score(&mut self, field: &str, raw: &str) -> Option<ScoreValue> {
        match ScoreValue::parse(field, raw) {
            Ok(value) => Some(value),
            Err(error) => {
                self.errors.push(RowError::new(self.row_number, error));
                None
            }
        }
    }

    fn name(&mut self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.errors.push(RowError::new(
                self.row_number,
                ValidationError::empty_field(PROJECT_NAME_COLUMN),
            ));
            return None;
        }
        Some(trimmed.to_string())
    }
}

/// Row validation and conversion.
pub struct RowParser;

impl RowParser {
    /// Validates a single row.
    ///
    /// Every malformed field contributes its own error; parsing does not stop
    /// at the first bad cell.
    pub fn parse_row(row_number: usize, row: &RawRow<'_>) -> Result<ValidatedProject, Vec<RowError>> {
        let mut fields = FieldCollector {
            row_number,
            errors: Vec::new(),
        };

        let impact = fields.score(IMPACT_COLUMN, row.impact);
        let urgency = fields.score(URGENCY_COLUMN, row.urgency);
        let effort = fields.score(EFFORT_COLUMN, row.effort);
        let cost = fields.score(COST_COLUMN, row.cost);
        let name = fields.name(row.name);

        match (name, impact, urgency, effort, cost) {
            (Some(name), Some(impact), Some(urgency), Some(effort), Some(cost)) => {
                Ok(ValidatedProject {
                    name,
                    impact,
                    urgency,
                    effort,
                    cost,
                })
            }
            _ => Err(fields.errors),
        }
    }

    /// Validates every record, numbering rows from 1.
    ///
    /// Returns the projects in input order only when no row failed;
    /// otherwise returns all row errors from all rows.
    pub fn parse_all(
        records: &[Vec<String>],
        layout: &ColumnLayout,
    ) -> Result<Vec<ValidatedProject>, AnalysisError> {
        let mut projects = Vec::with_capacity(records.len());
        let mut errors = Vec::new();

        for (index, record) in records.iter().enumerate() {
            let row = RawRow::from_record(record, layout);
            match Self::parse_row(index + 1, &row) {
                Ok(project) => projects.push(project),
                Err(row_errors) => errors.extend(row_errors),
            }
        }

        if !errors.is_empty() {
            return Err(AnalysisError::RowValidation(errors));
        }
        Ok(projects)
    }
}
