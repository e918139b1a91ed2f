//! Schema Validator - required column checks on the header row.

use super::{AnalysisError, RawTable};

pub const PROJECT_NAME_COLUMN: &str = "Project Name";
pub const IMPACT_COLUMN: &str = "Impact Score";
pub const URGENCY_COLUMN: &str = "Urgency Score";
pub const EFFORT_COLUMN: &str = "Effort Score";
pub const COST_COLUMN: &str = "Cost Score";

/// The five canonical columns every upload must carry, in any order.
pub const REQUIRED_COLUMNS: &[&str] = &[
    PROJECT_NAME_COLUMN,
    IMPACT_COLUMN,
    URGENCY_COLUMN,
    EFFORT_COLUMN,
    COST_COLUMN,
];

/// Required column names in alphabetical order, as used in messages.
pub fn required_columns_sorted() -> Vec<&'static str> {
    let mut columns = REQUIRED_COLUMNS.to_vec();
    columns.sort_unstable();
    columns
}

/// Positions of the required columns within a validated header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub name: usize,
    pub impact: usize,
    pub urgency: usize,
    pub effort: usize,
    pub cost: usize,
}

/// Header row validation.
pub struct SchemaValidator;

impl SchemaValidator {
    /// Returns every required column absent from the header, sorted.
    pub fn missing_columns(table: &RawTable) -> Vec<&'static str> {
        required_columns_sorted()
            .into_iter()
            .filter(|column| table.column_index(column).is_none())
            .collect()
    }

    /// Validates the header row and resolves column positions.
    ///
    /// Reports the complete missing set in one error, not just the first
    /// absent column.
    pub fn validate(table: &RawTable) -> Result<ColumnLayout, AnalysisError> {
        let missing = Self::missing_columns(table);
        if !missing.is_empty() {
            return Err(AnalysisError::MissingColumns {
                missing: missing.into_iter().map(String::from).collect(),
            });
        }

        let index = |column: &str| {
            table
                .column_index(column)
                .ok_or_else(|| AnalysisError::MissingColumns {
                    missing: vec![column.to_string()],
                })
        };

        Ok(ColumnLayout {
            name: index(PROJECT_NAME_COLUMN)?,
            impact: index(IMPACT_COLUMN)?,
            urgency: index(URGENCY_COLUMN)?,
            effort: index(EFFORT_COLUMN)?,
            cost: index(COST_COLUMN)?,
        })
    }
}
