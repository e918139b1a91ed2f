//! Prioritization Module - pure domain services for project ranking.
//!
//! # Components
//!
//! - `SchemaValidator` - required column checks on the header row
//! - `RowParser` - typed parse and range validation of every data row
//! - `ScoringEngine` - fixed weighted priority formula
//! - `Classifier` - High / Medium / Low tiers from fixed thresholds
//! - `TagGenerator` - explanation tags from raw attribute values
//! - `Ranker` - stable descending sort, dense ranks, tier counts
//! - `ProjectAnalyzer` - the pipeline tying the stages together
//!
//! All functions are pure and stateless. A run either returns a complete
//! `AnalysisResult` or an `AnalysisError`; nothing is carried between runs.

mod analyzer;
mod classifier;
mod errors;
mod ranker;
mod row_parser;
mod schema;
mod scoring;
mod table;
mod tags;

pub use analyzer::{has_accepted_extension, ProjectAnalyzer, ACCEPTED_EXTENSION};
pub use classifier::{Classifier, PriorityCategory, HIGH_THRESHOLD, MEDIUM_THRESHOLD};
pub use errors::{AnalysisError, RowError};
pub use ranker::{AnalysisResult, CategorySummary, Ranker, ScoredProject};
pub use row_parser::{RawRow, RowParser, ValidatedProject};
pub use schema::{
    required_columns_sorted, ColumnLayout, SchemaValidator, COST_COLUMN, EFFORT_COLUMN,
    IMPACT_COLUMN, PROJECT_NAME_COLUMN, REQUIRED_COLUMNS, URGENCY_COLUMN,
};
pub use scoring::{
    PriorityScore, ScoringEngine, COST_WEIGHT, EFFORT_WEIGHT, IMPACT_WEIGHT, URGENCY_WEIGHT,
};
pub use table::RawTable;
pub use tags::{join_tags, ExplanationTag, TagGenerator, TAG_SEPARATOR};
