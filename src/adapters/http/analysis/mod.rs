//! HTTP adapter for project analysis.
//!
//! Exposes the prioritization pipeline via REST API:
//! - `POST /analyze` - Multipart upload (field `file`) of a CSV, answered
//!   with ranked projects or a `{ error, code }` body

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{analyze_projects, AnalysisApiError, AnalysisAppState, FILE_FIELD};
pub use routes::{analysis_router, analysis_routes, MULTIPART_OVERHEAD_BYTES};
