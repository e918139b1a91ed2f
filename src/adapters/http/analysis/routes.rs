//! Axum router configuration for the analysis endpoint.

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use super::handlers::{analyze_projects, AnalysisAppState};

/// Room left for multipart boundaries and part headers above the file limit.
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Create the analysis API router.
///
/// # Routes
/// - `POST /analyze` - Upload a CSV file and receive the ranked projects
///
/// The request body ceiling is the file limit plus multipart overhead; the
/// handler enforces the exact file limit itself.
pub fn analysis_routes(max_upload_bytes: usize) -> Router<AnalysisAppState> {
    Router::new()
        .route("/analyze", post(analyze_projects))
        .layer(DefaultBodyLimit::max(
            max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES),
        ))
}

/// Create the complete analysis router with state applied.
pub fn analysis_router(state: AnalysisAppState) -> Router {
    analysis_routes(state.max_upload_bytes).with_state(state)
}
