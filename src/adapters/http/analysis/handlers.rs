//! HTTP handlers for the analysis endpoint.
//!
//! These handlers connect the Axum route to the application layer command
//! handler. Multipart extraction, the upload size ceiling, and the mapping of
//! failures to status codes live here.

use std::sync::Arc;

use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    AnalyzeProjectsCommand, AnalyzeProjectsError, AnalyzeProjectsHandler,
};
use crate::domain::foundation::ErrorCode;
use crate::ports::{TableReader, UploadStorage};

use super::dto::{AnalysisResponse, ErrorResponse};

/// Multipart field carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

const BYTES_PER_MB: usize = 1024 * 1024;

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Analysis API error that implements IntoResponse.
#[derive(Debug)]
pub enum AnalysisApiError {
    BadRequest { code: ErrorCode, message: String },
    PayloadTooLarge { max_bytes: usize },
    Internal(String),
}

impl AnalysisApiError {
    fn no_file(message: impl Into<String>) -> Self {
        AnalysisApiError::BadRequest {
            code: ErrorCode::NoFile,
            message: message.into(),
        }
    }

    fn from_multipart(error: MultipartError, max_bytes: usize) -> Self {
        if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AnalysisApiError::PayloadTooLarge { max_bytes };
        }
        AnalysisApiError::no_file(format!("Invalid upload: {}", error.body_text()))
    }
}

fn describe_limit(max_bytes: usize) -> String {
    if max_bytes >= BYTES_PER_MB && max_bytes % BYTES_PER_MB == 0 {
        format!("{} MB", max_bytes / BYTES_PER_MB)
    } else {
        format!("{} bytes", max_bytes)
    }
}

impl IntoResponse for AnalysisApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            AnalysisApiError::BadRequest { code, message } => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(code, message))
            }
            AnalysisApiError::PayloadTooLarge { max_bytes } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ErrorResponse::new(
                    ErrorCode::FileTooLarge,
                    format!(
                        "File too large. Maximum upload size is {}.",
                        describe_limit(max_bytes)
                    ),
                ),
            ),
            AnalysisApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<AnalyzeProjectsError> for AnalysisApiError {
    fn from(error: AnalyzeProjectsError) -> Self {
        match error {
            AnalyzeProjectsError::Analysis(e) => AnalysisApiError::BadRequest {
                code: e.code(),
                message: e.to_string(),
            },
            AnalyzeProjectsError::Storage(e) => {
                tracing::error!(error = %e, "Upload storage failed");
                AnalysisApiError::Internal("Unable to process the uploaded file.".to_string())
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing analysis dependencies.
#[derive(Clone)]
pub struct AnalysisAppState {
    pub upload_storage: Arc<dyn UploadStorage>,
    pub table_reader: Arc<dyn TableReader>,
    /// Largest accepted file, in bytes.
    pub max_upload_bytes: usize,
}

impl AnalysisAppState {
    pub fn analyze_projects_handler(&self) -> AnalyzeProjectsHandler {
        AnalyzeProjectsHandler::new(self.upload_storage.clone(), self.table_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /analyze
///
/// Accepts a multipart upload with one `file` field and returns the ranked
/// projects.
pub async fn analyze_projects(
    State(state): State<AnalysisAppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResponse>, AnalysisApiError> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Request is not a multipart upload");
        AnalysisApiError::no_file("No file part in the request.")
    })?;

    let cmd = read_file_field(&mut multipart, state.max_upload_bytes).await?;

    let handler = state.analyze_projects_handler();
    let result = handler.handle(cmd).await?;

    Ok(Json(AnalysisResponse::from(&result)))
}

/// Pulls the `file` field out of the multipart stream.
async fn read_file_field(
    multipart: &mut Multipart,
    max_bytes: usize,
) -> Result<AnalyzeProjectsCommand, AnalysisApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AnalysisApiError::from_multipart(e, max_bytes))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        if file_name.is_empty() {
            return Err(AnalysisApiError::no_file(
                "No file selected. Please upload a CSV file.",
            ));
        }

        let contents = field
            .bytes()
            .await
            .map_err(|e| AnalysisApiError::from_multipart(e, max_bytes))?;

        if contents.len() > max_bytes {
            return Err(AnalysisApiError::PayloadTooLarge { max_bytes });
        }

        return Ok(AnalyzeProjectsCommand {
            file_name,
            contents: contents.to_vec(),
        });
    }

    Err(AnalysisApiError::no_file("No file part in the request."))
}
