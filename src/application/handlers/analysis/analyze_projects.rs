//! AnalyzeProjectsHandler - Command handler for scoring an uploaded file.
//!
//! Checks the file type, holds the upload in transient storage, decodes it,
//! and runs the prioritization pipeline. The stored upload is released on
//! every exit path, success or failure.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::foundation::ErrorCode;
use crate::domain::prioritization::{
    has_accepted_extension, AnalysisError, AnalysisResult, ProjectAnalyzer,
};
use crate::ports::{StorageError, StoredUpload, TableReader, UploadStorage};

/// Command to analyze one uploaded file.
#[derive(Debug, Clone)]
pub struct AnalyzeProjectsCommand {
    /// Client-supplied file name, used for the extension check.
    pub file_name: String,
    /// Raw file contents.
    pub contents: Vec<u8>,
}

/// Result of a successful analysis.
pub type AnalyzeProjectsResult = AnalysisResult;

/// Errors from the analyze command.
#[derive(Debug, Error)]
pub enum AnalyzeProjectsError {
    /// The upload failed validation; reported to the client as-is.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// Transient storage failed; not the client's fault.
    #[error("Upload storage failed: {0}")]
    Storage(#[from] StorageError),
}

impl AnalyzeProjectsError {
    /// Returns the error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalyzeProjectsError::Analysis(e) => e.code(),
            AnalyzeProjectsError::Storage(_) => ErrorCode::InternalError,
        }
    }
}

/// Handler for analyzing uploaded project files.
pub struct AnalyzeProjectsHandler {
    storage: Arc<dyn UploadStorage>,
    reader: Arc<dyn TableReader>,
}

impl AnalyzeProjectsHandler {
    pub fn new(storage: Arc<dyn UploadStorage>, reader: Arc<dyn TableReader>) -> Self {
        Self { storage, reader }
    }

    pub async fn handle(
        &self,
        cmd: AnalyzeProjectsCommand,
    ) -> Result<AnalyzeProjectsResult, AnalyzeProjectsError> {
        if !has_accepted_extension(&cmd.file_name) {
            warn!(file_name = %cmd.file_name, "Rejected upload with unsupported extension");
            return Err(AnalysisError::InvalidFormat.into());
        }

        let upload = self.storage.store(&cmd.file_name, &cmd.contents).await?;
        debug!(upload_id = %upload.id, size_bytes = upload.size_bytes, "Upload stored");
        let guard = UploadGuard::new(self.storage.clone(), upload.clone());

        let outcome = self.analyze_stored(&upload).await;

        // Release failures never replace the analysis outcome.
        guard.release().await;

        match &outcome {
            Ok(result) => info!(
                upload_id = %upload.id,
                total_projects = result.total_projects,
                high = result.summary.high,
                medium = result.summary.medium,
                low = result.summary.low,
                "Analysis completed"
            ),
            Err(e) => {
                let row_errors = match e {
                    AnalyzeProjectsError::Analysis(a) => a.row_errors().len(),
                    AnalyzeProjectsError::Storage(_) => 0,
                };
                warn!(
                    upload_id = %upload.id,
                    code = %e.code(),
                    row_errors,
                    "Analysis rejected"
                );
            }
        }

        outcome
    }

    async fn analyze_stored(
        &self,
        upload: &StoredUpload,
    ) -> Result<AnalysisResult, AnalyzeProjectsError> {
        let contents = self.storage.read(upload).await?;
        let table = self
            .reader
            .read_table(&contents)
            .map_err(AnalysisError::from)?;
        Ok(ProjectAnalyzer::analyze(&table)?)
    }
}

/// Releases a stored upload exactly once.
///
/// The normal path awaits [`UploadGuard::release`]. If the guard is dropped
/// first, the release is spawned onto the current Tokio runtime.
struct UploadGuard {
    storage: Arc<dyn UploadStorage>,
    upload: Option<StoredUpload>,
}

impl UploadGuard {
    fn new(storage: Arc<dyn UploadStorage>, upload: StoredUpload) -> Self {
        Self {
            storage,
            upload: Some(upload),
        }
    }

    async fn release(mut self) {
        if let Some(upload) = self.upload.take() {
            release_upload(self.storage.as_ref(), &upload).await;
        }
    }
}

impl Drop for UploadGuard {
    fn drop(&mut self) {
        let Some(upload) = self.upload.take() else {
            return;
        };
        warn!(upload_id = %upload.id, "Analysis cancelled; releasing upload in background");
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let storage = self.storage.clone();
                handle.spawn(async move {
                    release_upload(storage.as_ref(), &upload).await;
                });
            }
            Err(_) => {
                warn!(
                    upload_id = %upload.id,
                    path = %upload.path.display(),
                    "No runtime to release upload"
                );
            }
        }
    }
}

async fn release_upload(storage: &dyn UploadStorage, upload: &StoredUpload) {
    if let Err(e) = storage.release(upload).await {
        warn!(upload_id = %upload.id, error = %e, "Failed to release upload");
    }
}
