//! Integration tests for the analysis HTTP endpoint.
//!
//! These tests drive the full router with hand-built multipart requests:
//! 1. Successful uploads produce the ranked JSON shape
//! 2. File-level failures produce `{ error, code }` with status 400
//! 3. Oversized uploads produce status 413
//! 4. Transient uploads are always released

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use project_prioritizer::adapters::http::{analysis_router, AnalysisAppState};
use project_prioritizer::adapters::{CsvTableReader, FileUploadStorage, InMemoryUploadStorage};

// =============================================================================
// Test Infrastructure
// =============================================================================

const BOUNDARY: &str = "prioritizer-test-boundary";
const HEADER: &str = "Project Name,Impact Score,Urgency Score,Effort Score,Cost Score\n";
const MAX_UPLOAD_BYTES: usize = 1024;

fn app_with(storage: &InMemoryUploadStorage) -> Router {
    analysis_router(AnalysisAppState {
        upload_storage: Arc::new(storage.clone()),
        table_reader: Arc::new(CsvTableReader::new()),
        max_upload_bytes: MAX_UPLOAD_BYTES,
    })
}

fn app() -> Router {
    app_with(&InMemoryUploadStorage::new())
}

/// Builds a multipart body with a single part.
fn multipart_body(field: &str, file_name: Option<&str>, contents: &[u8]) -> Vec<u8> {
    let disposition = match file_name {
        Some(name) => format!("form-data; name=\"{field}\"; filename=\"{name}\""),
        None => format!("form-data; name=\"{field}\""),
    };
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(format!("Content-Disposition: {disposition}\r\n").as_bytes());
    body.extend_from_slice(b"Content-Type: text/csv\r\n\r\n");
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(body: Vec<u8>) -> Request<Body> {
    Request::post("/analyze")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn csv_upload(file_name: &str, csv: &str) -> Request<Body> {
    upload_request(multipart_body("file", Some(file_name), csv.as_bytes()))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn project_names(json: &Value) -> Vec<&str> {
    json["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["project_name"].as_str().unwrap())
        .collect()
}

// =============================================================================
// Successful Analysis
// =============================================================================

#[tokio::test]
async fn analyze_returns_ranked_projects() {
    let csv = format!(
        "{HEADER}Billing Revamp,2,2,4,4\nCheckout Redesign,5,4,3,2\nSearch Tuning,3,3,3,3\n"
    );

    let (status, json) = send(app(), csv_upload("projects.csv", &csv)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["total_projects"], 3);
    assert_eq!(json["summary"], json!({ "high": 1, "medium": 1, "low": 1 }));
    assert_eq!(
        project_names(&json),
        vec!["Checkout Redesign", "Search Tuning", "Billing Revamp"]
    );
    assert_eq!(
        json["projects"][0],
        json!({
            "rank": 1,
            "project_name": "Checkout Redesign",
            "impact": 5.0,
            "urgency": 4.0,
            "effort": 3.0,
            "cost": 2.0,
            "priority_score": 4.15,
            "priority_category": "High",
            "explanation": "High Impact, Urgent, Cost Efficient",
            "tags": ["High Impact", "Urgent", "Cost Efficient"]
        })
    );
    assert_eq!(json["projects"][2]["priority_category"], "Low");
    assert_eq!(json["projects"][2]["explanation"], "High Effort, Expensive");
}

#[tokio::test]
async fn ties_keep_input_order_with_distinct_ranks() {
    let csv = format!("{HEADER}First,3,3,3,3\nSecond,3,3,3,3\nThird,3,3,3,3\n");

    let (status, json) = send(app(), csv_upload("projects.csv", &csv)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(project_names(&json), vec!["First", "Second", "Third"]);
    let ranks: Vec<u64> = json["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["rank"].as_u64().unwrap())
        .collect();
    assert_eq!(ranks, vec![1, 2, 3]);
}

#[tokio::test]
async fn uppercase_extension_and_decimal_scores_are_accepted() {
    let csv = format!("{HEADER}  Decimal  , 4.5 ,3.2,1.5,2.0\n");

    let (status, json) = send(app(), csv_upload("PROJECTS.CSV", &csv)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["projects"][0]["project_name"], "Decimal");
    assert_eq!(json["projects"][0]["impact"], 4.5);
}

#[tokio::test]
async fn extra_columns_are_ignored() {
    let csv = "Owner,Project Name,Impact Score,Urgency Score,Effort Score,Cost Score,Notes\n\
               ana,Alpha,4,4,2,2,later\n";

    let (status, json) = send(app(), csv_upload("projects.csv", csv)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_projects"], 1);
    assert_eq!(json["projects"][0]["project_name"], "Alpha");
}

// =============================================================================
// File-Level Failures
// =============================================================================

#[tokio::test]
async fn wrong_extension_is_rejected() {
    let csv = format!("{HEADER}Alpha,5,4,3,2\n");

    let (status, json) = send(app(), csv_upload("projects.xlsx", &csv)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({
            "error": "Invalid file format. Only .csv files are accepted.",
            "code": "INVALID_FILE_FORMAT"
        })
    );
}

#[tokio::test]
async fn missing_column_is_named() {
    let csv = "Project Name,Impact Score,Urgency Score,Effort Score\nAlpha,5,4,3\n";

    let (status, json) = send(app(), csv_upload("projects.csv", csv)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MISSING_COLUMNS");
    assert_eq!(
        json["error"],
        "Missing required columns: Cost Score. Required columns are: \
         Cost Score, Effort Score, Impact Score, Project Name, Urgency Score."
    );
}

#[tokio::test]
async fn header_only_file_has_no_data_rows() {
    let (status, json) = send(app(), csv_upload("projects.csv", HEADER)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({ "error": "No data rows found in file.", "code": "NO_DATA_ROWS" })
    );
}

#[tokio::test]
async fn empty_file_is_rejected() {
    let (status, json) = send(app(), csv_upload("projects.csv", "")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "EMPTY_FILE");
}

#[tokio::test]
async fn row_errors_are_all_reported() {
    let csv = format!("{HEADER}Alpha,5,4,3,2\nBeta,high,4,3,2\n,3,3,9,3\n");

    let (status, json) = send(app(), csv_upload("projects.csv", &csv)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "ROW_VALIDATION_FAILED");
    let error = json["error"].as_str().unwrap();
    assert!(error.starts_with("Validation errors found:\n"));
    assert!(error.contains("Row 2: 'Impact Score' must be a number (got 'high')."));
    assert!(error.contains("Row 3: 'Effort Score' must be between 1 and 5 (got 9)."));
    assert!(error.contains("Row 3: 'Project Name' is missing or empty."));
    assert!(!error.contains("Row 1"));
}

#[tokio::test]
async fn invalid_utf8_is_unreadable() {
    let body = multipart_body("file", Some("projects.csv"), &[0xff, 0xfe, 0x41, 0x0a]);

    let (status, json) = send(app(), upload_request(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "UNREADABLE_FILE");
}

// =============================================================================
// Request-Level Failures
// =============================================================================

#[tokio::test]
async fn missing_file_part_is_rejected() {
    let body = multipart_body("attachment", None, b"hello");

    let (status, json) = send(app(), upload_request(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({ "error": "No file part in the request.", "code": "NO_FILE" })
    );
}

#[tokio::test]
async fn non_multipart_request_is_rejected() {
    let request = Request::post("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let (status, json) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "NO_FILE");
}

#[tokio::test]
async fn empty_file_name_is_rejected() {
    let body = multipart_body("file", Some(""), b"");

    let (status, json) = send(app(), upload_request(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"],
        "No file selected. Please upload a CSV file."
    );
}

#[tokio::test]
async fn file_over_limit_is_too_large() {
    let mut csv = String::from(HEADER);
    while csv.len() <= MAX_UPLOAD_BYTES {
        csv.push_str("Filler,3,3,3,3\n");
    }

    let (status, json) = send(app(), csv_upload("projects.csv", &csv)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["code"], "FILE_TOO_LARGE");
    assert_eq!(
        json["error"],
        "File too large. Maximum upload size is 1024 bytes."
    );
}

#[tokio::test]
async fn body_over_transport_limit_is_too_large() {
    let contents = vec![b'a'; 256 * 1024];
    let body = multipart_body("file", Some("projects.csv"), &contents);

    let (status, json) = send(app(), upload_request(body)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["code"], "FILE_TOO_LARGE");
}

// =============================================================================
// Transient Storage
// =============================================================================

#[tokio::test]
async fn uploads_are_released_on_success_and_failure() {
    let storage = InMemoryUploadStorage::new();

    let good = format!("{HEADER}Alpha,5,4,3,2\n");
    let (status, _) = send(app_with(&storage), csv_upload("projects.csv", &good)).await;
    assert_eq!(status, StatusCode::OK);

    let bad = format!("{HEADER}Alpha,5,4,3,0\n");
    let (status, _) = send(app_with(&storage), csv_upload("projects.csv", &bad)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(storage.held_count().await, 0);
    assert_eq!(storage.released_count().await, 2);
}

#[tokio::test]
async fn file_storage_leaves_no_files_behind() {
    let dir = TempDir::new().unwrap();
    let app = analysis_router(AnalysisAppState {
        upload_storage: Arc::new(FileUploadStorage::new(dir.path())),
        table_reader: Arc::new(CsvTableReader::new()),
        max_upload_bytes: MAX_UPLOAD_BYTES,
    });
    let csv = format!("{HEADER}Alpha,5,4,3,2\n");

    let (status, _) = send(app, csv_upload("projects.csv", &csv)).await;

    assert_eq!(status, StatusCode::OK);
    let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(leftovers, 0);
}
