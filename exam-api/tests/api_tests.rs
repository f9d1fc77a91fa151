//! Integration tests for exam-api endpoints
//!
//! Tests cover:
//! - Candidate lookup (hit, miss, missing parameter)
//! - Band report shape and counts
//! - Admission group leaderboards
//! - Behaviour before the dataset is published
//! - Health endpoint and static file fallback

use std::io::Write;
use std::path::Path;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use exam_api::{build_router, spawn_dataset_load, AppState};
use exam_common::{Dataset, ExamRecord, Subject};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: small dataset covering both tracks and an ineligible row
fn test_dataset() -> Dataset {
    Dataset::from_records(vec![
        ExamRecord::new("A1")
            .with(Subject::Math, "8")
            .with(Subject::Physics, "7")
            .with(Subject::Chemistry, "9"),
        ExamRecord::new("A2")
            .with(Subject::Math, "6")
            .with(Subject::Physics, "8"),
        ExamRecord::new("01000001")
            .with(Subject::Math, "8.4")
            .with(Subject::Literature, "6.75")
            .with(Subject::ForeignLanguage, "8.2")
            .with(Subject::History, "8.5")
            .with(Subject::Geography, "7.25")
            .with(Subject::Civics, "8.5"),
    ])
}

/// Test helper: router over a published dataset
fn setup_app(dataset: Dataset) -> axum::Router {
    build_router(AppState::with_dataset(dataset), Path::new("."))
}

/// Test helper: create GET request
fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: extract body as text
async fn extract_text(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Should be UTF-8")
}

/// Test helper: extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Lookup
// =============================================================================

#[tokio::test]
async fn test_lookup_hit() {
    let app = setup_app(test_dataset());

    let response = app.oneshot(get("/tra-cuu?sbd=01000001")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));

    let text = extract_text(response.into_body()).await;
    assert_eq!(
        text,
        "🎓 SBD: 01000001\nToán: 8.4\nNgữ văn: 6.75\nNgoại ngữ: 8.2\n\
         📚 Khối: Xã hội\nSử: 8.5\nĐịa: 7.25\nGDCD: 8.5"
    );
}

#[tokio::test]
async fn test_lookup_miss() {
    let app = setup_app(test_dataset());

    let response = app.oneshot(get("/tra-cuu?sbd=99999999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let text = extract_text(response.into_body()).await;
    assert_eq!(text, "❌ Không tìm thấy thí sinh.");
}

#[tokio::test]
async fn test_lookup_without_sbd_is_miss() {
    let app = setup_app(test_dataset());

    let response = app.oneshot(get("/tra-cuu")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Band report
// =============================================================================

#[tokio::test]
async fn test_report_counts_parseable_values_only() {
    let app = setup_app(test_dataset());

    let response = app.oneshot(get("/api/report")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let subjects = body.as_object().unwrap();
    assert_eq!(subjects.len(), 9);

    assert_eq!(body["toan"]["band1"], 2);
    assert_eq!(body["toan"]["band2"], 1);
    assert_eq!(body["toan"]["band3"], 0);
    assert_eq!(body["toan"]["band4"], 0);

    assert_eq!(body["hoa_hoc"]["band1"], 1);
    assert_eq!(body["sinh_hoc"], serde_json::json!({"band1": 0, "band2": 0, "band3": 0, "band4": 0}));
}

// =============================================================================
// Leaderboards
// =============================================================================

#[tokio::test]
async fn test_top10_groups() {
    let app = setup_app(test_dataset());

    let response = app.oneshot(get("/api/top10")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    for group in ["A", "A1", "B", "D"] {
        assert!(body[group].is_array(), "missing group {}", group);
    }

    let group_a = body["A"].as_array().unwrap();
    assert_eq!(group_a.len(), 1);
    assert_eq!(group_a[0]["sbd"], "A1");
    assert_eq!(group_a[0]["total"], "24.00");
    assert_eq!(group_a[0]["subjects"]["toan"], 8.0);
    assert_eq!(group_a[0]["subjects"]["ngu_van"], Value::Null);

    let group_d = body["D"].as_array().unwrap();
    assert_eq!(group_d.len(), 1);
    assert_eq!(group_d[0]["sbd"], "01000001");
    assert_eq!(group_d[0]["total"], "23.35");

    assert!(body["B"].as_array().unwrap().is_empty());
}

// =============================================================================
// Readiness
// =============================================================================

#[tokio::test]
async fn test_endpoints_before_load_return_empty_results() {
    let app = build_router(AppState::new(), Path::new("."));

    let response = app.clone().oneshot(get("/tra-cuu?sbd=A1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.clone().oneshot(get("/api/report")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["toan"]["band1"], 0);

    let response = app.clone().oneshot(get("/api/top10")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert!(body["A"].as_array().unwrap().is_empty());

    let response = app.oneshot(get("/health")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["ready"], false);
    assert_eq!(body["records"], 0);
}

#[tokio::test]
async fn test_background_load_publishes_dataset() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "sbd,toan,vat_li,hoa_hoc").unwrap();
    writeln!(file, "A1,8,7,9").unwrap();
    file.flush().unwrap();

    let state = AppState::new();
    spawn_dataset_load(state.clone(), file.path().to_path_buf())
        .await
        .unwrap();
    assert!(state.is_ready());

    let app = build_router(state, Path::new("."));
    let response = app.oneshot(get("/api/top10")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["A"][0]["total"], "24.00");
}

#[tokio::test]
async fn test_failed_load_leaves_service_empty() {
    let state = AppState::new();
    spawn_dataset_load(state.clone(), "/nonexistent/diem_thi.csv".into())
        .await
        .unwrap();

    assert!(!state.is_ready());
    assert!(state.snapshot().is_empty());
}

// =============================================================================
// Health and static files
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app(test_dataset());

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "exam-api");
    assert!(body["version"].is_string());
    assert_eq!(body["ready"], true);
    assert_eq!(body["records"], 3);
}

#[tokio::test]
async fn test_static_fallback_serves_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Tra cứu điểm thi</h1>").unwrap();

    let app = build_router(AppState::with_dataset(test_dataset()), dir.path());

    let response = app.clone().oneshot(get("/index.html")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let text = extract_text(response.into_body()).await;
    assert!(text.contains("Tra cứu"));

    let response = app.oneshot(get("/missing.js")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
