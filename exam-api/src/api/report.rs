//! Aggregate reports
//!
//! Both endpoints recompute from the current snapshot on every request.

use axum::{extract::State, Json};
use exam_common::bands::SubjectReport;
use exam_common::ranking::GroupRanking;

use crate::AppState;

/// GET /api/report
///
/// Band histogram per subject, keyed by subject code.
pub async fn subject_report(State(state): State<AppState>) -> Json<SubjectReport> {
    Json(state.snapshot().subject_report())
}

/// GET /api/top10
///
/// Top ten candidates per admission group, keyed by group code.
pub async fn top_by_group(State(state): State<AppState>) -> Json<GroupRanking> {
    Json(state.snapshot().top_by_group())
}
