//! Candidate lookup by registration number

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use exam_common::lookup::{LookupOutcome, NOT_FOUND_MESSAGE};
use serde::Deserialize;
use tracing::debug;

use crate::AppState;

/// Query parameters for lookup
#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    /// Registration number, matched exactly
    pub sbd: Option<String>,
}

/// GET /tra-cuu?sbd=ID
///
/// Plain-text block for the first matching candidate, or 404 with the
/// not-found message. A missing `sbd` is a miss.
pub async fn lookup_candidate(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> Response {
    let outcome = match query.sbd.as_deref() {
        Some(sbd) => state.snapshot().lookup(sbd),
        None => LookupOutcome::NotFound,
    };

    match outcome {
        LookupOutcome::Found(text) => (StatusCode::OK, text).into_response(),
        LookupOutcome::NotFound => {
            debug!("Lookup miss for sbd={:?}", query.sbd);
            (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response()
        }
    }
}
