//! exam-api library - HTTP service over the exam results file
//!
//! Serves candidate lookup, per-subject band reports and admission group
//! leaderboards from an in-memory snapshot loaded once at startup. Any
//! other path is served from the static directory.

use std::path::{Path, PathBuf};

use axum::{routing::get, Router};
use exam_common::loader::load_csv;
use exam_common::Dataset;
use tokio::task::JoinHandle;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub mod api;
pub mod cli;
pub mod state;

pub use state::AppState;

/// Build application router
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/tra-cuu", get(api::lookup_candidate))
        .route("/api/report", get(api::subject_report))
        .route("/api/top10", get(api::top_by_group))
        .merge(api::health_routes())
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}

/// Load the results file in the background and publish it when done
///
/// Requests served before the load completes see an empty dataset. A
/// failed load is logged and leaves the service running with no data.
pub fn spawn_dataset_load(state: AppState, data_file: PathBuf) -> JoinHandle<()> {
    tokio::spawn(async move {
        let path = data_file.clone();
        let loaded = tokio::task::spawn_blocking(move || load_csv(&path)).await;

        match loaded {
            Ok(Ok(records)) => {
                let dataset = Dataset::from_records(records);
                let count = dataset.len();
                if state.publish(dataset) {
                    info!("CSV loaded: {} records from {}", count, data_file.display());
                }
            }
            Ok(Err(e)) => {
                error!("Failed to load {}: {}", data_file.display(), e);
            }
            Err(e) => {
                error!("Dataset load task failed: {}", e);
            }
        }
    })
}
