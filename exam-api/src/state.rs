//! Shared application state
//!
//! The dataset is published once, after the background load finishes.
//! Until then every reader sees an empty snapshot; nothing waits on the
//! load.

use std::sync::Arc;

use exam_common::Dataset;
use tokio::sync::OnceCell;

static EMPTY_DATASET: Dataset = Dataset::empty();

/// Application state shared across HTTP handlers
#[derive(Clone, Default)]
pub struct AppState {
    /// One-shot readiness gate for the loaded dataset
    dataset: Arc<OnceCell<Dataset>>,
}

impl AppState {
    /// Create state with no dataset published yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state with a dataset already published
    pub fn with_dataset(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(OnceCell::new_with(Some(dataset))),
        }
    }

    /// Publish the loaded dataset
    ///
    /// Returns `false` if a dataset was already published; the first one
    /// stays in place.
    pub fn publish(&self, dataset: Dataset) -> bool {
        self.dataset.set(dataset).is_ok()
    }

    pub fn is_ready(&self) -> bool {
        self.dataset.initialized()
    }

    /// Current snapshot, empty before the load completes
    pub fn snapshot(&self) -> &Dataset {
        self.dataset.get().unwrap_or(&EMPTY_DATASET)
    }
}
