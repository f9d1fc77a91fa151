//! HTTP API handlers for exam-api

pub mod health;
pub mod lookup;
pub mod report;

pub use health::health_routes;
pub use lookup::lookup_candidate;
pub use report::{subject_report, top_by_group};
