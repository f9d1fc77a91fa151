//! # Exam Common Library
//!
//! Shared code for the exam results service:
//! - Subject and admission group definitions
//! - CSV record loading
//! - Score model (typed scores, group totals)
//! - Score band histograms
//! - Top-N ranking per admission group
//! - Candidate lookup and text rendering
//! - Configuration loading

pub mod bands;
pub mod config;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod lookup;
pub mod ranking;
pub mod score;
pub mod subject;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use loader::ExamRecord;
pub use score::Candidate;
pub use subject::{AdmissionGroup, Subject};
