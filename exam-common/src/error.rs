//! Common error types for the exam results service

use thiserror::Error;

/// Common result type for exam operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the exam crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error (wraps csv::Error)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Required CSV column absent from the header row
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
