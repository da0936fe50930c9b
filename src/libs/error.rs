//! Error types for the grind library.
//!
//! [`GrindError`] is the taxonomy every store, analytics and export operation
//! reports through. Command handlers convert it into `anyhow::Error` at the
//! CLI boundary and print it as a single readable line.
//!
//! [`GenerationError`] is kept separate because a failed completion request
//! is a different failure domain from persistence: a status update can
//! succeed while its motivational message fails.

use thiserror::Error;

/// Failures of the external text-generation collaborator.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// No API key or endpoint is configured.
    #[error("text generation is not configured: {0}")]
    NotConfigured(String),

    /// The request did not complete within the configured timeout.
    #[error("completion request timed out after {0}s")]
    Timeout(u64),

    /// Connection, TLS or body decoding failure.
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("completion API returned {status}: {body}")]
    Api { status: u16, body: String },

    /// The API answered successfully but without any content.
    #[error("completion API returned an empty response")]
    EmptyResponse,
}

/// Errors produced by the store, analytics and export layers.
#[derive(Error, Debug)]
pub enum GrindError {
    /// Missing or malformed required input.
    #[error("{0}")]
    Validation(String),

    /// A task referenced a category that does not exist.
    #[error("Category '{0}' does not exist!")]
    InvalidCategory(String),

    /// A category with this name already exists.
    #[error("Category '{0}' already exists")]
    Duplicate(String),

    /// The targeted record does not exist.
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Message generation failed: {0}")]
    Generation(#[from] GenerationError),

    /// Underlying SQLite failure not otherwise classified.
    #[error("Database error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Migration v{version} ({name}) failed: {reason}")]
    Migration { version: u32, name: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel error: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),
}

impl GrindError {
    pub fn task_not_found(id: i64) -> Self {
        GrindError::NotFound { entity: "Task", id }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GrindError>;
