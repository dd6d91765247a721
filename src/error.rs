//! Error types for the course search library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`CourseSearchError`] enum.
//!
//! # Examples
//!
//! ```
//! use course_search::error::{CourseSearchError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(CourseSearchError::invalid_criteria("size must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for course search operations.
///
/// Engine failures are surfaced as [`CourseSearchError::EngineUnavailable`] and are
/// never retried or converted into a different search strategy.
#[derive(Error, Debug)]
pub enum CourseSearchError {
    /// The search engine could not be reached or timed out.
    #[error("Engine unavailable: {0}")]
    EngineUnavailable(String),

    /// Malformed search criteria, rejected at the request boundary.
    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),

    /// Malformed catalog content.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// I/O errors (catalog and config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Context-wrapped error
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with CourseSearchError.
pub type Result<T> = std::result::Result<T, CourseSearchError>;

impl CourseSearchError {
    /// Create a new engine unavailable error.
    pub fn engine_unavailable<S: Into<String>>(msg: S) -> Self {
        CourseSearchError::EngineUnavailable(msg.into())
    }

    /// Create a new invalid criteria error.
    pub fn invalid_criteria<S: Into<String>>(msg: S) -> Self {
        CourseSearchError::InvalidCriteria(msg.into())
    }

    /// Create a new catalog error.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        CourseSearchError::Catalog(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        CourseSearchError::Other(msg.into())
    }

    /// Create a new timeout error. Timeouts are reported as an unavailable engine.
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        CourseSearchError::EngineUnavailable(format!("Timeout: {}", msg.into()))
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        CourseSearchError::Other(format!("Invalid configuration: {}", msg.into()))
    }

    /// Whether this error came from the engine collaborator.
    pub fn is_engine_error(&self) -> bool {
        matches!(self, CourseSearchError::EngineUnavailable(_))
    }
}
