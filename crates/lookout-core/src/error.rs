//! Error types for the research pipeline.
//!
//! Each pipeline stage has its own error enum so callers can branch on the
//! stage that failed. [`LookoutError`] wraps all of them together with the
//! infrastructure failures (database, file system, configuration).

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Transport or API failure of a language-model completion call.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("Completion returned no content")]
    EmptyResponse,
}

/// Failure of a single search request against the content platform.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error("Search for '{target}' returned status {status}")]
    Api { target: String, status: u16 },
    #[error("'{target}' is not a valid community name")]
    InvalidTarget { target: String },
}

/// Errors raised while turning a research goal into a [`crate::Plan`].
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The model answered, but not with decodable plan JSON.
    #[error("Model response is not valid plan JSON: {reason}")]
    MalformedResponse { reason: String },
    /// The completion call itself failed.
    #[error("Plan generation request failed: {0}")]
    Upstream(#[from] CompletionError),
}

/// Errors raised by the multi-target search executor.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Plan has no targets to scan; regenerate or edit the plan")]
    EmptyTargetList,
    #[error("Plan has no keywords to search for; regenerate or edit the plan")]
    EmptyKeywordList,
    #[error("No relevant data found. Try broader keywords.")]
    NoDataCollected,
    /// One target could not be scanned. Collected, logged and never
    /// propagated by the executor.
    #[error("Skipped r/{target}: {reason}")]
    TargetUnavailable { target: String, reason: String },
}

/// Errors raised while producing the final report.
#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("Analysis failed: {message}")]
    UpstreamFailure { message: String },
}

/// Errors raised by the dedup store on writes.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to store item {id}: {source}")]
    WriteFailed {
        id: String,
        #[source]
        source: rusqlite::Error,
    },
}

/// Comprehensive error type for all lookout operations.
#[derive(Error, Debug)]
pub enum LookoutError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Execution(#[from] ExecutionError),
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl LookoutError {
    /// Creates a database error with a message and its rusqlite source.
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl fmt::Display) -> Self {
        Self::Configuration {
            message: message.to_string(),
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| LookoutError::database(message, e))
    }
}

/// Result type alias for lookout operations
pub type Result<T> = std::result::Result<T, LookoutError>;
