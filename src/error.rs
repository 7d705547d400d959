//! Error handling for the family graph engine
//!
//! The engine itself degrades silently (malformed relationship data is
//! skipped, never raised) so these types cover the edges of the system:
//! the backend collaborators and startup configuration.

use thiserror::Error;

/// Main error type for the kin-graph crate
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the family-service collaborators (users/relationships fetches)
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Backend returned HTTP {status} from {endpoint}")]
    Status { status: u16, endpoint: String },

    #[error("Invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Environment configuration errors, raised at server startup
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {variable}: {reason}")]
    InvalidValue { variable: String, reason: String },
}

/// Result type aliases for convenience
pub type GraphResult<T> = Result<T, GraphError>;
pub type BackendResult<T> = Result<T, BackendError>;
