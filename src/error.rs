//! Error types for govdash

use thiserror::Error;

/// Result type alias for govdash operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load departments: {0}")]
    Hierarchy(#[from] HierarchyError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while loading the department hierarchy.
///
/// Causes are stored as strings so a recorded failure can be cloned and
/// handed out to every caller that checks it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    #[error("Departments resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Failed to read {resource}: {cause}")]
    Read { resource: String, cause: String },

    #[error("Failed to parse {resource}: {cause}")]
    Parse { resource: String, cause: String },

    #[error(
        "Invalid departments file: {resource}. Missing \"departments\" key or \"departments\" is not an array"
    )]
    InvalidFormat { resource: String },
}

/// Catalog API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to load departments from CKAN API: {0}")]
    Unsuccessful(String),

    #[error("Access denied by the catalog API: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Unexpected status code: {0}")]
    UnexpectedStatus(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to catalog API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
