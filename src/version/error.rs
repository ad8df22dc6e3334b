use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseVersionError {
    #[error("Invalid version component {component:?} in {input:?}: {source}")]
    InvalidComponent {
        input: String,
        component: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Invalid response: {0}")]
    Format(String),
}

/// Failure of the strict query-and-parse pipeline
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Endpoint(#[from] EndpointError),

    #[error("Unparsable latest version: {0}")]
    Parse(#[from] ParseVersionError),
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Current version is not set")]
    MissingCurrentVersion,

    #[error("Resource is not set")]
    MissingResource,

    #[error("Invalid current version: {0}")]
    InvalidCurrentVersion(#[from] ParseVersionError),

    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown endpoint: {0}")]
pub struct ParseEndpointError(pub String);
