use thiserror::Error;

/// Errors that can occur while talking to the recipe API
#[derive(Error, Debug)]
pub enum SearchError {
    /// Transport failure or non-success HTTP status
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body was not the JSON we expected
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configured base URL could not be used to build a request
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
