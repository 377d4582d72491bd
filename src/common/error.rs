//! Error types for the direwolf CLI
//!
//! Every error here is fatal: main prints it to stderr and exits 1.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the direwolf CLI
#[derive(Error, Debug)]
pub enum Error {
    // === Credential errors ===
    #[error("no api key. Pass --api-key, set DIREWOLF_API_KEY, or add api_key to the config file")]
    MissingApiKey,

    // === HTTP errors ===
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{method} {path} returned status {status}")]
    UnexpectedStatus {
        method: &'static str,
        path: String,
        status: u16,
    },

    #[error("can't decode {what} reply: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: reqwest::Error,
    },

    // === Cloud resolution errors ===
    #[error("unknown cloud {domain} ({region})")]
    CloudNotFound { domain: String, region: String },

    // === Run outcome ===
    #[error("run {id} finished with {failed} failed test(s)")]
    SuiteFailed { id: String, failed: u64 },

    // === Configuration errors ===
    #[error("failed to read config file '{path}': {error}")]
    ConfigRead { path: String, error: String },

    #[error("invalid config file: {0}")]
    ConfigParse(String),

    // === IO errors ===
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an unexpected-status error for a request
    pub fn unexpected_status(method: &'static str, path: &str, status: u16) -> Self {
        Self::UnexpectedStatus {
            method,
            path: path.to_string(),
            status,
        }
    }

    /// Create a cloud-not-found error for a (domain, region) pair
    pub fn cloud_not_found(domain: &str, region: &str) -> Self {
        Self::CloudNotFound {
            domain: domain.to_string(),
            region: region.to_string(),
        }
    }
}
