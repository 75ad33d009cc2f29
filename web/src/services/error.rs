use thiserror::Error;

/// Errors raised while talking to the backend or the geography service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Network, TLS, timeout or body decoding failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream answered with a non-2xx status.
    #[error("{endpoint} returned status {status}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid UF code '{0}'")]
    InvalidUf(String),

    #[error("upstream clients not initialized, call init_clients() first")]
    NotInitialized,
}
