//! Error types for the alertctl-client crate.

use thiserror::Error;

/// Errors produced by the alert-definition API client.
///
/// Transport-level failures ([`Network`](Self::Network),
/// [`Timeout`](Self::Timeout)) are fatal to a run and never retried.
/// [`Api`](Self::Api) is an application-level failure: the service answered
/// with a well-formed body carrying a top-level `error` key, and callers may
/// account for it per item instead of aborting.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A network-level failure (DNS resolution, connection refused, TLS).
    #[error("network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The request timed out.
    #[error("request timed out: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The service reported an application-level error.
    #[error("service error: {message}")]
    Api {
        /// The `error` value from the response body.
        message: String,
    },

    /// The response body could not be parsed as the expected payload.
    #[error("unexpected response: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to initialize HTTP client: {detail}")]
    Init {
        /// Error details.
        detail: String,
    },
}

impl ClientError {
    /// Whether this is a transport-level failure that must abort the run.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }

    pub(crate) fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                detail: err.to_string(),
            }
        } else {
            Self::Network {
                detail: err.to_string(),
            }
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
