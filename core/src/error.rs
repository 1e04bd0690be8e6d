//! Error types for the film archive client.
//!
//! # Design
//! One variant per pipeline stage. `InvalidBaseUrl` and `Build` mean the
//! request never left the process; `Transport`, `Status` and `Decode` are
//! reported after the round trip. Each error is terminal for its call.

use std::fmt;

/// Errors returned by the query builder, transport, decoder, and service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The configured base URL is not an absolute http(s) URL.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    /// The request body could not be serialized.
    #[error("request could not be built: {0}")]
    Build(String),

    /// The network round trip did not complete.
    #[error("transport failed ({kind}): {message}")]
    Transport {
        kind: TransportFailure,
        message: String,
    },

    /// The server answered with a status outside 200..=399. `body` holds
    /// the response bytes unchanged.
    #[error("HTTP {status}: {}", String::from_utf8_lossy(.body))]
    Status { status: u16, body: Vec<u8> },

    /// The response body is not JSON or does not match the expected shape.
    #[error("response could not be decoded: {0}")]
    Decode(String),
}

/// Why a round trip failed before producing a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailure {
    Connect,
    Timeout,
    Cancelled,
    Other,
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransportFailure::Connect => "connect",
            TransportFailure::Timeout => "timeout",
            TransportFailure::Cancelled => "cancelled",
            TransportFailure::Other => "other",
        };
        f.write_str(label)
    }
}

impl ApiError {
    pub(crate) fn transport(kind: TransportFailure, message: impl Into<String>) -> Self {
        ApiError::Transport {
            kind,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportFailure::Timeout
        } else if err.is_connect() {
            TransportFailure::Connect
        } else {
            TransportFailure::Other
        };
        ApiError::transport(kind, err.to_string())
    }
}
