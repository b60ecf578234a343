use serde::{Deserialize, Serialize};

use crate::types::Endpoint;

/// Unified error type for all backend calls.
///
/// Each variant carries the [`Endpoint`] that produced it. Variants fall into
/// two kinds that callers surface differently:
///
/// - **Service errors** ([`Service`](Self::Service)): the backend answered
///   with a non-success status and a structured body. The message is meant to
///   be shown to the user verbatim.
/// - **Transport errors** ([`Network`](Self::Network), [`Parse`](Self::Parse)):
///   the request never completed, or the body could not be understood. Users
///   get a generic "could not connect" message for these.
///
/// [`InvalidUrl`](Self::InvalidUrl) and [`ClientInit`](Self::ClientInit) only
/// occur while constructing a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum BackendError {
    /// Non-2xx response with a JSON body.
    Service {
        endpoint: Endpoint,
        status: u16,
        /// The `error` field of the body, if present and non-empty.
        message: Option<String>,
    },

    /// The request could not be sent or the response could not be read.
    Network { endpoint: Endpoint, detail: String },

    /// The response body was not the JSON shape the endpoint promises.
    Parse { endpoint: Endpoint, detail: String },

    /// The configured backend base URL is not usable.
    InvalidUrl { url: String, detail: String },

    /// The underlying HTTP client could not be built.
    ClientInit { detail: String },
}

impl BackendError {
    /// Whether this is a network or parse failure rather than an answer from the service.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Parse { .. })
    }

    /// Whether the error is an expected outcome (the service said no) rather than a fault.
    ///
    /// Used to pick the log level: `warn` when `true`, `error` otherwise.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Service { .. })
    }

    /// The endpoint the error came from, when there is one.
    #[must_use]
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            Self::Service { endpoint, .. }
            | Self::Network { endpoint, .. }
            | Self::Parse { endpoint, .. } => Some(*endpoint),
            Self::InvalidUrl { .. } | Self::ClientInit { .. } => None,
        }
    }
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Service {
                endpoint,
                status,
                message,
            } => {
                if let Some(msg) = message {
                    write!(f, "[{endpoint}] Service error (HTTP {status}): {msg}")
                } else {
                    write!(f, "[{endpoint}] Service error (HTTP {status})")
                }
            }
            Self::Network { endpoint, detail } => {
                write!(f, "[{endpoint}] Network error: {detail}")
            }
            Self::Parse { endpoint, detail } => {
                write!(f, "[{endpoint}] Parse error: {detail}")
            }
            Self::InvalidUrl { url, detail } => {
                write!(f, "Invalid backend URL '{url}': {detail}")
            }
            Self::ClientInit { detail } => {
                write!(f, "Failed to create HTTP client: {detail}")
            }
        }
    }
}

impl std::error::Error for BackendError {}

pub type Result<T> = std::result::Result<T, BackendError>;
