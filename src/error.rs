//! Error types for the ESPN API client

use thiserror::Error;


pub type Result<T> = std::result::Result<T, EspnError>;

/// Errors surfaced by the client.
///
/// The HTTP-derived kinds are produced only at the request façade when a
/// non-success status (or a transport failure) is observed; they carry the
/// resolved endpoint path and the raw response body for diagnostics. Errors
/// are never retried or suppressed — callers branch on the kind.
#[derive(Error, Debug)]
pub enum EspnError {
    #[error("rate limited by ESPN API at {endpoint}")]
    RateLimited {
        status: u16,
        endpoint: String,
        body: Option<String>,
    },

    #[error("resource not found: {endpoint}")]
    NotFound {
        endpoint: String,
        body: Option<String>,
    },

    #[error("ESPN API request failed at {endpoint}")]
    Api {
        /// `None` for transport-level failures (DNS, timeout, reset).
        status: Option<u16>,
        endpoint: String,
        body: Option<String>,
    },

    #[error("invalid client configuration: {message}")]
    Config { message: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl EspnError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Map a non-success HTTP status to its error kind.
    ///
    /// The kind is a pure function of the status code: 429 is rate-limited,
    /// 404 is not-found, everything else is a generic API failure.
    pub fn from_status(status: u16, endpoint: impl Into<String>, body: Option<String>) -> Self {
        let endpoint = endpoint.into();
        match status {
            429 => Self::RateLimited {
                status,
                endpoint,
                body,
            },
            404 => Self::NotFound { endpoint, body },
            _ => Self::Api {
                status: Some(status),
                endpoint,
                body,
            },
        }
    }

    /// Wrap a transport-level failure (no HTTP status was observed).
    pub fn transport(endpoint: impl Into<String>, source: &reqwest::Error) -> Self {
        Self::Api {
            status: None,
            endpoint: endpoint.into(),
            body: Some(source.to_string()),
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// HTTP status code, if one was observed.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RateLimited { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            Self::Api { status, .. } => *status,
            _ => None,
        }
    }

    /// Endpoint path the failing request resolved to, if any.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::RateLimited { endpoint, .. }
            | Self::NotFound { endpoint, .. }
            | Self::Api { endpoint, .. } => Some(endpoint),
            _ => None,
        }
    }
}
