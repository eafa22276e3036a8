//! Error types for the HTTP client layer.

use taxjar::ErrorResponse;
use taxjar::ValidationError;

/// Errors surfaced by [`Client`](crate::Client) operations.
///
/// [`Error::Config`] and [`Error::Validation`] are raised before any
/// network I/O and are never retryable. [`Error::Api`] carries the
/// decoded remote error envelope; the caller decides whether to retry.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The client configuration is unusable; raised at construction.
    #[error("{0}")]
    Config(String),

    /// The request failed structural validation before being sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The service answered with a non-2xx status and a decodable
    /// error envelope.
    #[error("{} - {}", response.error, response.detail.as_deref().unwrap_or_default())]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Decoded error envelope.
        response: ErrorResponse,
    },

    /// A response body could not be decoded into the expected shape.
    #[error("failed to decode response body: {source}")]
    Decode {
        /// HTTP status code of the response.
        status: u16,
        /// Raw body text as received.
        body: String,
        /// Underlying decode failure.
        source: serde_json::Error,
    },

    /// The request exceeded the configured timeout or was cancelled
    /// in flight.
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The request failed at the transport level before a response
    /// was received.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// A request body could not be serialized.
    #[error("failed to serialize request: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status code of the failed call, when one was received.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The decoded remote error envelope, when the call reached the
    /// service and the failure body was decodable.
    #[must_use]
    pub fn api_response(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Api { response, .. } => Some(response),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Transport(err)
        }
    }
}
