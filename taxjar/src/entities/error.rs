//! The error envelope returned on non-2xx responses.

use serde::{Deserialize, Serialize};

/// Structured error body: `{"error": ..., "detail": ..., "status": ...}`.
///
/// The `status` field is tolerant of string, number, or boolean encoding
/// on the wire and is normalized to a string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorResponse {
    /// Machine-readable error code, e.g. `"Unauthorized"`.
    pub error: String,

    /// Human-readable detail message.
    pub detail: Option<String>,

    /// HTTP status as reported in the body.
    #[serde(with = "crate::codec::polymorphic_string")]
    pub status: String,
}

impl ErrorResponse {
    /// Returns the body-reported status as a number, when parseable.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.status.parse().ok()
    }
}
