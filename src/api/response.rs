//! Response envelopes shared by every endpoint.

use serde::Serialize;

/// Success envelope: `{"data": ...}`
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T: Serialize> {
    /// Response payload
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    /// Wraps `data` in the success envelope.
    pub const fn new(data: T) -> Self {
        Self { data }
    }
}

/// Error envelope: `{"error": "..."}`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl ErrorResponse {
    /// Wraps `error` in the error envelope.
    #[must_use]
    pub const fn new(error: String) -> Self {
        Self { error }
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// Always `"ok"` while the process is serving
    pub status: &'static str,
}
