//! HTTP layer - axum handlers, response envelopes and status mapping for `/api/v1/sections`.

/// Error type and status-code mapping
pub mod errors;
/// Endpoint handlers
pub mod handlers;
/// Success and error envelopes
pub mod response;
/// Router assembly and listener
pub mod router;

pub use errors::{ApiError, ApiResult};
pub use router::{API_PREFIX, router, serve};
