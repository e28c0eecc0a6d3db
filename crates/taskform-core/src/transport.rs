//! Transport contract between bindings and the network.
//!
//! The runtime only ever sees this trait, so the HTTP client is swappable: a
//! recording mock in tests, a real client in production.

use crate::Result;
use crate::binding::Method;
use async_trait::async_trait;

/// A single outgoing request, body already serialized to JSON text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute URL, base already resolved.
    pub url: String,
    /// UTF-8 JSON body, sent verbatim. `None` for body-less requests.
    pub body: Option<String>,
}

/// What arrives back: the status code and the raw body text.
///
/// Arrival is success as far as a binding is concerned; the status is carried
/// only so the runtime can log it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// An abstract one-shot HTTP exchange.
///
/// No timeout, no retry, no cancellation: the exchange either resolves to a
/// response or fails with a transport error. Nothing coordinates concurrent
/// sends.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one exchange. An error means the request never resolved.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}
