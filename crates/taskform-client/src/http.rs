//! reqwest-backed transport.

use async_trait::async_trait;
use reqwest::Client;
use taskform_core::binding::Method;
use taskform_core::transport::{ApiRequest, ApiResponse, Transport};
use taskform_core::{Result, TaskformError};

/// Production transport over a shared reqwest client.
///
/// No timeout, no retry, no content-type decoration beyond the client's
/// defaults. The JSON body goes out as the raw text the binder serialized.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        let builder = match request.body {
            Some(body) => builder.body(body),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| {
            TaskformError::transport(format!("request to {} failed: {}", request.url, e))
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TaskformError::transport(format!("reading response body: {}", e)))?;

        Ok(ApiResponse { status, body })
    }
}
