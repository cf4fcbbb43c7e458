//! HTTP client implementation using reqwest

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::http::{TextGenerator, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::providers::{EnhanceError, EnhanceResult, ProviderAdapter};
use crate::resume::ResumeRecord;

/// Default user agent
const USER_AGENT: &str = "curriculo/0.1.0";

/// Shared HTTP client with connection pooling
#[derive(Clone)]
pub struct HttpClient {
    client: Arc<Client>,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> EnhanceResult<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
    }

    /// Create a new HTTP client with a custom request timeout
    pub fn with_timeout(request_timeout: Duration) -> EnhanceResult<Self> {
        let client = ClientBuilder::new()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .connect_timeout(Duration::from_secs(10))
            .timeout(request_timeout)
            .user_agent(USER_AGENT)
            .gzip(true)
            .build()
            .map_err(|e| EnhanceError::Request {
                status: None,
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client: Arc::new(client),
        })
    }
}

#[async_trait]
impl TextGenerator for HttpClient {
    async fn generate(
        &self,
        adapter: &dyn ProviderAdapter,
        credential: &str,
        record: &ResumeRecord,
    ) -> EnhanceResult<String> {
        let request_id = Uuid::new_v4();
        let provider_request = adapter.build_request(credential, record);

        info!(
            "Sending enhancement request to {} [request_id: {}]",
            adapter.name(),
            request_id
        );
        debug!("Request URL: {}", provider_request.url);

        let mut req_builder = self
            .client
            .post(&provider_request.url)
            .json(&provider_request.body);
        for (key, value) in provider_request.headers {
            req_builder = req_builder.header(key, value);
        }
        req_builder = req_builder.header("X-Request-ID", request_id.to_string());

        let response = req_builder.send().await.map_err(|e| {
            warn!(
                "Request error for {} [request_id: {}]: {}",
                adapter.name(),
                request_id,
                e
            );
            EnhanceError::from(e)
        })?;

        let status = response.status();
        debug!("Response status: {} [request_id: {}]", status, request_id);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                "Request failed with status {} for {} [request_id: {}]",
                status,
                adapter.name(),
                request_id
            );
            return Err(EnhanceError::Request {
                status: Some(status.as_u16()),
                message: if body.is_empty() {
                    format!("HTTP error {}", status.as_u16())
                } else {
                    body
                },
            });
        }

        let body: serde_json::Value =
            response.json().await.map_err(|e| EnhanceError::Request {
                status: Some(status.as_u16()),
                message: format!("failed to read response body: {e}"),
            })?;

        let text = adapter.extract_text(&body)?;
        if text.trim().is_empty() {
            return Err(EnhanceError::Request {
                status: Some(status.as_u16()),
                message: "empty response body".to_string(),
            });
        }

        info!(
            "Request completed for {} [request_id: {}]",
            adapter.name(),
            request_id
        );
        Ok(text)
    }
}
