//! HTTP client abstraction for talking to the hosting service.
//!
//! This module defines the `HttpClient` trait to abstract request execution,
//! enabling testability with mock implementations. Authentication is the
//! client's concern: implementations attach the `x-api-key` header so the
//! orchestrator never touches the credential.

use crate::credentials::{ApiKeyCredentials, API_KEY_HEADER};
use crate::error::{Result, UploadError};
use async_trait::async_trait;

/// Response from an HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as a string
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for executing authenticated requests against the hosting service.
///
/// The orchestrator depends on this capability rather than on a concrete
/// client, so tests can substitute a mock without network access. Retries,
/// timeouts, and backoff are implementation concerns; the orchestrator adds
/// none of its own.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// POST `body` to `url` with the given `Content-Type`, under the
    /// client's credential.
    ///
    /// # Errors
    /// Returns an error on transport-level failure (connection refused,
    /// timeout, invalid URL). A non-2xx response is not an error at this
    /// layer; callers inspect [`HttpResponse::status`].
    async fn authenticated_post(
        &self,
        url: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<HttpResponse>;

    /// GET `url` under the client's credential.
    async fn authenticated_get(&self, url: &str) -> Result<HttpResponse>;
}

// ============================================================================
// Production implementation using reqwest
// ============================================================================

/// Production HTTP client backed by [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    credentials: ApiKeyCredentials,
}

impl ReqwestHttpClient {
    /// Create a client that authenticates every request with `credentials`.
    pub fn new(credentials: ApiKeyCredentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    #[tracing::instrument(skip(self, body), fields(url = %url, body_len = body.len()))]
    async fn authenticated_post(
        &self,
        url: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<HttpResponse> {
        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.credentials.api_key)
            .header("Content-Type", content_type)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(url = %url, error = %e, "HTTP POST failed");
                e
            })?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(status, response_len = body.len(), "HTTP POST completed");

        Ok(HttpResponse { status, body })
    }

    #[tracing::instrument(skip(self), fields(url = %url))]
    async fn authenticated_get(&self, url: &str) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.credentials.api_key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(url = %url, error = %e, "HTTP GET failed");
                e
            })?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(status, response_len = body.len(), "HTTP GET completed");

        Ok(HttpResponse { status, body })
    }
}

// ============================================================================
// Test/mock implementation
// ============================================================================

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Mock HTTP client for testing.
///
/// Allows configuring predetermined responses per URL without making actual
/// HTTP calls, and records every call for assertion.
#[derive(Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, Vec<Result<HttpResponse>>>>>,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

/// Record of a call made to the mock HTTP client.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub method: String,
    pub url: String,
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predetermined response for a method and URL.
    ///
    /// The key is formatted as `"{method} {url}"`. Multiple responses can be
    /// added for the same key; they are returned in FIFO order.
    pub fn add_response(&self, key: &str, response: Result<HttpResponse>) {
        self.responses
            .lock()
            .entry(key.to_string())
            .or_default()
            .push(response);
    }

    /// Get all calls that have been made to this mock client.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().clone()
    }

    /// Get the number of calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    fn take_response(&self, method: &str, url: &str) -> Result<HttpResponse> {
        let key = format!("{} {}", method, url);
        let mut responses = self.responses.lock();

        if let Some(queue) = responses.get_mut(&key) {
            if !queue.is_empty() {
                return queue.remove(0);
            }
        }

        Err(UploadError::Internal(format!(
            "no mock response configured for {} {}",
            method, url
        )))
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn authenticated_post(
        &self,
        url: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<HttpResponse> {
        self.calls.lock().push(MockCall {
            method: "POST".to_string(),
            url: url.to_string(),
            body,
            content_type: Some(content_type.to_string()),
        });
        self.take_response("POST", url)
    }

    async fn authenticated_get(&self, url: &str) -> Result<HttpResponse> {
        self.calls.lock().push(MockCall {
            method: "GET".to_string(),
            url: url.to_string(),
            body: Vec::new(),
            content_type: None,
        });
        self.take_response("GET", url)
    }
}
