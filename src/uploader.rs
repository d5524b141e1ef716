//! Upload orchestrator: runs a batch of upload requests in order.
//!
//! Each item is resolved, encoded, and posted before the next item begins;
//! the only suspension point is the network call. Per-item failures are
//! either captured into that item's result slot ("continue on fail") or
//! abort the run with the failing item's index attached.

use std::sync::Arc;

use serde_json::Value;

use crate::config::UploaderConfig;
use crate::error::{ItemError, Result, UploadError};
use crate::http::{HttpClient, HttpResponse};
use crate::multipart;
use crate::request::{UploadRequest, UploadResult};
use crate::resolve::resolve;

/// Runs batches of uploads through an injected [`HttpClient`].
///
/// The uploader holds no per-item state; every entity created while
/// processing one item is dropped before the next item starts.
pub struct Uploader<H: HttpClient> {
    http: Arc<H>,
    config: UploaderConfig,
}

impl<H: HttpClient> Uploader<H> {
    pub fn new(http: Arc<H>, config: UploaderConfig) -> Self {
        Self { http, config }
    }

    /// Get a reference to the HTTP client.
    pub fn http_client(&self) -> &Arc<H> {
        &self.http
    }

    /// Upload a batch of items sequentially.
    ///
    /// Returns one [`UploadResult`] per input item, in input order. With
    /// `continue_on_fail` set, any per-item failure (validation, decode,
    /// transport, response parsing) is rendered into that item's result and
    /// processing continues; otherwise the first failure aborts the run and
    /// no partial batch is returned.
    ///
    /// # Errors
    /// With `continue_on_fail` unset, an [`ItemError`] carrying the failing
    /// item's index.
    #[tracing::instrument(skip(self, items), fields(count = items.len(), continue_on_fail))]
    pub async fn run(
        &self,
        items: Vec<UploadRequest>,
        continue_on_fail: bool,
    ) -> std::result::Result<Vec<UploadResult>, ItemError> {
        let mut results = Vec::with_capacity(items.len());

        for (item_index, item) in items.iter().enumerate() {
            match self.upload_one(item).await {
                Ok(json) => {
                    tracing::info!(item_index, "Upload completed");
                    results.push(UploadResult::completed(item_index, json));
                }
                Err(source) if continue_on_fail => {
                    tracing::warn!(item_index, error = %source, "Item failed, continuing");
                    results.push(UploadResult::failed(item_index, source.to_string()));
                }
                Err(source) => {
                    tracing::error!(item_index, error = %source, "Item failed, aborting batch");
                    return Err(ItemError { item_index, source });
                }
            }
        }

        Ok(results)
    }

    /// Resolve, encode, and post a single item.
    async fn upload_one(&self, request: &UploadRequest) -> Result<Value> {
        let file = resolve(request)?;
        let payload = multipart::encode(&file);

        let content_type = payload.content_type_header();
        let response = self
            .http
            .authenticated_post(&self.config.upload_url(), payload.body, &content_type)
            .await?;

        parse_upload_response(response)
    }

    /// Check the configured API key against the verification endpoint.
    ///
    /// # Errors
    /// [`UploadError::Auth`] on any non-2xx response.
    pub async fn verify_credentials(&self) -> Result<()> {
        let response = self.http.authenticated_get(&self.config.verify_url()).await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(UploadError::Auth(format!(
                "API key verification failed with status {}",
                response.status
            )))
        }
    }
}

/// Turn an upload response into the service's JSON value.
///
/// The endpoint normally answers with a JSON object, but sometimes with a
/// JSON-encoded string; in that case the inner string is decoded once more
/// so callers always see the structured value.
fn parse_upload_response(response: HttpResponse) -> Result<Value> {
    if response.status == 401 || response.status == 403 {
        return Err(UploadError::Auth(format!(
            "upload rejected with status {}",
            response.status
        )));
    }
    if !response.is_success() {
        return Err(UploadError::Status {
            status: response.status,
            body: response.body,
        });
    }

    let value: Value = serde_json::from_str(&response.body)?;
    match value {
        Value::String(inner) => Ok(serde_json::from_str(&inner)?),
        structured => Ok(structured),
    }
}
