use thiserror::Error;

/// Result type for upload operations.
pub type Result<T> = std::result::Result<T, UploadError>;

/// Errors that can occur while resolving, encoding, or uploading a file.
#[derive(Debug, Error)]
pub enum UploadError {
    /// A required field was missing or empty
    #[error("Validation error: {0}")]
    Validation(String),

    /// The base64 payload could not be decoded
    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The API key was rejected by the hosting service
    #[error("Authentication error: {0}")]
    Auth(String),

    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upload endpoint returned a non-success status
    #[error("Upload failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not valid JSON
    #[error("Response parse error: {0}")]
    ResponseParse(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A failure tied to the batch item that produced it.
///
/// Returned when a run aborts instead of continuing on failure, so the
/// caller can report which input item caused the abort.
#[derive(Debug, Error)]
#[error("item {item_index}: {source}")]
pub struct ItemError {
    /// Index of the failing item in the input batch
    pub item_index: usize,
    #[source]
    pub source: UploadError,
}
