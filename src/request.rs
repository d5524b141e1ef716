//! Input and output types for a batch of uploads.
//!
//! An [`UploadRequest`] is a tagged variant over its source mode, so the
//! mode-specific fields are checked at compile time rather than carried as a
//! flat bag of optional fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single file to upload, in one of the two supported source modes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRequest {
    /// Where the file content comes from
    pub source: FileSource,
}

impl UploadRequest {
    /// Build a request from raw binary data.
    pub fn binary(payload: BinaryPayload) -> Self {
        Self {
            source: FileSource::Binary(payload),
        }
    }

    /// Build a request from a base64-encoded string.
    pub fn base64(payload: Base64Payload) -> Self {
        Self {
            source: FileSource::Base64(payload),
        }
    }
}

/// The source of a file's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FileSource {
    /// Raw bytes handed over by an upstream step
    Binary(BinaryPayload),
    /// A base64-encoded string, optionally carrying a data-URI prefix
    Base64(Base64Payload),
}

/// Raw binary input with its source metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryPayload {
    /// The file bytes
    pub data: Vec<u8>,

    /// Filename from the source metadata, if it supplied one
    pub file_name: Option<String>,

    /// MIME type declared by the source metadata, used verbatim
    pub mime_type: String,
}

/// Base64 text input with an explicit filename and MIME selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base64Payload {
    /// Base64-encoded file data, with or without a `data:...;base64,` prefix
    pub data: String,

    /// Name of the file (e.g. `document.pdf`)
    pub file_name: String,

    /// How to determine the content type
    pub mime: MimeSpec,
}

/// Content type selection for a base64 upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MimeSpec {
    /// Detect from the filename extension
    Auto,
    /// One of the service's enumerated MIME types, used verbatim
    Explicit(String),
    /// A caller-supplied literal (e.g. `application/vnd.ms-excel`)
    Custom(String),
}

/// Output of the input resolver: a file ready to be encoded.
///
/// Both strings are non-empty by construction; `bytes` is exactly the
/// decoded payload, with no truncation or padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFile {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
}

/// Per-item outcome of a batch run, paired with the item that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadResult {
    /// Index of the originating item in the input batch
    pub item_index: usize,

    #[serde(flatten)]
    pub outcome: UploadOutcome,
}

/// Success or captured failure for one item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UploadOutcome {
    /// The upload succeeded; `json` is the service response, passed through
    Completed { json: Value },

    /// The upload failed and the run was configured to continue
    Failed { error: String },
}

impl UploadResult {
    pub fn completed(item_index: usize, json: Value) -> Self {
        Self {
            item_index,
            outcome: UploadOutcome::Completed { json },
        }
    }

    pub fn failed(item_index: usize, error: impl Into<String>) -> Self {
        Self {
            item_index,
            outcome: UploadOutcome::Failed {
                error: error.into(),
            },
        }
    }

    /// Whether this item uploaded successfully.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, UploadOutcome::Completed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn result_serializes_with_status_tag() {
        let result = UploadResult::completed(0, json!({"url": "https://u.example/f"}));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["status"], "completed");
        assert_eq!(value["item_index"], 0);
        assert_eq!(value["json"]["url"], "https://u.example/f");

        let result = UploadResult::failed(3, "boom");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["status"], "failed");
        assert_eq!(value["error"], "boom");
    }

    #[test]
    fn source_round_trips_through_serde() {
        let request = UploadRequest::base64(Base64Payload {
            data: "aGVsbG8=".to_string(),
            file_name: "hello.txt".to_string(),
            mime: MimeSpec::Auto,
        });

        let encoded = serde_json::to_string(&request).unwrap();
        let decoded: UploadRequest = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, request);
    }
}
