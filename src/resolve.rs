//! Input resolver: turns an [`UploadRequest`] into a [`NormalizedFile`].
//!
//! Binary inputs pass through with their declared metadata; base64 inputs
//! are stripped of an optional data-URI prefix, decoded, and assigned a
//! content type according to their [`MimeSpec`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Result, UploadError};
use crate::mime::detect_mime_type;
use crate::request::{Base64Payload, BinaryPayload, FileSource, MimeSpec, NormalizedFile, UploadRequest};

/// Filename used when the binary source metadata omits one.
pub const DEFAULT_FILE_NAME: &str = "file";

/// Resolve a request into bytes, filename, and content type.
///
/// # Errors
/// - [`UploadError::Validation`] when a required mode-specific field is
///   missing or empty (no binary payload, empty base64 string, empty custom
///   MIME type)
/// - [`UploadError::Decode`] when the base64 text is malformed
pub fn resolve(request: &UploadRequest) -> Result<NormalizedFile> {
    match &request.source {
        FileSource::Binary(payload) => resolve_binary(payload),
        FileSource::Base64(payload) => resolve_base64(payload),
    }
}

fn resolve_binary(payload: &BinaryPayload) -> Result<NormalizedFile> {
    if payload.data.is_empty() {
        return Err(UploadError::Validation(
            "no binary data attached to the input item".to_string(),
        ));
    }

    let file_name = payload
        .file_name
        .clone()
        .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());

    tracing::debug!(
        file_name = %file_name,
        content_type = %payload.mime_type,
        size = payload.data.len(),
        "Resolved binary input"
    );

    Ok(NormalizedFile {
        bytes: payload.data.clone(),
        file_name,
        content_type: payload.mime_type.clone(),
    })
}

fn resolve_base64(payload: &Base64Payload) -> Result<NormalizedFile> {
    if payload.data.is_empty() {
        return Err(UploadError::Validation(
            "base64 data is empty".to_string(),
        ));
    }

    let content_type = match &payload.mime {
        MimeSpec::Auto => detect_mime_type(&payload.file_name).to_string(),
        MimeSpec::Explicit(value) => value.clone(),
        MimeSpec::Custom(value) => {
            if value.is_empty() {
                return Err(UploadError::Validation(
                    "custom MIME type is empty".to_string(),
                ));
            }
            value.clone()
        }
    };

    let cleaned = strip_data_uri_prefix(&payload.data);
    let bytes = STANDARD.decode(cleaned)?;

    tracing::debug!(
        file_name = %payload.file_name,
        content_type = %content_type,
        size = bytes.len(),
        "Resolved base64 input"
    );

    Ok(NormalizedFile {
        bytes,
        file_name: payload.file_name.clone(),
        content_type,
    })
}

/// Strip one leading `data:<mediatype>;base64,` prefix, if present.
///
/// The `data:` and `;base64,` tokens are matched case-sensitively and the
/// mediatype must be non-empty; anything else is returned unchanged, since
/// a prefix-less payload is not an error.
fn strip_data_uri_prefix(input: &str) -> &str {
    let Some(rest) = input.strip_prefix("data:") else {
        return input;
    };
    let Some(semi) = rest.find(';') else {
        return input;
    };
    match rest[semi..].strip_prefix(";base64,") {
        Some(payload) if semi > 0 => payload,
        _ => input,
    }
}
