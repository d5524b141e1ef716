//! Multipart encoder: wraps a [`NormalizedFile`] in a single-part
//! `multipart/form-data` body.
//!
//! The boundary is a fixed literal prefix plus a random 128-bit hex suffix.
//! The file bytes are not scanned for the boundary; with 122 bits of
//! entropy an accidental collision is astronomically unlikely, and a file
//! that does contain the boundary is silently misframed rather than
//! rejected. Filenames are likewise not escaped, so a filename containing a
//! double quote or CRLF corrupts the header framing.

use uuid::Uuid;

use crate::request::NormalizedFile;

/// Literal prefix of every generated boundary.
pub const BOUNDARY_PREFIX: &str = "----UploadToUrlBoundary";

/// The form field name the hosting API expects the file under.
pub const FILE_FIELD_NAME: &str = "file";

/// A fully assembled multipart request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartPayload {
    /// The boundary token separating the body's parts
    pub boundary: String,

    /// header + file bytes + footer, ready to send as the request body
    pub body: Vec<u8>,
}

impl MultipartPayload {
    /// Value for the request's `Content-Type` header.
    pub fn content_type_header(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }
}

/// Encode a normalized file as a single-part multipart body.
pub fn encode(file: &NormalizedFile) -> MultipartPayload {
    let boundary = format!("{}{}", BOUNDARY_PREFIX, Uuid::new_v4().simple());

    let header = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"{FILE_FIELD_NAME}\"; filename=\"{}\"\r\n\
         Content-Type: {}\r\n\
         \r\n",
        file.file_name, file.content_type,
    );
    let footer = format!("\r\n--{boundary}--\r\n");

    let mut body = Vec::with_capacity(header.len() + file.bytes.len() + footer.len());
    body.extend_from_slice(header.as_bytes());
    body.extend_from_slice(&file.bytes);
    body.extend_from_slice(footer.as_bytes());

    tracing::debug!(
        boundary = %boundary,
        body_len = body.len(),
        file_len = file.bytes.len(),
        "Encoded multipart payload"
    );

    MultipartPayload { boundary, body }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_file() -> NormalizedFile {
        NormalizedFile {
            bytes: b"\x89PNG fake image bytes".to_vec(),
            file_name: "pixel.png".to_string(),
            content_type: "image/png".to_string(),
        }
    }

    #[test]
    fn body_layout_is_exact() {
        let file = sample_file();
        let payload = encode(&file);

        let expected_header = format!(
            "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"pixel.png\"\r\nContent-Type: image/png\r\n\r\n",
            payload.boundary
        );
        let expected_footer = format!("\r\n--{}--\r\n", payload.boundary);

        assert!(payload.body.starts_with(expected_header.as_bytes()));
        assert!(payload.body.ends_with(expected_footer.as_bytes()));
        assert_eq!(
            payload.body.len(),
            expected_header.len() + file.bytes.len() + expected_footer.len()
        );

        // The raw bytes sit between header and footer, unmodified.
        let middle = &payload.body[expected_header.len()..payload.body.len() - expected_footer.len()];
        assert_eq!(middle, file.bytes.as_slice());
    }

    #[test]
    fn content_type_header_names_the_boundary() {
        let payload = encode(&sample_file());
        assert_eq!(
            payload.content_type_header(),
            format!("multipart/form-data; boundary={}", payload.boundary)
        );
    }

    #[test]
    fn boundary_has_prefix_and_random_suffix() {
        let a = encode(&sample_file());
        let b = encode(&sample_file());
        assert!(a.boundary.starts_with(BOUNDARY_PREFIX));
        assert!(a.boundary.len() > BOUNDARY_PREFIX.len());
        assert_ne!(a.boundary, b.boundary);
        assert!(a.boundary[BOUNDARY_PREFIX.len()..]
            .chars()
            .all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn empty_file_still_frames_correctly() {
        let file = NormalizedFile {
            bytes: Vec::new(),
            file_name: "empty.txt".to_string(),
            content_type: "text/plain".to_string(),
        };
        let payload = encode(&file);
        let body = String::from_utf8(payload.body).unwrap();
        assert!(body.contains("filename=\"empty.txt\""));
        assert!(body.ends_with(&format!("\r\n--{}--\r\n", payload.boundary)));
    }
}
