//! MIME type detection from a filename extension.
//!
//! Used when a base64 upload asks for auto-detection instead of naming its
//! content type explicitly.

/// MIME type used when detection finds no match.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Detect a MIME type from the extension of `file_name`.
///
/// The extension is everything after the last `.`, compared
/// case-insensitively. A filename with no extension, or with an extension
/// outside the table, falls back to `application/octet-stream`.
pub fn detect_mime_type(file_name: &str) -> &'static str {
    let ext = match file_name.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => return FALLBACK_MIME,
    };

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "json" => "application/json",
        "xml" => "application/xml",
        "zip" => "application/zip",
        "mp4" => "video/mp4",
        "mp3" => "audio/mpeg",
        _ => FALLBACK_MIME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_jpeg() {
        assert_eq!(detect_mime_type("photo.jpg"), "image/jpeg");
        assert_eq!(detect_mime_type("photo.jpeg"), "image/jpeg");
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert_eq!(detect_mime_type("photo.JPG"), "image/jpeg");
        assert_eq!(detect_mime_type("DATA.Json"), "application/json");
    }

    #[test]
    fn uses_last_extension() {
        assert_eq!(detect_mime_type("archive.tar.zip"), "application/zip");
    }

    #[test]
    fn no_extension_falls_back() {
        assert_eq!(detect_mime_type("README"), FALLBACK_MIME);
    }

    #[test]
    fn unknown_extension_falls_back() {
        assert_eq!(detect_mime_type("file.xyz"), FALLBACK_MIME);
    }
}
