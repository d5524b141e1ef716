//! API key credentials for the hosting service.
//!
//! Every outbound request carries the key in the `x-api-key` header. The
//! service exposes a verification endpoint (`/api/api-key/verify`) that the
//! client can probe before running a batch; see
//! [`Uploader::verify_credentials`](crate::Uploader::verify_credentials).

use serde::{Deserialize, Serialize};

/// Header that carries the API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// A named credential set with a single secret field.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyCredentials {
    /// The secret API key
    #[serde(alias = "apiKey")]
    pub api_key: String,
}

impl ApiKeyCredentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

// Keep the key out of logs; only the length is useful for debugging.
impl std::fmt::Debug for ApiKeyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyCredentials")
            .field("api_key", &format!("<redacted, {} chars>", self.api_key.len()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_key() {
        let credentials = ApiKeyCredentials::new("super-secret-key");
        let rendered = format!("{:?}", credentials);
        assert!(!rendered.contains("super-secret-key"));
        assert!(rendered.contains("redacted"));
    }

    #[test]
    fn deserializes_camel_case_field() {
        let credentials: ApiKeyCredentials =
            serde_json::from_str(r#"{"apiKey": "abc123"}"#).unwrap();
        assert_eq!(credentials.api_key, "abc123");
    }
}
