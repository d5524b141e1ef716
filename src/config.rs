//! Client configuration.
//!
//! The hosting service lives at a fixed public URL; the base URL is only
//! overridable so tests can point the client at a local mock server, via
//! the `UPLOADTOURL_BASE_URL` environment variable or an explicit value.

/// Default base URL of the hosting service.
pub const DEFAULT_BASE_URL: &str = "https://uploadtourl.com";

/// Path of the upload endpoint, relative to the base URL.
pub const UPLOAD_PATH: &str = "/api/upload";

/// Path of the API key verification endpoint, relative to the base URL.
pub const VERIFY_PATH: &str = "/api/api-key/verify";

/// Configuration for an [`Uploader`](crate::Uploader).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploaderConfig {
    /// Base URL of the hosting service, without a trailing slash
    pub base_url: String,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl UploaderConfig {
    /// Load the configuration, honoring the `UPLOADTOURL_BASE_URL` override.
    pub fn from_env() -> Self {
        match std::env::var("UPLOADTOURL_BASE_URL") {
            Ok(base_url) if !base_url.is_empty() => Self { base_url },
            _ => Self::default(),
        }
    }

    /// Full URL of the upload endpoint.
    pub fn upload_url(&self) -> String {
        format!("{}{}", self.base_url, UPLOAD_PATH)
    }

    /// Full URL of the API key verification endpoint.
    pub fn verify_url(&self) -> String {
        format!("{}{}", self.base_url, VERIFY_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_urls() {
        let config = UploaderConfig::default();
        assert_eq!(config.upload_url(), "https://uploadtourl.com/api/upload");
        assert_eq!(
            config.verify_url(),
            "https://uploadtourl.com/api/api-key/verify"
        );
    }

    #[test]
    fn custom_base_url() {
        let config = UploaderConfig {
            base_url: "http://127.0.0.1:8080".to_string(),
        };
        assert_eq!(config.upload_url(), "http://127.0.0.1:8080/api/upload");
    }

    // All three env states live in one test because the variable is
    // process-global and tests run in parallel.
    #[test]
    fn from_env_reads_base_url_override() {
        std::env::set_var("UPLOADTOURL_BASE_URL", "http://localhost:9999");
        assert_eq!(
            UploaderConfig::from_env().base_url,
            "http://localhost:9999"
        );

        // An empty value is treated as unset.
        std::env::set_var("UPLOADTOURL_BASE_URL", "");
        assert_eq!(UploaderConfig::from_env(), UploaderConfig::default());

        std::env::remove_var("UPLOADTOURL_BASE_URL");
        assert_eq!(UploaderConfig::from_env(), UploaderConfig::default());
    }
}
