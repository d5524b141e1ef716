//! Client library for the Upload to URL file hosting API.
//!
//! This crate takes a file from an upstream workflow step — raw bytes or a
//! base64 string — uploads it to the hosting service, and returns the
//! resulting public URL metadata. It provides:
//! - An input resolver that normalizes either source mode into bytes,
//!   filename, and content type
//! - A single-part `multipart/form-data` encoder with a random boundary
//! - A sequential batch orchestrator with per-item failure isolation
//! - An HTTP capability trait with production (`reqwest`) and mock
//!   implementations
//!
//! # Example
//! ```ignore
//! use std::sync::Arc;
//! use uploadtourl::{
//!     ApiKeyCredentials, ReqwestHttpClient, Uploader, UploaderConfig, UploadRequest,
//! };
//!
//! let credentials = ApiKeyCredentials::new("my-api-key");
//! let http = Arc::new(ReqwestHttpClient::new(credentials));
//! let uploader = Uploader::new(http, UploaderConfig::default());
//!
//! uploader.verify_credentials().await?;
//! let results = uploader.run(items, /* continue_on_fail */ true).await?;
//! for result in &results {
//!     println!("item {}: {:?}", result.item_index, result.outcome);
//! }
//! ```

pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod mime;
pub mod multipart;
pub mod request;
pub mod resolve;
pub mod uploader;

// Re-export commonly used types
pub use config::UploaderConfig;
pub use credentials::{ApiKeyCredentials, API_KEY_HEADER};
pub use error::{ItemError, Result, UploadError};
pub use http::{HttpClient, HttpResponse, MockHttpClient, ReqwestHttpClient};
pub use multipart::MultipartPayload;
pub use request::{
    Base64Payload, BinaryPayload, FileSource, MimeSpec, NormalizedFile, UploadOutcome,
    UploadRequest, UploadResult,
};
pub use resolve::resolve;
pub use uploader::Uploader;
