//! HTTP clients for the `/api/library` backend.
//!
//! [`ApiClient`] is the shared transport: it owns the `reqwest::Client`,
//! the API origin, and turns every response into `Result<T, ApiError>`.
//! The admin and viewer clients sit on top of it and decide what a
//! failure means for their callers.

pub mod admin;
pub mod filter;
pub mod viewer;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ResolvedConfig;
use crate::error::{ApiError, Result};

pub use admin::{AdminClient, DeleteAck};
pub use filter::MaterialFilter;
pub use viewer::ViewerClient;

/// Header that makes the tunnelling proxy skip its browser warning page
pub const TUNNEL_WARNING_HEADER: &str = "ngrok-skip-browser-warning";

pub const UPLOAD_PATH: &str = "/api/library/upload";
pub const MATERIALS_PATH: &str = "/api/library/materials";
pub const SUBJECTS_PATH: &str = "/api/library/subjects";
pub const LEVELS_PATH: &str = "/api/library/levels";

/// Path of a single material
pub fn material_path(id: i64) -> String {
    format!("{}/{}", MATERIALS_PATH, id)
}

/// Path of the stats for a subject
pub fn stats_path(subject: &str) -> String {
    format!("/api/library/stats/{}", urlencoding::encode(subject))
}

/// Shared HTTP transport
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Origin without trailing slash
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a client for an origin with default settings
    pub fn new(base_url: &str) -> Result<Self> {
        Self::from_config(&ResolvedConfig::default().with_base_url(base_url))
    }

    /// Create from config
    pub fn from_config(config: &ResolvedConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        match Url::parse(&base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(ApiError::InvalidBaseUrl(config.base_url.clone())),
        }

        let mut headers = HeaderMap::new();
        if config.skip_tunnel_warning {
            headers.insert(TUNNEL_WARNING_HEADER, HeaderValue::from_static("true"));
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|source| ApiError::Request {
            operation: "build HTTP client",
            source,
        })?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path (and optional query string)
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request against a backend path
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!(%method, %url, "Library API request");
        self.client.request(method, url)
    }

    /// Send a request and decode a JSON body from a 2xx response
    pub async fn send<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Request { operation, source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                operation,
                status,
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { operation, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(material_path(42), "/api/library/materials/42");
        assert_eq!(stats_path("worldHistory"), "/api/library/stats/worldHistory");
        assert_eq!(stats_path("a b"), "/api/library/stats/a%20b");
    }

    #[test]
    fn test_url_strips_trailing_slash() {
        let api = ApiClient::new("https://abc.ngrok-free.app/").unwrap();
        assert_eq!(api.base_url(), "https://abc.ngrok-free.app");
        assert_eq!(
            api.url(MATERIALS_PATH),
            "https://abc.ngrok-free.app/api/library/materials"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            ApiClient::new("localhost:8000"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            ApiClient::new("ftp://files.example.com"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }
}
