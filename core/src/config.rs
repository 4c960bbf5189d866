//! Client configuration.
//!
//! The API base URL is resolved once at process start and then passed around
//! by reference. Nothing in the crate reads the environment after that.

use std::env;

/// Base URL used when `STOREFRONT_API_URL` is unset or blank.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api/public";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "STOREFRONT_API_URL";

const PUBLIC_API_SUFFIX: &str = "/api/public";

/// Resolved API location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    api_base_url: String,
    backend_origin: String,
}

impl ApiConfig {
    /// Build a configuration from an explicit base URL.
    ///
    /// A single trailing `/` is trimmed. A blank URL falls back to
    /// [`DEFAULT_API_BASE`].
    pub fn new(api_base_url: &str) -> Self {
        let trimmed = api_base_url.trim();
        let base = if trimmed.is_empty() {
            DEFAULT_API_BASE
        } else {
            trimmed.strip_suffix('/').unwrap_or(trimmed)
        };
        let origin = base.strip_suffix(PUBLIC_API_SUFFIX).unwrap_or(base);
        Self {
            api_base_url: base.to_string(),
            backend_origin: origin.to_string(),
        }
    }

    /// Read `STOREFRONT_API_URL`, falling back to [`DEFAULT_API_BASE`].
    pub fn from_env() -> Self {
        match env::var(API_URL_ENV) {
            Ok(url) => Self::new(&url),
            Err(_) => Self::default(),
        }
    }

    /// Base URL for API paths, without a trailing slash.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Base URL with the `/api/public` suffix removed; relative asset paths
    /// are resolved against this.
    pub fn backend_origin(&self) -> &str {
        &self.backend_origin
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
