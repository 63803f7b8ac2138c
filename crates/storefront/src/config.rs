//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `LAREK_API_URL` - Catalog/order API base URL
//!   (default: `https://larek-api.nomoreparties.co/api/weblarek`)
//! - `LAREK_CDN_URL` - CDN base URL for product images
//!   (default: `https://larek-api.nomoreparties.co/content/weblarek`)

use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "https://larek-api.nomoreparties.co/api/weblarek";
const DEFAULT_CDN_URL: &str = "https://larek-api.nomoreparties.co/content/weblarek";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the catalog/order API.
    pub api_url: Url,
    /// Base URL of the image CDN.
    pub cdn_url: Url,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but is not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            api_url: get_url_or_default("LAREK_API_URL", DEFAULT_API_URL)?,
            cdn_url: get_url_or_default("LAREK_CDN_URL", DEFAULT_CDN_URL)?,
        })
    }
}

/// Parse an environment variable as a URL, falling back to `default`.
fn get_url_or_default(key: &str, default: &str) -> Result<Url, ConfigError> {
    let value = std::env::var(key).unwrap_or_else(|_| default.to_owned());
    parse_base_url(&value).map_err(|e| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string()))
}

/// Parse a base URL, rejecting values a base cannot be joined onto.
fn parse_base_url(value: &str) -> Result<Url, url::ParseError> {
    let url = Url::parse(value)?;
    if url.cannot_be_a_base() {
        return Err(url::ParseError::RelativeUrlWithoutBase);
    }
    Ok(url)
}
