//! Unified application error type.
//!
//! Validation failures are not here on purpose: they are non-exceptional
//! data, surfaced as [`crate::state::FormErrors`] and rendered inline.

use thiserror::Error;
use web_larek_core::ProductId;

use crate::api::ApiError;
use crate::config::ConfigError;

/// Application-level error type for the storefront core.
#[derive(Debug, Error)]
pub enum AppError {
    /// Product id not present in the catalog. Ids come from user-selected
    /// UI elements, so this should never occur; callers log and ignore.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// Catalog or order API call failed. Terminal for that one operation;
    /// the user can retry by re-triggering the same action.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
