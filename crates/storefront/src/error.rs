//! Unified error handling.
//!
//! Shopper-facing problems (an empty-cart checkout, a malformed product
//! card) are not errors: they surface as notices or as rejected input on the
//! page update. `StorefrontError` covers what the page cannot recover from.

use thiserror::Error;

use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A view template failed to render.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
