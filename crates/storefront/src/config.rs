//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_CURRENCY` - ISO 4217 code used for the price prefix (default: TWD)
//! - `STOREFRONT_LOCALE` - Locale name for thousands grouping (default: en)
//! - `STOREFRONT_SHOP_NAME` - Shop name used in the checkout confirmation (default: GENAE)

use genae_core::CurrencyCode;
pub use num_format::Locale;
use thiserror::Error;

const DEFAULT_CURRENCY: &str = "TWD";
const DEFAULT_LOCALE: &str = "en";
const DEFAULT_SHOP_NAME: &str = "GENAE";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Currency whose symbol prefixes every displayed amount
    pub currency: CurrencyCode,
    /// Locale used to group digits in displayed amounts
    pub locale: Locale,
    /// Shop name shown in the checkout confirmation
    pub shop_name: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            locale: Locale::en,
            shop_name: DEFAULT_SHOP_NAME.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unsupported value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let currency = parse_currency(
            "STOREFRONT_CURRENCY",
            &get_env_or_default("STOREFRONT_CURRENCY", DEFAULT_CURRENCY),
        )?;
        let locale = parse_locale(
            "STOREFRONT_LOCALE",
            &get_env_or_default("STOREFRONT_LOCALE", DEFAULT_LOCALE),
        )?;
        let shop_name = parse_shop_name(
            "STOREFRONT_SHOP_NAME",
            &get_env_or_default("STOREFRONT_SHOP_NAME", DEFAULT_SHOP_NAME),
        )?;

        Ok(Self {
            currency,
            locale,
            shop_name,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_currency(key: &str, value: &str) -> Result<CurrencyCode, ConfigError> {
    value
        .parse::<CurrencyCode>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e))
}

fn parse_locale(key: &str, value: &str) -> Result<Locale, ConfigError> {
    Locale::from_name(value.trim())
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

fn parse_shop_name(key: &str, value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "cannot be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
