//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SHOPFRONT_DATA_DIR` - Directory for file-backed storage (default: `.shopfront`)
//! - `SHOPFRONT_SHIPPING_FEE` - Flat shipping fee for non-empty carts (default: 50)
//! - `SHOPFRONT_PAGE_SIZE` - Products per catalog page (default: 20)
//! - `SHOPFRONT_CURRENCY` - Display currency code (default: INR)

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use shopfront_core::CurrencyCode;
use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".shopfront";
const DEFAULT_SHIPPING_FEE: i64 = 50;
const DEFAULT_PAGE_SIZE: usize = 20;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    /// Directory holding one JSON file per persisted list
    pub data_dir: PathBuf,
    /// Flat shipping fee charged when the cart subtotal is positive
    pub shipping_fee: Decimal,
    /// Products per catalog page
    pub page_size: usize,
    /// Currency used to display prices
    pub currency: CurrencyCode,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            shipping_fee: Decimal::from(DEFAULT_SHIPPING_FEE),
            page_size: DEFAULT_PAGE_SIZE,
            currency: CurrencyCode::default(),
        }
    }
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let data_dir = lookup("SHOPFRONT_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map_or(defaults.data_dir, PathBuf::from);

        let shipping_fee: Decimal =
            parse_or(&lookup, "SHOPFRONT_SHIPPING_FEE", defaults.shipping_fee)?;
        if shipping_fee.is_sign_negative() {
            return Err(ConfigError::InvalidEnvVar(
                "SHOPFRONT_SHIPPING_FEE".to_string(),
                "must not be negative".to_string(),
            ));
        }

        let page_size: usize = parse_or(&lookup, "SHOPFRONT_PAGE_SIZE", defaults.page_size)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "SHOPFRONT_PAGE_SIZE".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        let currency: CurrencyCode = parse_or(&lookup, "SHOPFRONT_CURRENCY", defaults.currency)?;

        Ok(Self {
            data_dir,
            shipping_fee,
            page_size,
            currency,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an optional variable, falling back to `default` when unset.
fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}
