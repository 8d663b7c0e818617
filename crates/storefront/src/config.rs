//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_BASE_URL` - Public URL of the catalog API, used to resolve
//!   relative links such as product images
//! - `STOREFRONT_PUBLIC_HOST` - Deployment host name, used as
//!   `https://<host>` when `STOREFRONT_BASE_URL` is unset
//! - `STOREFRONT_CART_DIR` - Directory for file-backed cart storage (default: .viriot)
//! - `STOREFRONT_CART_KEY` - Storage key of the cart snapshot (default: cart)
//! - `STOREFRONT_CATALOG` - Path to a catalog JSON file
//!
//! With neither URL variable set the base URL is `http://localhost:3000`.

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

use crate::storage::{self, keys};

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_CART_DIR: &str = ".viriot";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set to an unusable value.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Public base URL of the catalog API (no trailing slash)
    pub base_url: String,
    /// Cart persistence settings
    pub cart: CartConfig,
    /// Catalog JSON file, if one is configured
    pub catalog_path: Option<PathBuf>,
}

/// Where the cart snapshot lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Directory holding snapshot files
    pub dir: PathBuf,
    /// Storage key of the snapshot
    pub key: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_CART_DIR),
            key: keys::CART.to_string(),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cart: CartConfig::default(),
            catalog_path: None,
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
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);

        let base_url = resolve_base_url(&env)?;
        let cart = CartConfig::from_env(&env)?;
        let catalog_path = env.optional("STOREFRONT_CATALOG").map(PathBuf::from);

        Ok(Self {
            base_url,
            cart,
            catalog_path,
        })
    }

    /// Absolute form of a catalog link.
    ///
    /// Links starting with `/` (such as a product's `imageUrl`) are joined to
    /// the base URL. Anything else is returned unchanged.
    #[must_use]
    pub fn resolve_url(&self, link: &str) -> String {
        if link.starts_with('/') {
            format!("{}{link}", self.base_url)
        } else {
            link.to_owned()
        }
    }

    /// Catalog path, or an error naming the variable to set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if no catalog is configured.
    pub fn require_catalog_path(&self) -> Result<&PathBuf, ConfigError> {
        self.catalog_path
            .as_ref()
            .ok_or_else(|| ConfigError::MissingEnvVar("STOREFRONT_CATALOG".to_string()))
    }
}

impl CartConfig {
    fn from_env<F: Fn(&str) -> Option<String>>(env: &Env<F>) -> Result<Self, ConfigError> {
        let dir = PathBuf::from(env.or_default("STOREFRONT_CART_DIR", DEFAULT_CART_DIR));
        let key = env.or_default("STOREFRONT_CART_KEY", keys::CART);
        storage::validate_key(&key).map_err(|e| {
            ConfigError::InvalidEnvVar("STOREFRONT_CART_KEY".to_string(), e.to_string())
        })?;
        Ok(Self { dir, key })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Variable lookup with the usual accessors. Empty values count as unset.
struct Env<F>(F);

impl<F: Fn(&str) -> Option<String>> Env<F> {
    /// Get an optional variable.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|value| !value.trim().is_empty())
    }

    /// Get a variable with a default value.
    fn or_default(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_string())
    }
}

/// Pick the base URL: explicit URL, then deployment host, then localhost.
fn resolve_base_url<F: Fn(&str) -> Option<String>>(env: &Env<F>) -> Result<String, ConfigError> {
    let (var, raw) = if let Some(url) = env.optional("STOREFRONT_BASE_URL") {
        ("STOREFRONT_BASE_URL", url)
    } else if let Some(host) = env.optional("STOREFRONT_PUBLIC_HOST") {
        ("STOREFRONT_PUBLIC_HOST", format!("https://{host}"))
    } else {
        return Ok(DEFAULT_BASE_URL.to_string());
    };

    let parsed = Url::parse(&raw)
        .map_err(|e| ConfigError::InvalidEnvVar(var.to_string(), e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            var.to_string(),
            format!("unsupported scheme {}", parsed.scheme()),
        ));
    }

    Ok(raw.trim_end_matches('/').to_string())
}
