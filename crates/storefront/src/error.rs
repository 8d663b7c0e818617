//! Unified error handling.
//!
//! Provides a unified `StorefrontError` type for callers that drive several
//! storefront concerns at once (the CLI, embedding front ends). The cart store
//! itself never fails; these errors come from configuration, catalog loading,
//! product and review validation, and direct storage access.

use thiserror::Error;

use crate::catalog::{CatalogError, ProductError, ReviewError};
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Storage backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Catalog data was unusable.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A review broke the submission rules.
    #[error("Review rejected: {0}")]
    Review(#[from] ReviewError),

    /// A new product broke the creation rules.
    #[error("Product rejected: {0}")]
    Product(#[from] ProductError),

    /// Reading a local file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorefrontError {
    /// Whether the caller can fix this by changing their input.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Review(_) | Self::Product(_) | Self::Catalog(CatalogError::NotFound(_))
        )
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
