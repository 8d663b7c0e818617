//! Durable key-value storage for cart snapshots.
//!
//! The cart only needs two operations from its storage: read the snapshot
//! stored under a key, and overwrite it. Backends:
//!
//! - [`MemoryStorage`] - in-process map, used by tests and embedded front ends
//! - [`FileStorage`] - one JSON file per key under a directory

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("storage I/O error for key {key}: {source}")]
    Io {
        /// Key being read or written.
        key: String,
        /// The I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Key contains characters the backend cannot store.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Keys used for storefront state.
pub mod keys {
    /// Default key for the cart snapshot.
    pub const CART: &str = "cart";
}

/// A durable key-value store holding serialized snapshots.
pub trait CartStorage {
    /// Read the snapshot stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the snapshot stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn write(&mut self, key: &str, snapshot: &str) -> Result<(), StorageError>;
}

impl<S: CartStorage + ?Sized> CartStorage for &mut S {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, snapshot: &str) -> Result<(), StorageError> {
        (**self).write(key, snapshot)
    }
}

impl<S: CartStorage + ?Sized> CartStorage for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, snapshot: &str) -> Result<(), StorageError> {
        (**self).write(key, snapshot)
    }
}

/// Check that a key is usable by every backend: non-empty ASCII
/// alphanumerics, `-` and `_` only.
///
/// # Errors
///
/// Returns [`StorageError::InvalidKey`] otherwise.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_owned()))
    }
}
