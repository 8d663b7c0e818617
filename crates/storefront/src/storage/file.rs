//! File-backed storage backend.
//!
//! Each key maps to `<root>/<key>.json`. The root directory is created on the
//! first write; a missing file reads as "nothing stored".

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{CartStorage, StorageError, validate_key};

/// Storage that keeps one file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at `root`. Nothing is touched on disk yet.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidKey`] if the key cannot be a file name.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl CartStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }

    fn write(&mut self, key: &str, snapshot: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let io_err = |source: std::io::Error| StorageError::Io {
            key: key.to_owned(),
            source,
        };

        fs::create_dir_all(&self.root).map_err(io_err)?;

        // Readers must only ever see a complete snapshot.
        let tmp = path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp).map_err(io_err)?;

        let cleanup_and_err = |e| {
            let _ = fs::remove_file(&tmp);
            io_err(e)
        };

        file.write_all(snapshot.as_bytes()).map_err(cleanup_and_err)?;
        file.sync_all().map_err(cleanup_and_err)?;
        drop(file);
        fs::rename(&tmp, &path).map_err(cleanup_and_err)?;

        tracing::trace!(path = %path.display(), bytes = snapshot.len(), "Wrote snapshot");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(storage.read("cart").unwrap().is_none());
    }

    #[test]
    fn test_write_creates_root_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("state");
        let mut storage = FileStorage::new(&root);

        storage.write("cart", "[1,2]").unwrap();
        assert!(root.join("cart.json").exists());
        assert!(!root.join("cart.json.tmp").exists());
        assert_eq!(storage.read("cart").unwrap().as_deref(), Some("[1,2]"));

        storage.write("cart", "[]").unwrap();
        assert_eq!(storage.read("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_rejects_path_traversal_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        assert!(matches!(
            storage.write("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("cart.json")).unwrap();
        fs::write(dir.path().join("cart.json").join("keep"), "x").unwrap();
        let mut storage = FileStorage::new(dir.path());

        assert!(matches!(
            storage.write("cart", "[]"),
            Err(StorageError::Io { .. })
        ));
        assert!(!dir.path().join("cart.json.tmp").exists());
    }

    #[test]
    fn test_read_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("cart.json")).unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(matches!(
            storage.read("cart"),
            Err(StorageError::Io { .. })
        ));
    }
}
