//! Storage backends for config documents.
//!
//! The tree itself never touches the filesystem. The registry hands it text
//! read through a [`Storage`] and writes the encoded text back through the
//! same backend.

use crate::error::{ConfigError, Result};
use crate::fs::atomic_write_file;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Text storage used by [`crate::registry::ConfigRegistry`].
pub trait Storage: Send + Sync {
    /// Read a whole document. Missing files are an `Io` error with
    /// `ErrorKind::NotFound`.
    fn read_text(&self, path: &Path) -> Result<String>;

    /// Replace a whole document.
    fn write_text(&self, path: &Path, text: &str) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;

    /// True for an existing regular file (not a directory).
    fn is_file(&self, path: &Path) -> bool;

    fn create_dir_all(&self, path: &Path) -> Result<()>;
}

/// Storage on the local filesystem. Writes are atomic.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn read_text(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<()> {
        atomic_write_file(path, text)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| ConfigError::io(path, e))
    }
}

/// In-process storage, for embedding without a filesystem and for tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: Mutex<MemoryFiles>,
}

#[derive(Debug, Default)]
struct MemoryFiles {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_files<R>(&self, f: impl FnOnce(&mut MemoryFiles) -> R) -> R {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(|poison| poison.into_inner());
        f(&mut guard)
    }
}

impl Storage for MemoryStorage {
    fn read_text(&self, path: &Path) -> Result<String> {
        self.with_files(|state| state.files.get(path).cloned())
            .ok_or_else(|| {
                ConfigError::io(
                    path,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "no such document"),
                )
            })
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<()> {
        self.with_files(|state| {
            if let Some(parent) = path.parent() {
                state.dirs.extend(parent.ancestors().map(Path::to_path_buf));
            }
            state.files.insert(path.to_path_buf(), text.to_string());
        });
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.with_files(|state| state.files.contains_key(path) || state.dirs.contains(path))
    }

    fn is_file(&self, path: &Path) -> bool {
        self.with_files(|state| state.files.contains_key(path))
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.with_files(|state| state.dirs.extend(path.ancestors().map(Path::to_path_buf)));
        Ok(())
    }
}
