//! Atomic file replacement.
//!
//! Every write follows the same pattern:
//! 1. Write content to `.{filename}.tmp` next to the target
//! 2. Sync the temporary file to disk
//! 3. Rename it over the target
//!
//! `rename` replaces an existing destination on both POSIX and Windows as
//! long as source and destination share a filesystem, which holds because the
//! temporary file lives in the target's directory. A crash can leave the
//! temporary file behind; the target itself is never partially written.

use crate::error::{ConfigError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to `path`, creating parent directories as needed.
///
/// ```no_run
/// use cfgtree::fs::atomic_write;
/// use std::path::Path;
///
/// atomic_write(Path::new("config/demo/config.json"), b"{}")?;
/// # Ok::<(), cfgtree::error::ConfigError>(())
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ConfigError::io(path, e)
    })?;

    sync_parent_dir(path);
    Ok(())
}

/// Atomically write a string to `path`.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
        ConfigError::io(
            target,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid file path"),
        )
    })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| ConfigError::io(path, e))?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            ConfigError::io(path, e)
        })
}

/// Persist the directory entry of a freshly renamed file. Best effort.
#[cfg(unix)]
fn sync_parent_dir(path: &Path) {
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) {}
