//! Atomic I/O operations with file locking

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use crate::{Error, Result};

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename strategy to prevent partial writes.
/// Acquires an advisory lock to prevent concurrent access. The temp file
/// lives in the target's directory so the rename stays on one filesystem.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: path.to_path_buf(),
        })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;

    // Flush to disk before the rename makes the content visible.
    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "atomic write complete");
    Ok(())
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
