//! Atomic file replacement
//!
//! The new content goes to a temporary file next to the target, is flushed and
//! synced, then renamed over the original. A crash at any point leaves either
//! the old file or the new one, never a partial write.

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::core::error::FmtError;

/// Prefix of the temporary files created next to the target
const TEMP_PREFIX: &str = ".prosefmt-";

/// Replace `path` with `data`
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<(), FmtError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .tempfile_in(dir)
        .map_err(|e| FmtError::write(path, e))?;

    copy_permissions(path, &tmp);

    tmp.write_all(data).map_err(|e| FmtError::write(path, e))?;
    tmp.flush().map_err(|e| FmtError::write(path, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| FmtError::write(path, e))?;

    debug!(path = %path.display(), tmp = %tmp.path().display(), bytes = data.len(), "renaming temp file");

    // On failure the temp file is dropped and removed; the target is untouched.
    tmp.persist(path).map_err(|e| FmtError::write(path, e.error))?;
    Ok(())
}

/// Keep the target's mode; temp files are created 0600
fn copy_permissions(path: &Path, tmp: &NamedTempFile) {
    if let Ok(metadata) = std::fs::metadata(path) {
        if let Err(e) = tmp.as_file().set_permissions(metadata.permissions()) {
            debug!(path = %path.display(), error = %e, "could not copy permissions");
        }
    }
}
