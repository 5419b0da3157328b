//! Whole-file I/O for editing existing files in place

use std::fs::{self, OpenOptions};
use std::io::Write;

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Read text content from a file.
///
/// A missing file is reported as [`Error::NotFound`] and a file that is not
/// UTF-8 as [`Error::NotUtf8`].
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Replace the whole content of an existing file.
///
/// The file must already exist as a regular file; this never creates one.
/// The content goes out in a single `write_all` under an exclusive advisory
/// lock. The handle is scoped to this call, so the lock is released on every
/// exit path, including errors.
pub fn write_existing(path: &NormalizedPath, content: &str) -> Result<()> {
    let native_path = path.to_native();

    if !native_path.is_file() {
        return Err(Error::NotFound { path: native_path });
    }

    let mut file = OpenOptions::new()
        .write(true)
        .open(&native_path)
        .map_err(|e| Error::io(&native_path, e))?;

    file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    // Truncate only once the lock is held.
    file.set_len(0).map_err(|e| Error::io(&native_path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| Error::io(&native_path, e))?;
    file.sync_all().map_err(|e| Error::io(&native_path, e))?;

    tracing::debug!(path = %path, bytes = content.len(), "wrote file");
    Ok(())
}
