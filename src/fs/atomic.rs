use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::Builder;

use crate::error::{Result, WslintError};

/// Replaces the contents of `path` without exposing a partial write.
///
/// The new contents go to a sibling temporary file named after `path`,
/// which receives the original permission bits and is then renamed over
/// `path`. On any failure the temporary file is removed and `path` keeps
/// its old contents.
///
/// # Errors
/// Returns `FileWrite` if the original cannot be inspected or the temporary
/// file cannot be written or renamed, and `Permissions` if the original mode
/// cannot be applied.
pub fn replace(path: &Path, contents: &[u8]) -> Result<()> {
    let write_error = |source: io::Error| WslintError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let permissions = fs::metadata(path).map_err(write_error)?.permissions();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let name = path
        .file_name()
        .map_or_else(|| "file".into(), |n| n.to_string_lossy());

    let mut tmp = Builder::new()
        .prefix(&format!("{name}-replacement-"))
        .tempfile_in(dir)
        .map_err(write_error)?;
    tmp.write_all(contents).map_err(write_error)?;
    tmp.flush().map_err(write_error)?;

    fs::set_permissions(tmp.path(), permissions).map_err(|source| WslintError::Permissions {
        path: path.to_path_buf(),
        source,
    })?;

    tmp.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}

#[cfg(test)]
#[path = "atomic_tests.rs"]
mod tests;
