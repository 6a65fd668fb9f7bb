//! Filesystem helpers with error context.
//!
//! Every failure is wrapped as `InstallError::Filesystem` naming the
//! operation and the path involved, so command output never surfaces a
//! bare I/O error.

use std::fs;
use std::path::Path;

use crate::errors::{InstallError, Result};

/// Create `dir` and any missing parents. Idempotent.
pub(crate) fn create_dir_chain(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| InstallError::fs("create", dir, e))
}

/// Remove `dir` and everything under it.
pub(crate) fn remove_dir_tree(dir: &Path) -> Result<()> {
    fs::remove_dir_all(dir).map_err(|e| InstallError::fs("remove", dir, e))
}

/// Recursively copy the directory tree at `src` into `dst`, preserving
/// structure and file contents. `dst` is created if absent. On failure a
/// partial tree may be left behind; callers report the error rather than
/// cleaning up.
pub(crate) fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    create_dir_chain(dst)?;
    let entries = fs::read_dir(src).map_err(|e| InstallError::fs("read", src, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| InstallError::fs("read", src, e))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        let file_type = entry
            .file_type()
            .map_err(|e| InstallError::fs("read", &from, e))?;
        if file_type.is_dir() {
            copy_dir_recursive(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(|e| InstallError::fs("copy", &from, e))?;
        }
    }
    Ok(())
}
