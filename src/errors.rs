use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur during skill installation.
#[derive(Error, Debug)]
pub enum InstallError {
    /// Unrecognized `--ai` selector.
    #[error("unknown AI assistant '{value}' (valid values: {valid})")]
    InvalidInput { value: String, valid: String },

    /// The operator declined an interactive selection.
    #[error("{0}")]
    Cancelled(&'static str),

    /// Update requested where nothing is installed.
    #[error("{message}")]
    NotInstalled { message: String },

    /// Init without `--force` onto an existing installation.
    #[error("skill already installed at {}; use --force to overwrite", .path.display())]
    AlreadyInstalled { path: PathBuf },

    /// The tool's own bundled assets are absent. Indicates broken
    /// packaging, not a user error.
    #[error("bundled skill assets not found at {}; the uipro-mobile installation is corrupted, reinstall it", .path.display())]
    AssetMissing { path: PathBuf },

    /// Filesystem I/O error, wrapped with the operation and path.
    #[error("failed to {op} {}: {source}", .path.display())]
    Filesystem {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Terminal interaction error.
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl InstallError {
    /// Wrap an I/O error with the failed operation and the path involved.
    pub fn fs(op: &'static str, path: &Path, source: std::io::Error) -> Self {
        InstallError::Filesystem {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Convenience alias for `Result<T, InstallError>`.
pub type Result<T> = std::result::Result<T, InstallError>;
