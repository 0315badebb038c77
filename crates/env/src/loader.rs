//! `.env` file loading.
//!
//! Responsibilities:
//! - Overlay a `.env` file onto the process environment through `dotenvy`.
//! - Report the outcome through the diagnostics sink.
//!
//! Does NOT handle:
//! - Validating file contents beyond what `dotenvy` parses.
//! - Retrying or searching parent directories for a file.
//!
//! Invariants / Assumptions:
//! - File values overwrite variables that are already set (override mode).
//! - An empty path is rejected before the process environment is touched.
//! - Loading writes process-global state. Call it during startup, before
//!   accessors run on other threads.
//! - Diagnostics NEVER include raw `.env` line contents to prevent secret leakage.

use std::path::Path;

use crate::constants::LOG_PREFIX;
use crate::error::LoadError;

/// Overlay the `.env` file at `path` onto the process environment.
///
/// Returns `true` when the file was loaded. Every failure, including an empty
/// path, is logged and reported as `false`.
pub fn load_env_file(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match try_load_env_file(path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "{LOG_PREFIX} file [{}] loaded", path.display());
            true
        }
        Err(LoadError::EmptyPath) => {
            tracing::warn!("{LOG_PREFIX} no path provided");
            false
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "{LOG_PREFIX} error loading file: {err}");
            false
        }
    }
}

/// Overlay the `.env` file at `path` onto the process environment.
///
/// # Errors
///
/// Returns:
/// - [`LoadError::EmptyPath`] if `path` is empty; nothing is read or written.
/// - [`LoadError::Parse`] if the file has invalid syntax.
/// - [`LoadError::Io`] if the file cannot be read.
///
/// Variables defined before the failing line may already have been applied.
pub fn try_load_env_file(path: impl AsRef<Path>) -> Result<(), LoadError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(LoadError::EmptyPath);
    }

    dotenvy::from_path_override(path)
        .map_err(|e| LoadError::from_dotenv(path.to_path_buf(), e))
}
