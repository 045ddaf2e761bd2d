//! Shared path helpers.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Resolve a possibly-relative path against the current directory.
pub fn absolutize(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(cwd.join(path))
}
