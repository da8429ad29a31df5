//! Workspace directory setup.

use std::fs;
use std::path::Path;

use log::debug;

use crate::config::Config;
use crate::error_handling::InitializationError;

fn ensure_dir(path: &Path) -> Result<(), InitializationError> {
    fs::create_dir_all(path).map_err(|source| InitializationError::WorkspaceError {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Workspace directory ready: {}", path.display());
    Ok(())
}

/// Creates the input and output directories and the whitelist's parent.
///
/// Existing directories are left untouched. The whitelist file itself is
/// not created; a missing whitelist reads as empty.
pub fn init_workspace(config: &Config) -> Result<(), InitializationError> {
    ensure_dir(&config.input_dir)?;
    ensure_dir(&config.output_dir)?;
    if let Some(parent) = config
        .whitelist_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        ensure_dir(parent)?;
    }
    Ok(())
}
