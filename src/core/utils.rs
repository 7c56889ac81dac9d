use std::fs;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, PermissionsExt};

use crate::error::{GcmdError, Result};

/// Ensure directory exists, creating it (and its parents) owner-only when missing.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(0o700);
    builder
        .create(path)
        .map_err(|e| GcmdError::io("Unable to create directory", path, e))?;
    #[cfg(unix)]
    {
        fs::set_permissions(path, fs::Permissions::from_mode(0o700)).ok();
    }
    tracing::debug!(dir = %path.display(), "created command directory");
    Ok(())
}

/// Reject names that would place a command file outside the store directory.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(GcmdError::validation("Name cannot be empty"));
    }
    if name.starts_with('.') || name.contains(['/', '\\', '\0']) {
        return Err(GcmdError::validation(format!("Invalid command name '{}'", name)));
    }
    Ok(())
}
