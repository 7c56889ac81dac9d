//! Locates the directory that holds saved commands.

use std::path::{Path, PathBuf};

use crate::error::{GcmdError, Result};

/// Returns the command directory for the current user.
///
/// `~/.config/gcmd` is used unless it is known not to exist, otherwise
/// `~/.gcmd` (whether or not that exists yet).
pub fn commands_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(GcmdError::UserLookup)?;
    Ok(commands_dir_in(&home))
}

/// Same resolution as [`commands_dir`], rooted at an explicit home directory.
pub fn commands_dir_in(home: &Path) -> PathBuf {
    let preferred = home.join(".config").join("gcmd");
    let dir = if !matches!(preferred.try_exists(), Ok(false)) {
        preferred
    } else {
        home.join(".gcmd")
    };
    tracing::debug!(dir = %dir.display(), "resolved command directory");
    dir
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn falls_back_to_dot_gcmd_even_when_missing() {
        let home = TempDir::new().unwrap();
        assert_eq!(commands_dir_in(home.path()), home.path().join(".gcmd"));
        assert!(!home.path().join(".gcmd").exists());
    }

    #[test]
    fn prefers_config_dir_when_present() {
        let home = TempDir::new().unwrap();
        fs::create_dir_all(home.path().join(".gcmd")).unwrap();
        fs::create_dir_all(home.path().join(".config/gcmd")).unwrap();
        assert_eq!(
            commands_dir_in(home.path()),
            home.path().join(".config").join("gcmd")
        );
    }

    #[test]
    fn config_without_gcmd_subdir_is_ignored() {
        let home = TempDir::new().unwrap();
        fs::create_dir_all(home.path().join(".config")).unwrap();
        assert_eq!(commands_dir_in(home.path()), home.path().join(".gcmd"));
    }
}
