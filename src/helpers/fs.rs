//! File System Utilities
//!
//! Configuration, data and download directory management.

use crate::error::{Error, Result};
use directories::{ProjectDirs, UserDirs};
use std::fs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "earnings", "earnings-gui").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/earnings-gui/` or `$XDG_CONFIG_HOME/earnings-gui/`
/// - **macOS**: `~/Library/Application Support/com.earnings.earnings-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\earnings\earnings-gui\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Get or create the data directory (log files)
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/earnings-gui/`
/// - **macOS**: `~/Library/Application Support/com.earnings.earnings-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\earnings\earnings-gui\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.data_dir())
}

/// Directory exported CSV files land in when none is configured.
///
/// The user's Downloads folder, or the home directory when the platform has none.
pub fn default_export_dir() -> Result<PathBuf> {
    let user_dirs = UserDirs::new().ok_or_else(|| Error::Invalid {
        message: "Could not determine user directories".to_string(),
    })?;

    let dir = user_dirs
        .download_dir()
        .unwrap_or_else(|| user_dirs.home_dir());
    ensure_dir(dir)
}

/// Resolve the export directory, creating it if needed
pub fn resolve_export_dir(configured: Option<&Path>) -> Result<PathBuf> {
    match configured {
        Some(dir) => ensure_dir(dir),
        None => default_export_dir(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_export_dir_is_created() {
        let root = tempfile::tempdir().expect("tempdir");
        let target = root.path().join("exports").join("csv");

        let resolved = resolve_export_dir(Some(&target)).expect("resolve");
        assert_eq!(resolved, target);
        assert!(target.is_dir());
    }
}
