//! ConfigStore - Local Settings Storage

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, warn};

use crate::constants::SETTINGS_FILE;
use crate::domain::config::AppSettings;
use crate::domain::row::Row;
use crate::error::{Error, Result};
use crate::helpers::get_or_create_config_dir;

/// Path of `settings.toml` in the config directory
pub fn settings_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(SETTINGS_FILE))
}

/// Load settings from `path`, writing defaults there when the file doesn't exist
pub fn load_settings_from(path: &Path) -> Result<AppSettings> {
    if !path.exists() {
        let settings = AppSettings::default();
        save_settings_to(path, &settings)?;
        info!("Created default settings at {}", path.display());
        return Ok(settings);
    }

    let content = fs::read_to_string(path)?;
    AppSettings::from_toml(&content)
}

/// Save settings to `path`
pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<()> {
    fs::write(path, settings.to_toml()?)?;
    Ok(())
}

/// Load settings from the platform config directory, falling back to defaults
pub fn load_settings() -> AppSettings {
    match settings_path().and_then(|path| load_settings_from(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Using default settings: {e}");
            AppSettings::default()
        }
    }
}

/// Load rows from a JSON file holding an array of objects
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    let content = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;

    let Value::Array(items) = value else {
        return Err(Error::Invalid {
            message: format!("{} must contain a JSON array of rows", path.display()),
        });
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::Object(fields) => Ok(Row::from(fields)),
            other => Err(Error::Invalid {
                message: format!("row must be a JSON object, got {other}"),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::ActionButtonType;

    #[test]
    fn missing_settings_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);

        let settings = load_settings_from(&path).expect("load");
        assert!(path.exists());
        assert_eq!(load_settings_from(&path).expect("reload"), settings);
    }

    #[test]
    fn saved_settings_are_read_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);
        let settings = AppSettings {
            action_button: ActionButtonType::Upload,
            rows_per_page: 100,
            ..Default::default()
        };

        save_settings_to(&path, &settings).expect("save");
        assert_eq!(load_settings_from(&path).expect("load"), settings);
    }

    #[test]
    fn loads_rows_from_json_array() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("rows.json");
        fs::write(&path, r#"[{"id": 1, "amount": 10}, {"id": 2, "amount": 20}]"#).expect("write");

        let rows = load_rows(&path).expect("rows");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].display("amount"), "20");
    }

    #[test]
    fn rejects_non_array_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("rows.json");
        fs::write(&path, r#"{"id": 1}"#).expect("write");
        assert!(load_rows(&path).is_err());

        fs::write(&path, r#"[1, 2]"#).expect("write");
        assert!(load_rows(&path).is_err());
    }
}
