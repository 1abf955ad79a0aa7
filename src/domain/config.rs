//! Config - Application Settings

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ROWS_PER_PAGE, ROWS_PER_PAGE_OPTIONS};
use crate::error::{Error, Result};

/// Which action the table header offers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionButtonType {
    /// Export the current rows as CSV
    #[default]
    Export,
    /// Pick a file to upload
    Upload,
}

impl FromStr for ActionButtonType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "export" => Ok(ActionButtonType::Export),
            "upload" => Ok(ActionButtonType::Upload),
            other => Err(Error::Invalid {
                message: format!("unknown action button type: {other:?}"),
            }),
        }
    }
}

/// Settings read from `settings.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// UI language (`en` or `zh`)
    pub locale: String,
    /// Initial page size
    pub rows_per_page: usize,
    /// Header action button
    pub action_button: ActionButtonType,
    /// Where exported CSV files are written (Downloads when unset)
    pub export_dir: Option<PathBuf>,
    /// JSON array of rows to show instead of the sample data
    pub data_file: Option<PathBuf>,
    /// Table title
    pub header_title: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            locale: system_locale(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            action_button: ActionButtonType::Export,
            export_dir: None,
            data_file: None,
            header_title: "Earnings".to_string(),
        }
    }
}

impl AppSettings {
    /// Parse settings from TOML text, normalizing out-of-range values
    pub fn from_toml(text: &str) -> Result<Self> {
        let settings: AppSettings = toml::from_str(text)?;
        Ok(settings.normalized())
    }

    /// Serialize to TOML text
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn normalized(mut self) -> Self {
        if !ROWS_PER_PAGE_OPTIONS.contains(&self.rows_per_page) {
            tracing::warn!(
                rows_per_page = self.rows_per_page,
                "unsupported rows_per_page, falling back to {DEFAULT_ROWS_PER_PAGE}"
            );
            self.rows_per_page = DEFAULT_ROWS_PER_PAGE;
        }
        self
    }
}

/// Language tag of the current user, reduced to the locales we ship
fn system_locale() -> String {
    let tag = locale_config::Locale::user_default().to_string();
    if tag.to_ascii_lowercase().starts_with("zh") {
        "zh".to_string()
    } else {
        "en".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_settings() {
        let settings = AppSettings::from_toml(
            r#"
            locale = "zh"
            rows_per_page = 50
            action_button = "upload"
            export_dir = "/tmp/exports"
            header_title = "Payments"
            "#,
        )
        .expect("settings");

        assert_eq!(settings.locale, "zh");
        assert_eq!(settings.rows_per_page, 50);
        assert_eq!(settings.action_button, ActionButtonType::Upload);
        assert_eq!(settings.export_dir, Some(PathBuf::from("/tmp/exports")));
        assert_eq!(settings.data_file, None);
        assert_eq!(settings.header_title, "Payments");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let settings = AppSettings::from_toml("").expect("settings");
        assert_eq!(settings.rows_per_page, DEFAULT_ROWS_PER_PAGE);
        assert_eq!(settings.action_button, ActionButtonType::Export);
    }

    #[test]
    fn unsupported_page_size_is_reset() {
        let settings = AppSettings::from_toml("rows_per_page = 33").expect("settings");
        assert_eq!(settings.rows_per_page, DEFAULT_ROWS_PER_PAGE);
    }

    #[test]
    fn unknown_action_button_is_rejected() {
        assert!(AppSettings::from_toml(r#"action_button = "delete""#).is_err());
        assert!("delete".parse::<ActionButtonType>().is_err());
        assert_eq!("upload".parse::<ActionButtonType>().ok(), Some(ActionButtonType::Upload));
    }

    #[test]
    fn round_trips_through_toml() {
        let settings = AppSettings {
            locale: "en".into(),
            ..Default::default()
        };
        let text = settings.to_toml().expect("serialize");
        assert_eq!(AppSettings::from_toml(&text).expect("parse"), settings);
    }
}
