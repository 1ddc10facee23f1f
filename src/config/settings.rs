//! User settings for PisoPiso
//!
//! Stored as `config.json` in the base directory. Every field has a default,
//! so a partial or missing file is fine.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::PisoPaths;
use crate::error::PisoError;
use crate::models::{default_categories, DEFAULT_CURRENCY_SYMBOL};

/// User settings for PisoPiso
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for display (strftime format); the ledger always stores ISO dates
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Categories accepted for new entries; empty accepts any label
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Backing file for the ledger, overriding `<base dir>/transactions.csv`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            categories: default_categories(),
            ledger_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &PisoPaths) -> Result<Self, PisoError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PisoError::Io(format!("Failed to read settings file: {}", e)))?;

            serde_json::from_str(&contents)
                .map_err(|e| PisoError::Config(format!("Failed to parse settings file: {}", e)))
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PisoPaths) -> Result<(), PisoError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PisoError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PisoError::Io(format!("Failed to write settings file: {}", e)))
    }

    /// Resolve the ledger backing file.
    ///
    /// A relative `ledger_file` is taken relative to the base directory.
    pub fn ledger_path(&self, paths: &PisoPaths) -> PathBuf {
        match &self.ledger_file {
            Some(file) if file.is_absolute() => file.clone(),
            Some(file) => paths.base_dir().join(file),
            None => paths.ledger_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₱");
        assert_eq!(settings.categories.len(), 5);
        assert!(settings.ledger_file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PisoPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".into();
        settings.categories.push("Rent".into());
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PisoPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "€"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.categories, default_categories());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PisoPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(PisoError::Config(_))
        ));
    }

    #[test]
    fn test_ledger_path_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PisoPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        assert_eq!(settings.ledger_path(&paths), paths.ledger_file());

        settings.ledger_file = Some(PathBuf::from("books/2024.csv"));
        assert_eq!(
            settings.ledger_path(&paths),
            temp_dir.path().join("books/2024.csv")
        );

        let absolute = temp_dir.path().join("elsewhere.csv");
        settings.ledger_file = Some(absolute.clone());
        assert_eq!(settings.ledger_path(&paths), absolute);
    }
}
