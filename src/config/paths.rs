//! Path management for PisoPiso
//!
//! ## Path Resolution Order
//!
//! 1. `PISOPISO_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/pisopiso` on Linux, `~/Library/Application Support/pisopiso`
//!    on macOS, `%APPDATA%\pisopiso\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PisoError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "PISOPISO_DATA_DIR";

/// Manages all paths used by PisoPiso
#[derive(Debug, Clone)]
pub struct PisoPaths {
    base_dir: PathBuf,
}

impl PisoPaths {
    /// Resolve the base directory from the environment or platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PisoError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create PisoPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Default backing file for the ledger
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join("transactions.csv")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), PisoError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PisoError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if PisoPiso has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, PisoError> {
    ProjectDirs::from("", "", "pisopiso")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PisoError::Config("Could not determine a home directory".into()))
}
