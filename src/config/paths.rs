//! Path management for the expense ledger
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_LEDGER_DIR` environment variable (if set)
//! 2. The platform data directory for `expense-ledger`
//!    (e.g. `~/.local/share/expense-ledger` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use super::settings::Settings;
use crate::error::LedgerError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "EXPENSE_LEDGER_DIR";

/// Manages all paths used by the ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Base directory for settings, the audit log and the default ledger file
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Create a new LedgerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform data directory can be determined.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
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

    /// Get the path to the ledger file named in the settings
    ///
    /// An absolute `ledger_file` setting is used as-is.
    pub fn ledger_file(&self, settings: &Settings) -> PathBuf {
        self.base_dir.join(&settings.ledger_file)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create data directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    ProjectDirs::from("", "", "expense-ledger")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| LedgerError::Config("Could not determine a data directory".into()))
}
