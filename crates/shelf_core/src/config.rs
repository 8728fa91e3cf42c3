//! Runtime configuration for a catalog session.
//!
//! # Responsibility
//! - Resolve where the catalog file lives and how logging is set up.
//!
//! # Invariants
//! - `data_path` is never empty.
//! - `log_dir`, when set, is absolute (enforced by `init_logging`).

use crate::logging::{default_log_level, init_logging};
use crate::repo::book_repo::JsonFileBookRepository;
use std::path::PathBuf;

/// File name used when no data path is configured.
pub const DEFAULT_DATA_FILE: &str = "library.json";

/// Environment variable overriding the data path.
pub const DATA_PATH_ENV: &str = "SHELF_DATA";

/// Catalog session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub data_path: PathBuf,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CatalogConfig {
    /// Default settings with the data path taken from `SHELF_DATA` if set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(DATA_PATH_ENV) {
            config = config.with_data_path(value);
        }
        config
    }

    /// Overrides the data path; blank values keep the current one.
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if !path.as_os_str().is_empty() && !path.to_string_lossy().trim().is_empty() {
            self.data_path = path;
        }
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Repository for the configured data file.
    pub fn repository(&self) -> JsonFileBookRepository {
        JsonFileBookRepository::new(self.data_path.clone())
    }

    /// Starts file logging when a log directory is configured.
    ///
    /// Returns `Ok(false)` when logging is not configured.
    pub fn init_logging(&self) -> Result<bool, String> {
        let Some(dir) = &self.log_dir else {
            return Ok(false);
        };
        let dir = dir
            .to_str()
            .ok_or_else(|| format!("log_dir `{}` is not valid UTF-8", dir.display()))?;
        init_logging(&self.log_level, dir)?;
        Ok(true)
    }
}
