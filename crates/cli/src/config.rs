// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.procat/config.toml` and includes:
//! - `database`: Optional path to the model database
//! - `exports`: Optional directory for CSV exports
//! - `log_level`: Default tracing filter when no env override is set
//! - `[ingest]`: Ingestion tunables

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use procat_core::classify::{DEFAULT_MAX_TITLE_LEVELS, MAX_TITLE_LEVELS};
use procat_core::IngestOptions;

use crate::error::{Error, Result};

pub const WORK_DIR_NAME: &str = ".procat";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "models.db";
const EXPORTS_DIR_NAME: &str = "exports";
const LOG_FILE_NAME: &str = "procat.log";
const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Default tracing filter.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Project configuration stored in `.procat/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Database file (relative to project root or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// Export directory (relative to project root or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exports: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(default)]
    pub ingest: IngestConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Highest `Title N` column recognized (default: 5, at most 100).
    #[serde(default = "default_max_title_levels")]
    pub max_title_levels: usize,
}

fn default_max_title_levels() -> usize {
    DEFAULT_MAX_TITLE_LEVELS
}

impl Default for IngestConfig {
    fn default() -> Self {
        IngestConfig {
            max_title_levels: DEFAULT_MAX_TITLE_LEVELS,
        }
    }
}

impl Config {
    /// Loads configuration from the given `.procat/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        if !(1..=MAX_TITLE_LEVELS).contains(&config.ingest.max_title_levels) {
            return Err(Error::Config(format!(
                "ingest.max_title_levels must be between 1 and {MAX_TITLE_LEVELS}"
            )));
        }
        Ok(config)
    }

    /// Saves configuration to the given `.procat/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// The configured log filter, or the default.
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            max_title_levels: self.ingest.max_title_levels,
        }
    }
}

/// Find the .procat directory by walking up from the current directory.
pub fn find_work_dir() -> Result<PathBuf> {
    let mut current = std::env::current_dir()?;
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Resolve a configured path against the project root (the parent of `.procat/`).
fn resolve(work_dir: &Path, configured: &str) -> PathBuf {
    let path = Path::new(configured);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        work_dir.parent().unwrap_or(work_dir).join(path)
    }
}

/// Get the database path from config.
pub fn get_db_path(work_dir: &Path, config: &Config) -> PathBuf {
    match &config.database {
        Some(database) => resolve(work_dir, database),
        None => work_dir.join(DB_FILE_NAME),
    }
}

/// Get the export directory from config.
pub fn get_exports_dir(work_dir: &Path, config: &Config) -> PathBuf {
    match &config.exports {
        Some(exports) => resolve(work_dir, exports),
        None => work_dir.join(EXPORTS_DIR_NAME),
    }
}

/// Log file inside the project directory.
pub fn get_log_path(work_dir: &Path) -> PathBuf {
    work_dir.join(LOG_FILE_NAME)
}

/// Initialize a new .procat directory at the given path.
pub fn init_work_dir(path: &Path) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.join(CONFIG_FILE_NAME).exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;
    Config::default().save(&work_dir)?;
    write_gitignore(&work_dir)?;

    Ok(work_dir)
}

/// Write a .gitignore file to the work directory.
///
/// Ignores the database, exports and the log; the config stays tracked.
pub fn write_gitignore(work_dir: &Path) -> Result<()> {
    let gitignore_path = work_dir.join(GITIGNORE_FILE_NAME);
    let content = "# Model store\nmodels.db\nmodels.db-*\n\n# Generated files\nexports/\nprocat.log\n";
    fs::write(&gitignore_path, content)?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
