//! Configuration management

use crate::error::{HabitError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "habitlog.toml";

pub const ENV_CONFIG: &str = "HABITLOG_CONFIG";
pub const ENV_DATA_FILE: &str = "HABITLOG_FILE";
pub const ENV_LOG_FILE: &str = "HABITLOG_LOG";

const VALID_LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where the habit log is persisted
    pub data_file: PathBuf,
    /// Where diagnostics are written
    pub log_file: PathBuf,
    /// When false the log lives in memory only for this run
    pub persist: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from("habit_log.json"),
            log_file: PathBuf::from("habitlog.log"),
            persist: true,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Resolve config for the current process: file, then environment overrides
    pub fn resolve() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::resolve_with(&cwd, |key| std::env::var(key).ok())
    }

    /// Resolve config relative to `cwd`, reading variables through `lookup`
    pub fn resolve_with<F>(cwd: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(ENV_CONFIG).filter(|v| !v.is_empty()) {
            Some(path) => Self::load_from_file(&cwd.join(path))?,
            None => {
                let local = cwd.join(CONFIG_FILE_NAME);
                if local.is_file() {
                    Self::load_from_file(&local)?
                } else {
                    Config::default()
                }
            }
        };

        if let Some(data_file) = lookup(ENV_DATA_FILE) {
            if data_file.is_empty() {
                config.persist = false;
            } else {
                config.data_file = PathBuf::from(data_file);
                config.persist = true;
            }
        }

        if let Some(log_file) = lookup(ENV_LOG_FILE).filter(|v| !v.is_empty()) {
            config.log_file = PathBuf::from(log_file);
        }

        config.data_file = cwd.join(&config.data_file);
        config.log_file = cwd.join(&config.log_file);

        Ok(config)
    }

    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                HabitError::Config(format!("Config file not found: {}", path.display()))
            } else {
                HabitError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| HabitError::Config(format!("Failed to parse {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Storage path for the habit store, or None when persistence is off
    pub fn storage_path(&self) -> Option<PathBuf> {
        self.persist.then(|| self.data_file.clone())
    }

    fn validate(&self) -> Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(HabitError::Config(format!(
                "Invalid log level: '{}'. Valid levels are: {}",
                self.log_level,
                VALID_LOG_LEVELS.join(", ")
            )));
        }
        if self.data_file.as_os_str().is_empty() {
            return Err(HabitError::Config(
                "data_file must not be empty (set persist = false instead)".to_string(),
            ));
        }
        Ok(())
    }
}
