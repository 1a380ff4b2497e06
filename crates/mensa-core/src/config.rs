//! Application configuration
//!
//! Stored as `mensa_config.json` in the app config directory. Every field
//! has a default, so partial or older files still load.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::auth::AdminAccount;

pub const CONFIG_FILE: &str = "mensa_config.json";

/// Environment variable overriding `log_level`
pub const LOG_LEVEL_ENV: &str = "MENSA_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite file of the device store, relative to the app data dir
    pub store_file: String,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    pub admins: Vec<AdminAccount>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_file: "mensa_store.db".to_string(),
            log_level: "info".to_string(),
            admins: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Read the config at `path`, writing defaults first if it is missing
    pub fn load_or_init(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            return Ok(config);
        }
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Apply `MENSA_LOG` if set
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
            if !level.trim().is_empty() {
                self.log_level = level.trim().to_lowercase();
            }
        }
        self
    }

    /// Add an admin account unless one with the same email exists.
    /// Returns whether the config changed.
    pub fn ensure_admin(&mut self, email: &str, password: &str) -> bool {
        if self.admins.iter().any(|a| a.email.eq_ignore_ascii_case(email.trim())) {
            return false;
        }
        self.admins.push(AdminAccount::with_password(email, password));
        true
    }
}
