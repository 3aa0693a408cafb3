use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the configuration directory (tests, containers).
pub const HOME_ENV: &str = "TIMECLOCK_HOME";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_bind() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            bind: default_bind(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Return the configuration directory: `$TIMECLOCK_HOME`, else `~/.timeclock`
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(HOME_ENV)
            && !dir.is_empty()
        {
            return expand_tilde(&dir);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".timeclock")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timeclock.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("timeclock.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Address the HTTP server listens on.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
