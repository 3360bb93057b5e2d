use crate::core::analyzer::{DEFAULT_BASE_BRANCH, DEFAULT_DAYS, DEFAULT_IGNORE_PATTERN, DEFAULT_REMOTE};
use serde::{Deserialize, Serialize};

pub mod defaults;
pub mod manager;

pub use manager::ConfigManager;

/// Defaults for CLI flags, read from `config.json`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub base_branch: String,
    pub ignore_pattern: Option<String>,
    pub days: u32,
    pub remote: String,
    pub fetch: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_branch: DEFAULT_BASE_BRANCH.to_string(),
            ignore_pattern: Some(DEFAULT_IGNORE_PATTERN.to_string()),
            days: DEFAULT_DAYS,
            remote: DEFAULT_REMOTE.to_string(),
            fetch: true,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Validation(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Json(e) => write!(f, "JSON error: {}", e),
            ConfigError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::Io(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Json(error)
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.base_branch.trim().is_empty() {
            return Err(ConfigError::Validation(
                "base_branch cannot be empty".to_string(),
            ));
        }

        if self.remote.trim().is_empty() {
            return Err(ConfigError::Validation("remote cannot be empty".to_string()));
        }

        if self.remote.contains('/') {
            return Err(ConfigError::Validation(format!(
                "Invalid remote '{}'. Remote names cannot contain '/'",
                self.remote
            )));
        }

        Ok(())
    }

    /// Empty string in the file means "ignore nothing".
    pub fn ignore_pattern(&self) -> Option<&str> {
        self.ignore_pattern.as_deref().filter(|p| !p.is_empty())
    }
}
