use super::defaults::get_config_file_path;
use super::{Config, Result};
use log::debug;
use std::fs;
use std::path::Path;

pub struct ConfigManager;

impl ConfigManager {
    pub fn load() -> Result<Config> {
        Self::load_with_path(None)
    }

    /// Reads the config file if present. A missing file means built-in
    /// defaults; nothing is written to disk.
    pub fn load_with_path(config_path: Option<&Path>) -> Result<Config> {
        let config_path = match config_path {
            Some(path) => path.to_path_buf(),
            None => get_config_file_path(),
        };

        if config_path.exists() {
            debug!("Loading config from {}", config_path.display());
            Self::load_from_file(&config_path)
        } else {
            debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            Ok(Config::default())
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let original = Config {
            base_branch: "origin/main".to_string(),
            ignore_pattern: Some("release/".to_string()),
            days: 14,
            remote: "upstream".to_string(),
            fetch: false,
        };
        fs::write(&config_path, serde_json::to_string_pretty(&original).unwrap()).unwrap();

        let loaded = ConfigManager::load_from_file(&config_path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_missing_file_yields_defaults_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested/config.json");

        let config = ConfigManager::load_with_path(Some(&config_path)).unwrap();
        assert_eq!(config, Config::default());
        assert!(!config_path.exists());
    }

    #[test]
    fn test_load_from_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("invalid.json");
        fs::write(&config_path, "invalid json content").unwrap();

        let result = ConfigManager::load_from_file(&config_path);
        assert!(matches!(result, Err(super::super::ConfigError::Json(_))));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, r#"{"base_branch": ""}"#).unwrap();

        let result = ConfigManager::load_with_path(Some(&config_path));
        assert!(matches!(
            result,
            Err(super::super::ConfigError::Validation(_))
        ));
    }
}
