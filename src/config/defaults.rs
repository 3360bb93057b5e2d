use std::path::PathBuf;

pub const CONFIG_PATH_ENV: &str = "GIT_UNMERGED_CONFIG_PATH";

pub fn get_default_config_dir() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "git-unmerged") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("git-unmerged")
    }
}

pub fn get_config_file_path() -> PathBuf {
    // Allow environment variable override for config path (used in tests)
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(config_path);
    }

    get_default_config_dir().join("config.json")
}
