use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitUnmergedError {
    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    #[error("Repository path does not exist: {path}")]
    RepositoryNotFound { path: String },

    #[error("Not a git repository: {path}")]
    NotAGitRepository { path: String },

    #[error("Failed to load config: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid arguments: {message}")]
    InvalidArgs { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GitUnmergedError>;

impl GitUnmergedError {
    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }

    pub fn repository_not_found(path: impl Into<PathBuf>) -> Self {
        Self::RepositoryNotFound {
            path: path.into().to_string_lossy().to_string(),
        }
    }

    pub fn not_a_git_repository(path: impl Into<PathBuf>) -> Self {
        Self::NotAGitRepository {
            path: path.into().to_string_lossy().to_string(),
        }
    }

    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs {
            message: message.into(),
        }
    }
}
