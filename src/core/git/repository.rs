use super::GitRunner;
use crate::utils::error::{GitUnmergedError, Result};
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone)]
pub struct GitRepository {
    pub root: PathBuf,
}

impl GitRepository {
    /// Opens `path` as a repository without spawning git.
    ///
    /// Only checks that the directory exists and carries a `.git` entry (a
    /// directory for regular checkouts, a file for linked worktrees).
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GitUnmergedError::repository_not_found(path));
        }

        if !path.join(".git").exists() {
            return Err(GitUnmergedError::not_a_git_repository(path));
        }

        Ok(Self {
            root: path.to_path_buf(),
        })
    }

    /// Wraps a path without validating it. Failures surface on first use.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { root: path.into() }
    }
}

impl GitRunner for GitRepository {
    fn run(&self, args: &[&str]) -> Result<String> {
        execute_git_command(&self.root, args)
    }
}

pub fn execute_git_command(root: &Path, args: &[&str]) -> Result<String> {
    debug!("git {} (in {})", args.join(" "), root.display());

    let output = Command::new("git")
        .current_dir(root)
        .args(args)
        .output()
        .map_err(|e| GitUnmergedError::git_operation(format!("Failed to execute git: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitUnmergedError::git_operation(format!(
            "Git command failed ({}): {}",
            args.join(" "),
            stderr.trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.trim().to_string())
}
