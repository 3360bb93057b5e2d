use crate::config::Config;
use crate::core::analyzer::AnalyzerOptions;
use crate::utils::{GitUnmergedError, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "git-unmerged")]
#[command(about = "Analyze git branches to find unmerged commits")]
#[command(version)]
#[command(after_help = "EXAMPLES:
    # Analyze current directory
    git-unmerged

    # Analyze specific repository
    git-unmerged --repo /path/to/repo

    # Compare against main branch instead of dev
    git-unmerged --base-branch origin/main

    # Ignore branches with 'hotfix' pattern
    git-unmerged --ignore-pattern hotfix

    # Look back 90 days instead of 60
    git-unmerged --days 90

    # Don't ignore any branches
    git-unmerged --ignore-pattern \"\"")]
pub struct Cli {
    /// Path to the git repository
    #[arg(long, default_value = ".", help = "Path to the git repository")]
    pub repo: PathBuf,

    /// Base branch to compare against
    #[arg(
        long,
        help = "Base branch to compare against (default: origin/dev)"
    )]
    pub base_branch: Option<String>,

    /// Pattern to ignore in branch names
    #[arg(
        long,
        help = "Pattern to ignore in branch names (default: -eld). Use empty string to disable."
    )]
    pub ignore_pattern: Option<String>,

    /// Number of days to look back
    #[arg(
        long,
        help = "Number of days to look back for recent commits (default: 60)"
    )]
    pub days: Option<u32>,

    /// Remote whose branches are analyzed
    #[arg(long, help = "Remote whose branches are analyzed (default: origin)")]
    pub remote: Option<String>,

    /// Skip fetching from remote
    #[arg(long, help = "Skip fetching from remote")]
    pub no_fetch: bool,

    /// Show detailed commit information
    #[arg(
        long,
        short,
        help = "Show detailed commit information for each branch"
    )]
    pub verbose: bool,

    /// Emit the report as JSON
    #[arg(long, help = "Print the report as JSON instead of a table")]
    pub json: bool,
}

/// Everything a run needs once flags and config are merged.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub options: AnalyzerOptions,
    pub fetch: bool,
    pub verbose: bool,
    pub json: bool,
}

impl Cli {
    pub fn validate(&self) -> Result<()> {
        if let Some(base) = &self.base_branch {
            if base.trim().is_empty() {
                return Err(GitUnmergedError::invalid_args(
                    "--base-branch cannot be empty",
                ));
            }
        }

        if let Some(remote) = &self.remote {
            if remote.trim().is_empty() || remote.contains('/') {
                return Err(GitUnmergedError::invalid_args(format!(
                    "Invalid remote '{}'",
                    remote
                )));
            }
        }

        Ok(())
    }

    /// Flags win over the config file, which wins over built-in defaults.
    pub fn resolve(&self, config: &Config, repo: PathBuf) -> RunSettings {
        let ignore = match &self.ignore_pattern {
            Some(pattern) => Some(pattern.clone()),
            None => config.ignore_pattern().map(str::to_string),
        };

        let options = AnalyzerOptions::new(repo)
            .base_branch(
                self.base_branch
                    .clone()
                    .unwrap_or_else(|| config.base_branch.clone()),
            )
            .ignore_substring(ignore)
            .days(self.days.unwrap_or(config.days))
            .remote(self.remote.clone().unwrap_or_else(|| config.remote.clone()));

        RunSettings {
            options,
            fetch: config.fetch && !self.no_fetch,
            verbose: self.verbose,
            json: self.json,
        }
    }
}
