pub mod branch;
pub mod commit;


pub use branch::{BranchFilter, BranchSummary};
pub use commit::CommitRecord;

use crate::core::clock::{Clock, SystemClock};
use crate::core::git::{GitRepository, GitRunner};
use branch::{qualify, strip_remote, BRANCH_LIST_FORMAT};
use chrono::{DateTime, Duration, Utc};
use commit::{
    dedupe_contributors, parse_commit_line, COMMIT_COUNT_FORMAT, COMMIT_DETAIL_FORMAT,
    CONTRIBUTOR_FORMAT,
};
use log::{debug, warn};
use std::collections::HashSet;
use std::path::PathBuf;

pub const DEFAULT_BASE_BRANCH: &str = "origin/dev";
pub const DEFAULT_IGNORE_PATTERN: &str = "-eld";
pub const DEFAULT_DAYS: u32 = 60;
pub const DEFAULT_REMOTE: &str = "origin";

#[derive(Debug, Clone)]
pub struct AnalyzerOptions {
    pub repository_location: PathBuf,
    pub base_branch: String,
    pub ignore_substring: Option<String>,
    pub recency_window_days: u32,
    pub remote: String,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            repository_location: PathBuf::from("."),
            base_branch: DEFAULT_BASE_BRANCH.to_string(),
            ignore_substring: Some(DEFAULT_IGNORE_PATTERN.to_string()),
            recency_window_days: DEFAULT_DAYS,
            remote: DEFAULT_REMOTE.to_string(),
        }
    }
}

impl AnalyzerOptions {
    pub fn new(repository_location: impl Into<PathBuf>) -> Self {
        Self {
            repository_location: repository_location.into(),
            ..Self::default()
        }
    }

    pub fn base_branch(mut self, base_branch: impl Into<String>) -> Self {
        self.base_branch = base_branch.into();
        self
    }

    /// An empty pattern disables filtering.
    pub fn ignore_substring(mut self, pattern: Option<String>) -> Self {
        self.ignore_substring = pattern.filter(|p| !p.is_empty());
        self
    }

    pub fn days(mut self, days: u32) -> Self {
        self.recency_window_days = days;
        self
    }

    pub fn remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }
}

/// Finds remote branches carrying commits the base branch lacks.
///
/// Every git failure is absorbed: it is logged at warn level and the affected
/// query reports nothing, so one broken branch never aborts the report.
pub struct Analyzer<R: GitRunner> {
    runner: R,
    options: AnalyzerOptions,
    clock: Box<dyn Clock>,
}

impl Analyzer<GitRepository> {
    pub fn new(options: AnalyzerOptions) -> Self {
        let repo = GitRepository::at(options.repository_location.clone());
        Self::with_runner(repo, options)
    }
}

impl<R: GitRunner> Analyzer<R> {
    pub fn with_runner(runner: R, options: AnalyzerOptions) -> Self {
        Self {
            runner,
            options,
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    pub fn synchronize(&self) {
        if let Err(e) = self.runner.run(&["fetch", "--all", "--quiet"]) {
            warn!("Fetch failed, continuing with local refs: {}", e);
        }
    }

    pub fn list_recent_branches(&self) -> Vec<BranchSummary> {
        let output = match self.runner.run(&["branch", "-r", BRANCH_LIST_FORMAT]) {
            Ok(output) => output,
            Err(e) => {
                warn!("Failed to list remote branches: {}", e);
                return Vec::new();
            }
        };

        let window = Duration::days(i64::from(self.options.recency_window_days));
        let cutoff = self
            .clock
            .now()
            .checked_sub_signed(window)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let filter = BranchFilter {
            remote: &self.options.remote,
            ignore_substring: self.options.ignore_substring.as_deref(),
            cutoff,
        };

        let mut seen = HashSet::new();
        let mut branches = Vec::new();
        for line in output.lines() {
            if let Some(branch) = filter.parse_line(line) {
                if seen.insert(branch.name.clone()) {
                    branches.push(branch);
                } else {
                    debug!("Skipping duplicate branch name {}", branch.name);
                }
            }
        }

        branches
    }

    /// Accepts `feature/x` or `origin/feature/x`.
    pub fn count_unmerged(&self, branch_name: &str) -> usize {
        self.count_unmerged_ref(&qualify(branch_name, &self.options.remote))
    }

    pub fn commit_details(&self, branch_name: &str) -> Vec<CommitRecord> {
        self.commit_details_ref(&qualify(branch_name, &self.options.remote))
    }

    pub fn contributors(&self, branch_name: &str) -> Vec<String> {
        self.contributors_ref(&qualify(branch_name, &self.options.remote))
    }

    pub fn analyze(
        &self,
        do_fetch: bool,
        include_contributors: bool,
        include_commit_details: bool,
    ) -> Vec<BranchSummary> {
        if do_fetch {
            self.synchronize();
        }

        let base_name = strip_remote(&self.options.base_branch, &self.options.remote);

        let mut unmerged = Vec::new();
        for mut branch in self.list_recent_branches() {
            if branch.name == base_name {
                continue;
            }

            branch.unmerged_count = self.count_unmerged_ref(&branch.full_name);
            if branch.unmerged_count == 0 {
                debug!("{} is fully merged into {}", branch.name, self.options.base_branch);
                continue;
            }

            if include_contributors {
                branch.contributors = Some(self.contributors_ref(&branch.full_name));
            }
            if include_commit_details {
                branch.commits = Some(self.commit_details_ref(&branch.full_name));
            }

            unmerged.push(branch);
        }

        unmerged.sort_by(|a, b| b.last_commit_time.cmp(&a.last_commit_time));
        unmerged
    }

    fn count_unmerged_ref(&self, full_name: &str) -> usize {
        self.unmerged_log(full_name, COMMIT_COUNT_FORMAT)
            .lines()
            .filter(|line| !line.trim().is_empty())
            .count()
    }

    fn commit_details_ref(&self, full_name: &str) -> Vec<CommitRecord> {
        self.unmerged_log(full_name, COMMIT_DETAIL_FORMAT)
            .lines()
            .filter_map(parse_commit_line)
            .collect()
    }

    fn contributors_ref(&self, full_name: &str) -> Vec<String> {
        dedupe_contributors(self.unmerged_log(full_name, CONTRIBUTOR_FORMAT).lines())
    }

    /// Commits reachable from `full_name` but not from the base branch.
    fn unmerged_log(&self, full_name: &str, format: &str) -> String {
        let range = format!("{}..{}", self.options.base_branch, full_name);
        match self.runner.run(&["log", format, &range, "--"]) {
            Ok(output) => output,
            Err(e) => {
                warn!("Could not read commits for {}, reporting none: {}", full_name, e);
                String::new()
            }
        }
    }
}
