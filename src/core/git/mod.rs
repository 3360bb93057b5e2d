use crate::utils::error::Result;

pub mod repository;

pub use repository::{execute_git_command, GitRepository};

/// Seam between the analyzer and the `git` executable.
///
/// `run` returns trimmed stdout on success. A spawn failure or non-zero exit
/// is an error carrying the arguments and captured stderr, so callers can tell
/// "no output" apart from "query failed".
pub trait GitRunner {
    fn run(&self, args: &[&str]) -> Result<String>;
}
