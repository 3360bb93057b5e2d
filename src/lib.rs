pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use crate::core::analyzer::{Analyzer, AnalyzerOptions, BranchSummary, CommitRecord};
pub use crate::core::git::{GitRepository, GitRunner};
pub use utils::{GitUnmergedError, Result};
