pub mod parser;
pub mod report;


pub use parser::{Cli, RunSettings};

use crate::config::ConfigManager;
use crate::core::analyzer::Analyzer;
use crate::core::git::GitRepository;
use crate::utils::Result;
use std::io::{self, Write};
use std::path::Path;

pub fn execute_command(cli: Cli) -> Result<()> {
    cli.validate()?;

    let repo = GitRepository::open(&resolve_repo_path(&cli.repo))?;

    let config = ConfigManager::load()?;
    let settings = cli.resolve(&config, repo.root.clone());

    let stdout = io::stdout();
    run_report(repo, &settings, &mut stdout.lock())
}

/// Runs the analysis and writes the report to `out`.
///
/// Progress lines are written before the analysis starts. JSON mode writes
/// only the document.
pub fn run_report(
    repo: GitRepository,
    settings: &RunSettings,
    out: &mut impl Write,
) -> Result<()> {
    let analyzer = Analyzer::with_runner(repo, settings.options.clone());
    let options = analyzer.options();

    if settings.json {
        let branches = analyzer.analyze(settings.fetch, true, settings.verbose);
        writeln!(out, "{}", report::render_json(&branches)?)?;
        return Ok(());
    }

    if settings.fetch {
        writeln!(out, "Fetching latest changes from remote...")?;
    }
    writeln!(
        out,
        "\nFinding branches with commits in the last {} days...",
        options.recency_window_days
    )?;
    if let Some(pattern) = &options.ignore_substring {
        writeln!(out, "Ignoring branches containing: '{}'", pattern)?;
    }
    out.flush()?;

    let branches = analyzer.analyze(settings.fetch, true, settings.verbose);

    writeln!(
        out,
        "\nFound {} branches NOT merged into {}:\n",
        branches.len(),
        options.base_branch
    )?;

    if branches.is_empty() {
        writeln!(out, "No unmerged branches found.")?;
    } else if settings.verbose {
        report::render_verbose(out, &branches, &options.base_branch)?;
    } else {
        report::render_table(out, &branches)?;
    }

    Ok(())
}

fn resolve_repo_path(path: &Path) -> std::path::PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
