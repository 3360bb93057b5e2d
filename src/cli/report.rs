use crate::core::analyzer::commit::contributor_name;
use crate::core::analyzer::BranchSummary;
use crate::utils::Result;
use std::io::{self, Write};

pub fn render_json(branches: &[BranchSummary]) -> Result<String> {
    Ok(serde_json::to_string_pretty(branches)?)
}

pub fn render_table(out: &mut impl Write, branches: &[BranchSummary]) -> io::Result<()> {
    writeln!(
        out,
        "{:<50} {:<10} {:<40} {}",
        "Branch Name", "Commits", "Contributors", "Last Commit Date"
    )?;
    writeln!(out, "{}", "-".repeat(140))?;

    for branch in branches {
        let contributors = branch
            .contributors
            .as_deref()
            .map(|entries| {
                let names: Vec<&str> = entries.iter().map(|c| contributor_name(c)).collect();
                truncate_string(&names.join(", "), 38)
            })
            .unwrap_or_default();

        writeln!(
            out,
            "{:<50} {:<10} {:<40} {}",
            branch.name, branch.unmerged_count, contributors, branch.last_commit_display
        )?;
    }

    writeln!(out, "\n\nTotal unmerged branches: {}", branches.len())
}

pub fn render_verbose(
    out: &mut impl Write,
    branches: &[BranchSummary],
    base_branch: &str,
) -> io::Result<()> {
    for branch in branches {
        writeln!(out, "\n{}", "=".repeat(100))?;
        writeln!(out, "Branch: {}", branch.name)?;
        writeln!(out, "Unmerged commits: {}", branch.unmerged_count)?;
        writeln!(out, "Last commit date: {}", branch.last_commit_display)?;

        if let Some(contributors) = branch.contributors.as_deref() {
            if !contributors.is_empty() {
                writeln!(out, "Contributors: {}", contributors.join(", "))?;
            }
        }

        if let Some(commits) = branch.commits.as_deref() {
            if !commits.is_empty() {
                writeln!(out, "\nMissing commits against {}:", base_branch)?;
                writeln!(
                    out,
                    "  {:<10} {:<30} {:<26} {}",
                    "Hash", "Author", "Date", "Subject"
                )?;
                writeln!(
                    out,
                    "  {} {} {} {}",
                    "-".repeat(10),
                    "-".repeat(30),
                    "-".repeat(26),
                    "-".repeat(40)
                )?;
                for commit in commits {
                    writeln!(
                        out,
                        "  {:<10} {:<30} {:<26} {}",
                        commit.short_hash,
                        truncate_string(&commit.author(), 30),
                        commit.commit_date,
                        truncate_string(&commit.subject, 40)
                    )?;
                }
            }
        }
    }

    writeln!(out, "\n{}", "=".repeat(100))?;
    writeln!(out, "\nTotal unmerged branches: {}", branches.len())
}

/// Character-based so multi-byte names never split.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
