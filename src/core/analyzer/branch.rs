use super::commit::CommitRecord;
use chrono::{DateTime, NaiveDateTime, Utc};
use log::debug;
use serde::Serialize;

/// Fields are separated by 0x1f, which git refuses in ref names.
pub const BRANCH_LIST_FORMAT: &str =
    "--format=%(refname:short)%1f%(symref)%1f%(committerdate:iso8601)";
pub const FIELD_SEPARATOR: char = '\x1f';

#[derive(Debug, Clone, Serialize)]
pub struct BranchSummary {
    pub name: String,
    pub full_name: String,
    pub last_commit_time: DateTime<Utc>,
    /// Timestamp exactly as git printed it.
    pub last_commit_display: String,
    pub unmerged_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commits: Option<Vec<CommitRecord>>,
}

/// Decides which `git branch -r` lines become [`BranchSummary`] rows.
pub struct BranchFilter<'a> {
    pub remote: &'a str,
    pub ignore_substring: Option<&'a str>,
    pub cutoff: DateTime<Utc>,
}

impl BranchFilter<'_> {
    pub fn parse_line(&self, line: &str) -> Option<BranchSummary> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let mut fields = line.splitn(3, FIELD_SEPARATOR);
        let (Some(full_name), Some(symref), Some(date_str)) =
            (fields.next(), fields.next(), fields.next())
        else {
            debug!("Skipping malformed branch line: {}", line);
            return None;
        };
        let full_name = full_name.trim();
        let date_str = date_str.trim();

        if full_name.is_empty() {
            debug!("Skipping branch line without a name: {}", line);
            return None;
        }

        if let Some(pattern) = self.ignore_substring {
            if full_name.contains(pattern) {
                return None;
            }
        }

        if !symref.trim().is_empty() || is_symbolic_ref(full_name, self.remote) {
            return None;
        }

        let Some(last_commit_time) = parse_commit_time(date_str) else {
            debug!("Skipping {}: unparseable date '{}'", full_name, date_str);
            return None;
        };

        if last_commit_time < self.cutoff {
            return None;
        }

        Some(BranchSummary {
            name: strip_remote(full_name, self.remote).to_string(),
            full_name: full_name.to_string(),
            last_commit_time,
            last_commit_display: date_str.to_string(),
            unmerged_count: 0,
            contributors: None,
            commits: None,
        })
    }
}

/// Name-based fallback for symbolic refs: `origin` (the short form of
/// `origin/HEAD` on recent git) or any `HEAD` ref.
pub fn is_symbolic_ref(name: &str, remote: &str) -> bool {
    name == remote || name == "HEAD" || name.ends_with("/HEAD")
}

pub fn strip_remote<'n>(name: &'n str, remote: &str) -> &'n str {
    name.strip_prefix(remote)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(name)
}

pub fn qualify(name: &str, remote: &str) -> String {
    if strip_remote(name, remote).len() != name.len() {
        name.to_string()
    } else {
        format!("{}/{}", remote, name)
    }
}

/// Parses git's `iso8601` rendering (`2024-01-15 10:30:00 +0100`).
///
/// A value without an offset is read as UTC.
pub fn parse_commit_time(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S %z") {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn line(name: &str, date: &str) -> String {
        format!("{}\x1f\x1f{}", name, date)
    }

    fn filter(ignore: Option<&str>) -> BranchFilter<'_> {
        BranchFilter {
            remote: "origin",
            ignore_substring: ignore,
            cutoff: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_parse_line_strips_remote() {
        let branch = filter(None)
            .parse_line(&line("origin/feature/user-auth", "2024-02-10 09:15:00 +0100"))
            .expect("line should parse");

        assert_eq!(branch.name, "feature/user-auth");
        assert_eq!(branch.full_name, "origin/feature/user-auth");
        assert_eq!(branch.last_commit_display, "2024-02-10 09:15:00 +0100");
        assert_eq!(
            branch.last_commit_time,
            Utc.with_ymd_and_hms(2024, 2, 10, 8, 15, 0).unwrap()
        );
        assert_eq!(branch.unmerged_count, 0);
        assert!(branch.contributors.is_none());
        assert!(branch.commits.is_none());
    }

    #[test]
    fn test_parse_line_rejects_symbolic_refs() {
        let f = filter(None);
        assert!(f.parse_line(&line("origin", "2024-02-10 09:15:00 +0000")).is_none());
        assert!(f.parse_line(&line("origin/HEAD", "2024-02-10 09:15:00 +0000")).is_none());
    }

    #[test]
    fn test_parse_line_rejects_any_remote_head() {
        let f = filter(None);
        assert!(f
            .parse_line("upstream\x1frefs/remotes/upstream/main\x1f2024-02-10 09:15:00 +0000")
            .is_none());
        assert!(f.parse_line(&line("upstream/main", "2024-02-10 09:15:00 +0000")).is_some());
        assert!(f.parse_line(&line("origin/feature/HEADER", "2024-02-10 09:15:00 +0000")).is_some());
    }

    #[test]
    fn test_parse_line_applies_ignore_substring() {
        let f = filter(Some("-eld"));
        assert!(f
            .parse_line(&line("origin/feature/mobile-eld", "2024-02-10 09:15:00 +0000"))
            .is_none());
        assert!(f
            .parse_line(&line("origin/feature/mobile", "2024-02-10 09:15:00 +0000"))
            .is_some());
    }

    #[test]
    fn test_parse_line_drops_bad_dates_and_shapes() {
        let f = filter(None);
        assert!(f.parse_line(&line("origin/feature/x", "yesterday")).is_none());
        assert!(f.parse_line("origin/feature/x").is_none());
        assert!(f.parse_line("origin/feature/x|2024-02-10 09:15:00 +0000").is_none());
        assert!(f.parse_line(&line("", "2024-02-10 09:15:00 +0000")).is_none());
        assert!(f.parse_line("   ").is_none());
    }

    #[test]
    fn test_parse_line_applies_cutoff() {
        let f = filter(None);
        assert!(f
            .parse_line(&line("origin/old", "2023-12-31 23:59:59 +0000"))
            .is_none());
        assert!(f.parse_line(&line("origin/edge", "2024-01-01 00:00:00 +0000")).is_some());
    }

    #[test]
    fn test_parse_commit_time_variants() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 4, 3, 2, 1).unwrap();
        assert_eq!(
            parse_commit_time("2024-05-04 05:02:01 +0200"),
            Some(expected)
        );
        assert_eq!(parse_commit_time("2024-05-04T03:02:01Z"), Some(expected));
        assert_eq!(parse_commit_time("2024-05-04 03:02:01"), Some(expected));
        assert_eq!(parse_commit_time("not a date"), None);

        let offset = parse_commit_time("2024-05-04 03:02:01 -0500").unwrap();
        assert_eq!(offset - expected, Duration::hours(5));
    }

    #[test]
    fn test_strip_and_qualify() {
        assert_eq!(strip_remote("origin/dev", "origin"), "dev");
        assert_eq!(strip_remote("dev", "origin"), "dev");
        assert_eq!(strip_remote("originals/dev", "origin"), "originals/dev");
        assert_eq!(strip_remote("upstream/dev", "origin"), "upstream/dev");

        assert_eq!(qualify("dev", "origin"), "origin/dev");
        assert_eq!(qualify("origin/dev", "origin"), "origin/dev");
        assert_eq!(qualify("originals/dev", "origin"), "origin/originals/dev");
    }
}
