use super::branch::FIELD_SEPARATOR;
use log::debug;
use serde::Serialize;
use std::collections::HashSet;

/// Fields are separated by 0x1f since names and emails may contain `|`.
/// Subject goes last so anything inside it survives `splitn`.
pub const COMMIT_DETAIL_FORMAT: &str = "--format=%h%x1f%an%x1f%ae%x1f%ci%x1f%s";
pub const CONTRIBUTOR_FORMAT: &str = "--format=%an <%ae>";
pub const COMMIT_COUNT_FORMAT: &str = "--format=%h";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitRecord {
    pub short_hash: String,
    pub author_name: String,
    pub author_email: String,
    pub subject: String,
    pub commit_date: String,
}

impl CommitRecord {
    pub fn author(&self) -> String {
        format!("{} <{}>", self.author_name, self.author_email)
    }
}

pub fn parse_commit_line(line: &str) -> Option<CommitRecord> {
    let mut parts = line.splitn(5, FIELD_SEPARATOR);
    let (Some(hash), Some(name), Some(email), Some(date), Some(subject)) = (
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
    ) else {
        debug!("Skipping malformed commit line: {}", line);
        return None;
    };

    let short_hash = hash.trim();
    if short_hash.is_empty() {
        debug!("Skipping commit line without hash: {}", line);
        return None;
    }

    Some(CommitRecord {
        short_hash: short_hash.to_string(),
        author_name: name.trim().to_string(),
        author_email: email.trim().to_string(),
        subject: subject.trim().to_string(),
        commit_date: date.trim().to_string(),
    })
}

/// Unique entries in first-seen order.
pub fn dedupe_contributors<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut contributors = Vec::new();

    for line in lines {
        let entry = line.trim();
        if entry.is_empty() {
            continue;
        }
        if seen.insert(entry) {
            contributors.push(entry.to_string());
        }
    }

    contributors
}

/// `"Jane Smith <jane@example.com>"` -> `"Jane Smith"`.
pub fn contributor_name(entry: &str) -> &str {
    entry.split('<').next().unwrap_or(entry).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(fields: &[&str]) -> String {
        fields.join("\x1f")
    }

    #[test]
    fn test_parse_commit_line() {
        let commit = parse_commit_line(&line(&[
            "a1b2c3d",
            "John Doe",
            "john@example.com",
            "2024-02-10 09:15:00 +0100",
            "Add user authentication",
        ]))
        .expect("line should parse");

        assert_eq!(commit.short_hash, "a1b2c3d");
        assert_eq!(commit.author_name, "John Doe");
        assert_eq!(commit.author_email, "john@example.com");
        assert_eq!(commit.commit_date, "2024-02-10 09:15:00 +0100");
        assert_eq!(commit.subject, "Add user authentication");
        assert_eq!(commit.author(), "John Doe <john@example.com>");
    }

    #[test]
    fn test_parse_commit_line_keeps_pipes_in_every_field() {
        let commit = parse_commit_line(&line(&[
            "a1b2c3d",
            "Ann | Lee",
            "ann|lee@example.com",
            "2024-02-10 09:15:00 +0000",
            "a | b | c",
        ]))
        .unwrap();
        assert_eq!(commit.author_name, "Ann | Lee");
        assert_eq!(commit.author_email, "ann|lee@example.com");
        assert_eq!(commit.commit_date, "2024-02-10 09:15:00 +0000");
        assert_eq!(commit.subject, "a | b | c");
    }

    #[test]
    fn test_parse_commit_line_allows_empty_subject() {
        let commit = parse_commit_line(&line(&[
            "a1b2c3d",
            "Jane",
            "jane@example.com",
            "2024-02-10 09:15:00 +0000",
            "",
        ]))
        .unwrap();
        assert_eq!(commit.subject, "");
    }

    #[test]
    fn test_parse_commit_line_rejects_malformed() {
        assert!(parse_commit_line(&line(&["a1b2c3d", "Jane", "jane@example.com"])).is_none());
        assert!(parse_commit_line("").is_none());
        assert!(parse_commit_line("a1b2c3d|Jane|jane@example.com|2024-02-10|subject").is_none());
        assert!(parse_commit_line(&line(&["", "Jane", "jane@example.com", "2024-02-10", "s"])).is_none());
    }

    #[test]
    fn test_dedupe_contributors_preserves_first_seen_order() {
        let lines = [
            "Test User <test@example.com>",
            "John Doe <john@example.com>",
            "Test User <test@example.com>",
            "",
            "John Doe <john@example.com>",
            "John Doe <john.doe@example.com>",
        ];

        let contributors = dedupe_contributors(lines);
        assert_eq!(
            contributors,
            vec![
                "Test User <test@example.com>",
                "John Doe <john@example.com>",
                "John Doe <john.doe@example.com>",
            ]
        );
    }

    #[test]
    fn test_contributor_name() {
        assert_eq!(contributor_name("Jane Smith <jane@example.com>"), "Jane Smith");
        assert_eq!(contributor_name("no-email"), "no-email");
    }
}
