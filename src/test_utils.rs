pub mod test_helpers {
    use chrono::{DateTime, Duration, Utc};
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::process::Command;
    use tempfile::TempDir;

    /// A bare `origin` plus a working clone whose remote-tracking refs hold:
    ///
    /// - `origin/dev`: base branch, with `hotfix/bug-123` merged in
    /// - `origin/feature/user-auth`: 3 commits, Test User and John Doe
    /// - `origin/feature/database`: 2 commits, Jane Smith
    /// - `origin/feature/api-endpoints`: 2 commits, Bob Johnson (newest)
    /// - `origin/hotfix/bug-123`: fully merged
    /// - `origin/HEAD` pointing at dev
    ///
    /// All commit dates lie in the past relative to the moment of creation.
    pub struct RemoteFixture {
        _temp_dir: TempDir,
        work: PathBuf,
        origin: PathBuf,
    }

    impl RemoteFixture {
        pub fn work_path(&self) -> &Path {
            &self.work
        }

        pub fn origin_path(&self) -> &Path {
            &self.origin
        }
    }

    pub fn git(dir: &Path, args: &[&str]) {
        git_at(dir, args, None);
    }

    fn git_at(dir: &Path, args: &[&str], when: Option<DateTime<Utc>>) {
        let mut cmd = Command::new("git");
        cmd.current_dir(dir).args(args);
        if let Some(when) = when {
            let stamp = format!("{} +0000", when.timestamp());
            cmd.env("GIT_AUTHOR_DATE", &stamp)
                .env("GIT_COMMITTER_DATE", &stamp);
        }

        let output = cmd.output().expect("Failed to execute git");
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    pub fn commit_file(
        dir: &Path,
        file: &str,
        message: &str,
        author: Option<&str>,
        when: DateTime<Utc>,
    ) {
        let path = dir.join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, format!("{}\n", message)).expect("Failed to write file");
        git(dir, &["add", file]);

        let mut args = vec!["commit", "-q", "-m", message];
        if let Some(author) = author {
            args.push("--author");
            args.push(author);
        }
        git_at(dir, &args, Some(when));
    }

    pub fn setup_remote_fixture() -> RemoteFixture {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        let origin = root.join("origin.git");
        let work = root.join("work");

        git(&root, &["init", "-q", "--bare", "--initial-branch=dev", "origin.git"]);
        git(&root, &["init", "-q", "--initial-branch=dev", "work"]);
        git(&work, &["config", "user.name", "Test User"]);
        git(&work, &["config", "user.email", "test@example.com"]);
        git(&work, &["config", "commit.gpgsign", "false"]);
        let origin_url = origin.to_str().expect("temp path should be UTF-8");
        git(&work, &["remote", "add", "origin", origin_url]);

        let now = Utc::now();
        let days_ago = |d: i64| now - Duration::days(d);

        commit_file(&work, "README.md", "Initial commit", None, days_ago(20));
        commit_file(&work, "src/main.txt", "Add project skeleton", None, days_ago(15));
        git(&work, &["push", "-q", "origin", "dev"]);

        git(&work, &["checkout", "-q", "-b", "hotfix/bug-123"]);
        commit_file(&work, "src/fix.txt", "Fix bug 123", None, days_ago(10));
        git(&work, &["push", "-q", "origin", "hotfix/bug-123"]);
        git(&work, &["checkout", "-q", "dev"]);
        git_at(
            &work,
            &["merge", "-q", "--no-ff", "hotfix/bug-123", "-m", "Merge hotfix/bug-123"],
            Some(days_ago(9)),
        );
        git(&work, &["push", "-q", "origin", "dev"]);

        git(&work, &["checkout", "-q", "-b", "feature/user-auth"]);
        commit_file(&work, "auth/model.txt", "Add user model", None, days_ago(6));
        commit_file(
            &work,
            "auth/auth.txt",
            "Add user authentication",
            Some("John Doe <john@example.com>"),
            days_ago(5),
        );
        commit_file(&work, "auth/login.txt", "Add login form", None, days_ago(4));
        git(&work, &["push", "-q", "origin", "feature/user-auth"]);
        git(&work, &["checkout", "-q", "dev"]);

        git(&work, &["checkout", "-q", "-b", "feature/database"]);
        let jane = Some("Jane Smith <jane@example.com>");
        commit_file(&work, "db/schema.txt", "Add database schema", jane, days_ago(3));
        commit_file(&work, "db/migrate.txt", "Add database migrations", jane, days_ago(2));
        git(&work, &["push", "-q", "origin", "feature/database"]);
        git(&work, &["checkout", "-q", "dev"]);

        git(&work, &["checkout", "-q", "-b", "feature/api-endpoints"]);
        let bob = Some("Bob Johnson <bob@example.com>");
        commit_file(
            &work,
            "api/routes.txt",
            "Add REST API endpoints",
            bob,
            days_ago(2) + Duration::hours(6),
        );
        commit_file(&work, "api/docs.txt", "Document API endpoints", bob, days_ago(1));
        git(&work, &["push", "-q", "origin", "feature/api-endpoints"]);
        git(&work, &["checkout", "-q", "dev"]);

        git(&work, &["remote", "set-head", "origin", "dev"]);

        RemoteFixture {
            _temp_dir: temp_dir,
            work,
            origin,
        }
    }
}
