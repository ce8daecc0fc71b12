use crate::types::{FileStatus, Identity};

use super::Repository;

impl Repository {
    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }

    #[must_use]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Local commits not yet marked pushed.
    #[must_use]
    pub fn ahead_count(&self) -> usize {
        self.local_commits
            .iter()
            .filter(|commit| !commit.pushed)
            .count()
    }

    #[must_use]
    pub fn is_working_change(&self, path: &str) -> bool {
        self.working.contains(path)
    }

    /// Status by set membership: staged wins over modified, everything else
    /// is clean.
    #[must_use]
    pub fn file_status(&self, path: &str) -> FileStatus {
        if self.staged.contains(path) {
            FileStatus::Staged
        } else if self.working.contains(path) {
            FileStatus::Modified
        } else {
            FileStatus::Clean
        }
    }

    /// Every tracked path with its status tag, in tracking order. This is
    /// the read model the host renders as a file-explorer view.
    pub fn tracked_files(&self) -> impl Iterator<Item = (&str, FileStatus)> {
        self.tracked
            .iter()
            .map(|path| (path.as_str(), self.file_status(path)))
    }

    /// Modified-but-unstaged paths, in tracking order.
    pub fn working_changes(&self) -> impl Iterator<Item = &str> {
        self.working.iter().map(String::as_str)
    }

    /// Paths staged for the next commit, in staging order.
    pub fn staged_files(&self) -> impl Iterator<Item = &str> {
        self.staged.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::repo_with_changes;
    use crate::types::FileStatus;

    #[test]
    fn ahead_count_follows_commits_and_push() {
        let mut repo = repo_with_changes();
        assert_eq!(repo.ahead_count(), 0);

        repo.stage_file("README.md");
        repo.commit("one");
        repo.stage_file("src/app.js");
        repo.commit("two");
        assert_eq!(repo.ahead_count(), 2);

        repo.push();
        assert_eq!(repo.ahead_count(), 0);
    }

    #[test]
    fn file_status_reflects_set_membership() {
        let mut repo = repo_with_changes();
        repo.stage_file("README.md");

        assert_eq!(repo.file_status("README.md"), FileStatus::Staged);
        assert_eq!(repo.file_status("src/app.js"), FileStatus::Modified);
        assert_eq!(repo.file_status("index.html"), FileStatus::Clean);
    }

    #[test]
    fn tracked_files_keep_tracking_order() {
        let mut repo = repo_with_changes();
        repo.stage_file("src/app.js");

        let view: Vec<(&str, FileStatus)> = repo.tracked_files().collect();
        assert_eq!(
            view,
            vec![
                ("README.md", FileStatus::Modified),
                ("src/app.js", FileStatus::Staged),
            ]
        );
    }
}
