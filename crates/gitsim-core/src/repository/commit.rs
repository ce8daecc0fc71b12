use sha2::{Digest, Sha256};

use crate::types::Commit;

use super::Repository;

impl Repository {
    /// Records the staged set as a new unpushed commit authored by the
    /// current identity, and returns it.
    ///
    /// Callers ensure the staging set is non-empty. Committed paths are
    /// resolved: they leave the staging set and the working set.
    pub fn commit(&mut self, message: &str) -> Commit {
        let id = self.next_commit_id(message);

        let committed: Vec<String> = self.staged.drain(..).collect();
        for path in &committed {
            self.working.shift_remove(path);
        }

        let commit = Commit {
            id,
            message: String::from(message),
            author_name: self.identity.name.clone(),
            author_email: self.identity.email.clone(),
            pushed: false,
        };
        self.local_commits.push(commit.clone());
        commit
    }

    /// Local history, oldest first.
    #[must_use]
    pub fn commits(&self) -> &[Commit] {
        &self.local_commits
    }

    /// The most recent `n` commits, newest first.
    pub fn recent_commits(&self, n: usize) -> impl Iterator<Item = &Commit> {
        self.local_commits.iter().rev().take(n)
    }

    // Seven hex characters, unique per history position: the parent id and
    // the history length both feed the digest.
    fn next_commit_id(&self, message: &str) -> String {
        let parent = self
            .local_commits
            .last()
            .map_or("root", |commit| commit.id.as_str());

        let mut hasher = Sha256::new();
        hasher.update(parent.as_bytes());
        hasher.update(message.as_bytes());
        hasher.update(self.identity.email.as_bytes());
        hasher.update(self.local_commits.len().to_le_bytes());

        let mut id: String = hasher
            .finalize()
            .iter()
            .take(4)
            .map(|byte| format!("{byte:02x}"))
            .collect();
        id.truncate(7);
        id
    }
}
