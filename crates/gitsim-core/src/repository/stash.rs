use crate::types::StashEntry;

use super::Repository;

impl Repository {
    /// Shelves all uncommitted edits: snapshots the working set, then
    /// clears both the working and staging sets. The new entry goes on the
    /// front of the stack.
    pub fn stash_push(&mut self, message: &str) {
        let snapshot: Vec<String> = self.working.iter().cloned().collect();
        self.working.clear();
        self.staged.clear();
        self.stashes.push_front(StashEntry {
            message: String::from(message),
            snapshot,
        });
    }

    /// Removes the most recent stash entry and restores its snapshot as the
    /// working set. Returns `None` on an empty stack; callers check first.
    pub fn stash_pop(&mut self) -> Option<StashEntry> {
        let entry = self.stashes.pop_front()?;
        self.working = entry.snapshot.iter().cloned().collect();
        Some(entry)
    }

    /// Stash entries, most recent first.
    pub fn stashes(&self) -> impl Iterator<Item = &StashEntry> {
        self.stashes.iter()
    }

    #[must_use]
    pub fn has_stashes(&self) -> bool {
        !self.stashes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::repo_with_changes;

    #[test]
    fn stash_push_clears_both_change_sets() {
        let mut repo = repo_with_changes();
        repo.stage_file("README.md");

        repo.stash_push("WIP");

        assert_eq!(repo.working_changes().count(), 0);
        assert_eq!(repo.staged_files().count(), 0);
        assert!(repo.has_stashes());
    }

    #[test]
    fn stash_pop_restores_most_recent_snapshot() {
        let mut repo = repo_with_changes();
        repo.stash_push("first");
        repo.track_modified("styles/main.css");
        repo.stash_push("second");

        let entry = repo.stash_pop().expect("stash should not be empty");

        assert_eq!(entry.message, "second");
        assert_eq!(entry.snapshot, vec!["styles/main.css"]);
        let working: Vec<&str> = repo.working_changes().collect();
        assert_eq!(working, vec!["styles/main.css"]);
    }

    #[test]
    fn stash_pop_on_empty_stack_returns_none() {
        let mut repo = repo_with_changes();
        assert!(repo.stash_pop().is_none());
        assert_eq!(repo.working_changes().count(), 2);
    }

    #[test]
    fn stashes_iterate_most_recent_first() {
        let mut repo = repo_with_changes();
        repo.stash_push("first");
        repo.stash_push("second");

        let messages: Vec<&str> = repo
            .stashes()
            .map(|entry| entry.message.as_str())
            .collect();
        assert_eq!(messages, vec!["second", "first"]);
    }
}
