use crate::types::{Commit, PullOutcome};

use super::Repository;

impl Repository {
    /// Marks every unpushed local commit as pushed and rebuilds the remote
    /// mirror wholesale. Returns how many commits were newly pushed; zero
    /// means there was nothing to do.
    pub fn push(&mut self) -> usize {
        let mut newly_pushed = 0;
        for commit in &mut self.local_commits {
            if !commit.pushed {
                commit.pushed = true;
                newly_pushed += 1;
            }
        }

        self.remote_commits = self
            .local_commits
            .iter()
            .filter(|commit| commit.pushed)
            .cloned()
            .collect();

        newly_pushed
    }

    /// Reconciles local history against the remote mirror: appends any
    /// remote commit whose id is unknown locally. With no independent
    /// remote actor in the simulation this reports up to date in practice.
    pub fn pull(&mut self) -> PullOutcome {
        let pushed_local = self
            .local_commits
            .iter()
            .filter(|commit| commit.pushed)
            .count();
        if self.remote_commits.len() == pushed_local {
            return PullOutcome::UpToDate;
        }

        let remote = self.remote_commits.clone();
        let mut count = 0;
        for commit in remote {
            let known = self
                .local_commits
                .iter()
                .any(|local| local.id == commit.id);
            if !known {
                self.local_commits.push(commit);
                count += 1;
            }
        }
        PullOutcome::Merged { count }
    }

    /// The remote mirror: always the pushed subset of local history.
    #[must_use]
    pub fn remote_commits(&self) -> &[Commit] {
        &self.remote_commits
    }
}
