mod commit;
mod remote;
mod staging;
mod stash;
mod status;

use std::collections::VecDeque;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::types::{Commit, Identity, StashEntry};

/// Simulated repository state.
///
/// The branch pointer is a plain label: switching branches rebinds the name
/// without partitioning commits, change sets, or stashes. The lesson this
/// model backs is about command syntax, not branch isolation, so that
/// limitation is intentional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    identity: Identity,
    branch: String,
    tracked: IndexSet<String>,
    working: IndexSet<String>,
    staged: IndexSet<String>,
    local_commits: Vec<Commit>,
    remote_commits: Vec<Commit>,
    stashes: VecDeque<StashEntry>,
}

impl Repository {
    /// Empty model on `main` with a placeholder identity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            identity: Identity::default(),
            branch: String::from("main"),
            tracked: IndexSet::new(),
            working: IndexSet::new(),
            staged: IndexSet::new(),
            local_commits: Vec::new(),
            remote_commits: Vec::new(),
            stashes: VecDeque::new(),
        }
    }

    /// The demo state the teaching page mounts with: a short pushed history
    /// and a couple of files carrying working changes.
    #[must_use]
    pub fn seeded() -> Self {
        let mut repo = Self::new();

        for (id, message) in [
            ("8d3b1e4", "Initial commit"),
            ("5a77c90", "Add course landing page"),
            ("f42aa71", "Style the lesson overview"),
        ] {
            repo.local_commits.push(Commit {
                id: String::from(id),
                message: String::from(message),
                author_name: String::from("Course Instructor"),
                author_email: String::from("instructor@webdev-course.dev"),
                pushed: true,
            });
        }
        repo.remote_commits = repo.local_commits.clone();

        for path in ["index.html", "styles/main.css"] {
            repo.tracked.insert(String::from(path));
        }
        for path in ["README.md", "src/app.js"] {
            repo.track_modified(path);
        }

        repo
    }

    /// Registers `path` as tracked and carrying an uncommitted change. This
    /// is the seeding hook for hosts and tests; paths already staged are
    /// left where they are.
    pub fn track_modified(&mut self, path: &str) {
        self.tracked.insert(String::from(path));
        if !self.staged.contains(path) {
            self.working.insert(String::from(path));
        }
    }

    /// Overwrites only the provided identity fields.
    pub fn set_identity(&mut self, name: Option<&str>, email: Option<&str>) {
        if let Some(name) = name {
            self.identity.name = String::from(name);
        }
        if let Some(email) = email {
            self.identity.email = String::from(email);
        }
    }

    /// Rebinds the branch pointer. Returns whether the repository was
    /// already on that branch.
    pub fn switch_branch(&mut self, name: &str) -> bool {
        if self.branch == name {
            return true;
        }
        self.branch = String::from(name);
        false
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
