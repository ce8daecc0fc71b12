use std::fmt;

use serde::{Deserialize, Serialize};

/// Author identity used for new commits, set by `git config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            name: String::from("Your Name"),
            email: String::from("you@example.com"),
        }
    }
}

/// A recorded snapshot in the local history. Immutable once created except
/// for `pushed`, which flips to `true` exactly once, in bulk, on push.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub id: String,
    pub message: String,
    pub author_name: String,
    pub author_email: String,
    pub pushed: bool,
}

/// Shelved working-directory state: the set of modified paths at the moment
/// of stashing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StashEntry {
    pub message: String,
    pub snapshot: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Staged,
    Modified,
    Clean,
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Staged => "staged",
            Self::Modified => "modified",
            Self::Clean => "clean",
        };
        write!(f, "{s}")
    }
}

/// Result of reconciling the local history against the remote mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullOutcome {
    UpToDate,
    Merged { count: usize },
}
