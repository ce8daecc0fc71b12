/// A recognized command line, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Status,
    /// At least one of the two fields is set; the parser rejects a `config`
    /// line carrying neither.
    Config {
        name: Option<String>,
        email: Option<String>,
    },
    Add(AddTarget),
    Commit {
        message: String,
    },
    Log,
    Push,
    Pull,
    Switch {
        branch: String,
    },
    StashPush {
        message: String,
    },
    StashList,
    StashPop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddTarget {
    /// `git add .`
    All,
    Path(String),
}
