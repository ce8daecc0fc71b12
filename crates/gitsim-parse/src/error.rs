use thiserror::Error;

/// Parse failures. The `Display` text of each variant is the exact line the
/// interpreter surfaces to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Command must start with git")]
    NotGit,

    #[error("usage: git <command> [<args>]")]
    MissingSubcommand,

    #[error("git: '{name}' not implemented in simulation")]
    UnknownSubcommand { name: String },

    #[error("fatal: pathspec required")]
    MissingPathspec,

    #[error("fatal: branch name required")]
    MissingBranch,

    #[error("error: commit message required, use -m \"message\"")]
    MissingMessage,

    #[error("error: commit message must be wrapped in double quotes")]
    UnquotedMessage,

    #[error("usage: git config user.name \"Your Name\" and/or user.email \"you@email.com\"")]
    ConfigUsage,

    #[error("Unsupported stash subcommand in simulation")]
    UnsupportedStash,
}
