//! Command interpretation for the gitsim simulator.
//!
//! [`interpret`] is the single transition of the system: one input line
//! against one [`Repository`], producing the output lines for the host's
//! scrollback display. Every failure (parse error, unknown path, empty
//! staging set, empty stash) is reported as an ordinary output line, and a
//! failed command leaves the repository exactly as it found it.

mod commands;

use gitsim_core::Repository;
use gitsim_parse::parse_line;
use tracing::{debug, warn};

/// Runs one command line against the repository and returns the scrollback
/// output. Blank input produces no output and no state change.
pub fn interpret(repo: &mut Repository, line: &str) -> Vec<String> {
    if line.trim().is_empty() {
        return Vec::new();
    }

    debug!(line, "interpreting command");
    match parse_line(line) {
        Ok(command) => commands::dispatch(repo, command),
        Err(err) => {
            warn!(%err, "rejected input");
            vec![err.to_string()]
        }
    }
}
