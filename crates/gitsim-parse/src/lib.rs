//! Command-line parsing for the gitsim command simulator.
//!
//! One text line goes in, a typed [`Command`] comes out, or a [`ParseError`]
//! whose `Display` text is exactly the line shown to the user. Validation
//! that needs repository state (unknown paths, empty staging set, empty
//! stash) is not done here; that belongs to the interpreter.

mod command;
mod error;
mod parse;

pub use command::{AddTarget, Command};
pub use error::ParseError;
pub use parse::parse_line;
