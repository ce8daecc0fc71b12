use once_cell::sync::Lazy;
use regex::Regex;

use crate::command::{AddTarget, Command};
use crate::error::ParseError;

const DEFAULT_STASH_MESSAGE: &str = "WIP";

// Quoted values are captured from the raw line rather than from the
// whitespace-split tokens, since messages may contain spaces. Embedded
// quotes are not supported.
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"user\.name\s+"([^"]*)""#).expect("hardcoded pattern"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"user\.email\s+"([^"]*)""#).expect("hardcoded pattern"));
static MESSAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"-m\s*"([^"]*)""#).expect("hardcoded pattern"));

/// Parses one input line into a [`Command`].
///
/// Tokens come from whitespace splitting; the first must be the literal
/// `git`. Flags outside the recognized grammar (such as `--global`) are
/// ignored rather than rejected.
#[must_use = "parsing result should be handled"]
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let Some((&first, rest)) = tokens.split_first() else {
        return Err(ParseError::NotGit);
    };
    if first != "git" {
        return Err(ParseError::NotGit);
    }

    let Some((&subcommand, args)) = rest.split_first() else {
        return Err(ParseError::MissingSubcommand);
    };

    match subcommand {
        "status" => Ok(Command::Status),
        "config" => parse_config(line),
        "add" => parse_add(args),
        "commit" => parse_commit(line, args),
        "log" => Ok(Command::Log),
        "push" => Ok(Command::Push),
        "pull" => Ok(Command::Pull),
        "switch" => parse_switch(args),
        "stash" => parse_stash(line, args),
        other => Err(ParseError::UnknownSubcommand {
            name: String::from(other),
        }),
    }
}

fn quoted_capture(re: &Regex, line: &str) -> Option<String> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| String::from(m.as_str()))
}

fn parse_config(line: &str) -> Result<Command, ParseError> {
    let name = quoted_capture(&NAME_RE, line);
    let email = quoted_capture(&EMAIL_RE, line);

    if name.is_none() && email.is_none() {
        return Err(ParseError::ConfigUsage);
    }
    Ok(Command::Config { name, email })
}

fn parse_add(args: &[&str]) -> Result<Command, ParseError> {
    match args.first() {
        None => Err(ParseError::MissingPathspec),
        Some(&".") => Ok(Command::Add(AddTarget::All)),
        Some(&path) => Ok(Command::Add(AddTarget::Path(String::from(path)))),
    }
}

fn parse_commit(line: &str, args: &[&str]) -> Result<Command, ParseError> {
    if !args.iter().any(|arg| arg.starts_with("-m")) {
        return Err(ParseError::MissingMessage);
    }
    let Some(message) = quoted_capture(&MESSAGE_RE, line) else {
        return Err(ParseError::UnquotedMessage);
    };
    Ok(Command::Commit { message })
}

fn parse_switch(args: &[&str]) -> Result<Command, ParseError> {
    match args.first() {
        None => Err(ParseError::MissingBranch),
        Some(&branch) => Ok(Command::Switch {
            branch: String::from(branch),
        }),
    }
}

fn parse_stash(line: &str, args: &[&str]) -> Result<Command, ParseError> {
    let message = || {
        quoted_capture(&MESSAGE_RE, line)
            .unwrap_or_else(|| String::from(DEFAULT_STASH_MESSAGE))
    };

    match args.first() {
        None | Some(&"push") => Ok(Command::StashPush { message: message() }),
        Some(&"list") => Ok(Command::StashList),
        Some(&"pop") => Ok(Command::StashPop),
        Some(_) => Err(ParseError::UnsupportedStash),
    }
}
