mod add;
mod commit;
mod config;
mod log;
mod remote;
mod stash;
mod status;
mod switch;

use gitsim_core::Repository;
use gitsim_parse::Command;

pub(crate) fn dispatch(repo: &mut Repository, command: Command) -> Vec<String> {
    match command {
        Command::Status => status::run(repo),
        Command::Config { name, email } => config::run(repo, name.as_deref(), email.as_deref()),
        Command::Add(target) => add::run(repo, &target),
        Command::Commit { message } => commit::run(repo, &message),
        Command::Log => log::run(repo),
        Command::Push => remote::push(repo),
        Command::Pull => remote::pull(repo),
        Command::Switch { branch } => switch::run(repo, &branch),
        Command::StashPush { message } => stash::push(repo, &message),
        Command::StashList => stash::list(repo),
        Command::StashPop => stash::pop(repo),
    }
}
