mod error;
mod view;

use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use gitsim_core::Repository;
use gitsim_interpreter::interpret;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "gitsim")]
#[command(about = "Practice git commands against a simulated repository", long_about = None)]
struct Cli {
    /// Start from an empty repository instead of the seeded demo state
    #[arg(long)]
    fresh: bool,

    /// Render the file-explorer view after every command
    #[arg(long)]
    explorer: bool,

    /// Print the final repository state as JSON on exit
    #[arg(long)]
    state_json: bool,

    /// Suppress the startup banner
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let mut repo = if cli.fresh {
        Repository::new()
    } else {
        Repository::seeded()
    };

    if !cli.quiet {
        println!("gitsim: type git commands to practice (exit to quit)");
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed == "exit" || trimmed == "quit" {
            break;
        }

        for out in interpret(&mut repo, &line) {
            println!("{out}");
        }
        if cli.explorer {
            for out in view::explorer(&repo) {
                println!("{out}");
            }
        }
    }

    if cli.state_json {
        println!("{}", serde_json::to_string_pretty(&repo)?);
    }
    Ok(())
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
