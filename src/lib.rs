//! booklint - checks GitBook-style Markdown trees for bad links

pub mod cli;
pub mod domain;
pub mod infra;
pub mod lint;

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_check, handle_completions},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Check(args) => {
            let config = Config::load()?;
            handle_check(args, &config, cli.verbose > 0)
        }
        Command::Completions(args) => {
            handle_completions(args)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flag when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .try_init();
}
