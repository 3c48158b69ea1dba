//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// booklint - checks GitBook-style documentation for bad links
#[derive(Parser, Debug)]
#[command(name = "booklint", version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v shows progress and warnings, -vv adds debug detail)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a source directory for bad links, duplicates, and orphans
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Source directory (overrides config file)
    pub source: Option<PathBuf>,

    /// Manifest filename inside the source directory
    #[arg(short, long)]
    pub summary: Option<String>,

    /// Exit with a failure status when bad links are found
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
