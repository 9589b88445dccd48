//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug output
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gitling - a minimal Git repository tool
#[derive(Parser, Debug)]
#[command(name = "gitling")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if gitling was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty Git repository
    #[command(
        name = "init",
        long_about = "Create an empty Git repository.\n\n\
            Lays out the metadata directory skeleton (branches, objects, \
            refs/tags, refs/heads) and the seed files (description, HEAD, \
            config) under <directory>/.git. A missing target directory is \
            created, parents included. Re-initialization over a populated \
            metadata directory is refused."
    )]
    Init {
        /// Directory to initialize (defaults to the current directory)
        directory: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
