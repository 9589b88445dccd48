//! cli
//!
//! Command-line interface layer for Gitling.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//!
//! The CLI layer is thin: it parses arguments via clap and dispatches to
//! handlers that drive [`crate::core`]. All repository state changes happen
//! in the core layer.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::Result;

/// Execution context shared by command handlers.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Directory to run in, when overridden with `--cwd`.
    pub cwd: Option<PathBuf>,
    /// Minimal output.
    pub quiet: bool,
    /// Verbose diagnostics.
    pub debug: bool,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        cwd: cli.cwd.clone(),
        quiet: cli.quiet,
        debug: cli.debug,
    };

    commands::dispatch(cli.command, &ctx)
}
