//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Drives [`crate::core`] to do the work
//! 3. Formats and displays output through [`crate::ui::output`]

mod completion;
mod init;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use init::init;

use anyhow::Result;

use super::args::Command;
use super::Context;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Init { directory } => init(ctx, directory.as_deref()),
        Command::Completion { shell } => completion(shell),
    }
}
