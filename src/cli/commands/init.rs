//! init command - Create an empty Git repository

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::repository::Repository;
use crate::ui::output::{self, Verbosity};

/// Create an empty repository at `directory`.
///
/// Defaults to `--cwd`, then the process working directory. A relative
/// `directory` is resolved under `--cwd` when both are given. Refuses to
/// reinitialize over a populated metadata directory.
pub fn init(ctx: &Context, directory: Option<&Path>) -> Result<()> {
    let target = match (directory, &ctx.cwd) {
        (Some(dir), Some(cwd)) if dir.is_relative() => cwd.join(dir),
        (Some(dir), _) => dir.to_path_buf(),
        (None, Some(cwd)) => cwd.clone(),
        (None, None) => {
            std::env::current_dir().context("failed to determine current directory")?
        }
    };

    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);
    output::debug(
        format!("initializing repository at {}", target.display()),
        verbosity,
    );

    let repo = Repository::init(&target)
        .with_context(|| format!("failed to initialize repository at {}", target.display()))?;

    output::success(
        format!(
            "Initialized empty Git repository in {}",
            repo.gitdir().display()
        ),
        verbosity,
    );

    Ok(())
}
