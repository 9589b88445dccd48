//! core::fsops
//!
//! Filesystem primitives underneath repository resolution.
//!
//! These helpers wrap `std::fs` with the exact semantics the repository
//! layer depends on: existence tests that never error, idempotent recursive
//! directory creation with an explicit mode, and best-effort recursive
//! removal.
//!
//! # Concurrency
//!
//! Every operation here is a check-then-act sequence of blocking system
//! calls. Nothing provides mutual exclusion; callers are assumed to be the
//! single writer for the paths involved.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Mode for directories created during repository bootstrap.
pub const DIR_MODE: u32 = 0o755;

/// True iff `path` exists and is a directory.
///
/// Follows symlinks. Never returns an error: an absent or unreadable path
/// reads as `false`.
pub fn is_directory(path: &Path) -> bool {
    fs::metadata(path).map(|meta| meta.is_dir()).unwrap_or(false)
}

/// True iff `path` resolves to any filesystem entry (file, directory, or
/// other).
pub fn file_exists(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}

/// True iff the directory at `path` can be opened and contains no entries.
///
/// The self/parent pseudo-entries do not count. A path that cannot be
/// opened at all (missing, not a directory, permission denied) reads as
/// non-empty rather than as an error.
pub fn is_directory_empty(path: &Path) -> bool {
    match fs::read_dir(path) {
        Ok(mut entries) => entries.next().is_none(),
        Err(_) => false,
    }
}

/// Recursively create `path` and any missing parents, `mkdir -p` style.
///
/// Missing components are created top-down with `mode` (Unix; the mode is
/// ignored elsewhere). Components that already exist as directories are
/// accepted silently, so the call is idempotent. A component that exists as
/// anything other than a directory stops the walk immediately; components
/// created before a failure are left in place.
pub fn mkdir_p(path: &Path, mode: u32) -> io::Result<()> {
    if path.as_os_str().is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty path"));
    }

    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        match fs::metadata(&current) {
            Ok(meta) if meta.is_dir() => continue,
            Ok(_) => {
                return Err(io::Error::new(
                    io::ErrorKind::NotADirectory,
                    format!("{} exists but is not a directory", current.display()),
                ));
            }
            Err(_) => create_dir_with_mode(&current, mode)?,
        }
    }

    Ok(())
}

fn create_dir_with_mode(path: &Path, mode: u32) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;
    builder.create(path)
}

/// Recursively delete a directory's contents, then the directory itself.
///
/// Removal is best-effort: a failure on one entry is recorded and the
/// remaining siblings are still processed. Non-directories are unlinked;
/// subdirectories are recursed into (symlinks are unlinked, not followed).
/// Failing to remove the top-level directory is always reported; otherwise
/// the first recorded per-entry failure is. Fails outright if the directory
/// cannot be opened.
pub fn remove_directory(path: &Path) -> io::Result<()> {
    let entries = fs::read_dir(path)?;

    let mut first_failure: Option<io::Error> = None;
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                first_failure.get_or_insert(err);
                continue;
            }
        };

        let child = entry.path();
        let result = match fs::symlink_metadata(&child) {
            Ok(meta) if meta.is_dir() => remove_directory(&child),
            Ok(_) => fs::remove_file(&child),
            Err(err) => Err(err),
        };
        if let Err(err) = result {
            first_failure.get_or_insert(err);
        }
    }

    fs::remove_dir(path)?;

    match first_failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
