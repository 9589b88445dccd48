//! core::repository
//!
//! The Repository entity: construction, validation, bootstrap, and
//! repository-relative path resolution.
//!
//! # Construction Modes
//!
//! [`Repository::create`] has two modes:
//!
//! - **Validating** (`force = false`): opens an existing repository,
//!   requiring the metadata directory to exist, the config file to load,
//!   and the format version to be supported. This is the sole gate
//!   preventing operations against an unsupported or absent repository.
//! - **Forced** (`force = true`): skips existence and version validation.
//!   Used only while bootstrapping a repository that does not exist yet.
//!
//! [`Repository::init`] bootstraps a brand-new repository: forced
//! construction, then materialization of the standard skeleton and seed
//! files. Initialization has no rollback; a failed init may leave a
//! partially populated metadata directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::config::{ConfigError, GitConfig};
use crate::core::fsops::{self, DIR_MODE};
use crate::core::paths::{push_segments, GIT_DIR};

/// Placeholder content for the `description` seed file.
const DEFAULT_DESCRIPTION: &str =
    "Unnamed repository; edit this file 'description' to name the repository.\n";

/// Seed content for `HEAD`, pointing at the default branch.
const DEFAULT_HEAD: &str = "ref: refs/heads/master\n";

/// Seed content for `config`: format version 0, filemode and bare off.
const DEFAULT_CONFIG: &str =
    "[core]\nrepositoryformatversion = 0\nfilemode = false\nbare = false\n";

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepoError {
    /// An empty path was handed to a constructor.
    #[error("invalid repository path")]
    InvalidPath,

    /// The metadata directory is missing during validating construction.
    #[error("not a git repository: {0}")]
    NotARepository(PathBuf),

    /// The config file is absent during validating construction.
    #[error("configuration file is missing: {0}")]
    MissingConfig(PathBuf),

    /// The config declares a format version this tool does not support.
    #[error("unsupported repositoryformatversion: {0}")]
    UnsupportedVersion(i64),

    /// A required path exists but is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Re-initialization attempted over a non-empty metadata directory.
    #[error("directory is not empty: {0}")]
    NotEmpty(PathBuf),

    /// Resolution without creation on a directory that does not exist.
    #[error("directory does not exist: {0}")]
    MissingDirectory(PathBuf),

    /// Configuration failed to load.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An underlying filesystem call failed.
    #[error("io error at '{path}': {source}")]
    Io { path: PathBuf, source: io::Error },
}

/// A repository's on-disk identity: a worktree paired with its metadata
/// directory.
///
/// The metadata directory is always `worktree/.git`, derived once at
/// construction. The configuration is owned by the repository and absent
/// only when construction was forced and no config file existed yet.
#[derive(Debug)]
pub struct Repository {
    worktree: PathBuf,
    gitdir: PathBuf,
    config: Option<GitConfig>,
}

impl Repository {
    /// Construct a repository rooted at `path`.
    ///
    /// With `force` unset this validates an existing repository: the
    /// metadata directory must exist, the config file must be present and
    /// loadable, and its format version must be supported. With `force`
    /// set, existence and version checks are skipped; an existing config
    /// file that fails to load still fails construction.
    ///
    /// # Errors
    ///
    /// See [`RepoError`] for the failure taxonomy. No partially built
    /// repository escapes a failure.
    pub fn create(path: &Path, force: bool) -> Result<Self, RepoError> {
        if path.as_os_str().is_empty() {
            return Err(RepoError::InvalidPath);
        }

        let worktree = path.to_path_buf();
        let gitdir = worktree.join(GIT_DIR);

        if !force && !fsops::is_directory(&gitdir) {
            return Err(RepoError::NotARepository(gitdir));
        }

        let config_path = gitdir.join("config");
        let config = if fsops::file_exists(&config_path) {
            Some(GitConfig::load(&config_path)?)
        } else if force {
            None
        } else {
            return Err(RepoError::MissingConfig(config_path));
        };

        if !force {
            if let Some(config) = &config {
                if !config.is_supported_version() {
                    return Err(RepoError::UnsupportedVersion(
                        config.repository_format_version,
                    ));
                }
            }
        }

        Ok(Self {
            worktree,
            gitdir,
            config,
        })
    }

    /// Bootstrap a brand-new repository at `path`.
    ///
    /// An existing worktree must be a directory, and its metadata
    /// directory, if present, must be empty; a missing worktree is created
    /// along with its parents. The standard skeleton (`branches/`,
    /// `objects/`, `refs/tags/`, `refs/heads/`) and the seed files
    /// (`description`, `HEAD`, `config`) are then materialized under the
    /// metadata directory.
    ///
    /// Steps that already ran are not rolled back when a later step fails.
    pub fn init(path: &Path) -> Result<Self, RepoError> {
        let repo = Self::create(path, true)?;

        if fsops::file_exists(&repo.worktree) {
            if !fsops::is_directory(&repo.worktree) {
                return Err(RepoError::NotADirectory(repo.worktree));
            }
            if fsops::file_exists(&repo.gitdir) && !fsops::is_directory_empty(&repo.gitdir) {
                return Err(RepoError::NotEmpty(repo.gitdir));
            }
        } else {
            fsops::mkdir_p(&repo.worktree, DIR_MODE).map_err(|source| RepoError::Io {
                path: repo.worktree.clone(),
                source,
            })?;
        }

        repo.dir(true, &["branches"])?;
        repo.dir(true, &["objects"])?;
        repo.dir(true, &["refs", "tags"])?;
        repo.dir(true, &["refs", "heads"])?;

        repo.seed_file(&["description"], DEFAULT_DESCRIPTION)?;
        repo.seed_file(&["HEAD"], DEFAULT_HEAD)?;
        repo.seed_file(&["config"], DEFAULT_CONFIG)?;

        Ok(repo)
    }

    /// Discover the repository containing `start`.
    ///
    /// Canonicalizes `start` and walks up the directory chain until a
    /// metadata directory is found, then opens that repository in
    /// validating mode.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::NotARepository`] when the filesystem root is
    /// reached without finding a metadata directory.
    pub fn discover(start: &Path) -> Result<Self, RepoError> {
        let mut current = start.canonicalize().map_err(|source| RepoError::Io {
            path: start.to_path_buf(),
            source,
        })?;

        loop {
            if fsops::is_directory(&current.join(GIT_DIR)) {
                return Self::create(&current, false);
            }
            if !current.pop() {
                return Err(RepoError::NotARepository(start.to_path_buf()));
            }
        }
    }

    /// Join `segments` under the metadata directory.
    ///
    /// With no segments the metadata directory itself is returned. Pure
    /// composition; the filesystem is not consulted.
    pub fn path(&self, segments: &[&str]) -> PathBuf {
        push_segments(&self.gitdir, segments)
    }

    /// Resolve `segments` as a directory under the metadata directory.
    ///
    /// An existing directory is returned as-is; an existing non-directory
    /// fails; a missing path is created via `mkdir -p` when `create` is
    /// set, and fails otherwise.
    pub fn dir(&self, create: bool, segments: &[&str]) -> Result<PathBuf, RepoError> {
        let path = self.path(segments);
        ensure_directory(&path, create)?;
        Ok(path)
    }

    /// Resolve `segments` as a file path under the metadata directory.
    ///
    /// The parent directory is resolved with the same semantics as
    /// [`Repository::dir`] under `create_parent`; the file itself is
    /// neither created nor checked for existence. With no segments the
    /// metadata directory itself is resolved and returned.
    pub fn file(&self, create_parent: bool, segments: &[&str]) -> Result<PathBuf, RepoError> {
        let path = self.path(segments);
        let parent = match path.parent() {
            Some(parent) if path != self.gitdir => parent.to_path_buf(),
            _ => self.gitdir.clone(),
        };
        ensure_directory(&parent, create_parent)?;
        Ok(path)
    }

    fn seed_file(&self, segments: &[&str], contents: &str) -> Result<(), RepoError> {
        let path = self.file(false, segments)?;
        fs::write(&path, contents).map_err(|source| RepoError::Io { path, source })
    }

    /// The project's working directory.
    pub fn worktree(&self) -> &Path {
        &self.worktree
    }

    /// The metadata directory under the worktree.
    pub fn gitdir(&self) -> &Path {
        &self.gitdir
    }

    /// The loaded configuration.
    ///
    /// Absent only for a forced construction with no config file on disk.
    pub fn config(&self) -> Option<&GitConfig> {
        self.config.as_ref()
    }
}

fn ensure_directory(path: &Path, create: bool) -> Result<(), RepoError> {
    if fsops::file_exists(path) {
        if fsops::is_directory(path) {
            Ok(())
        } else {
            Err(RepoError::NotADirectory(path.to_path_buf()))
        }
    } else if create {
        fsops::mkdir_p(path, DIR_MODE).map_err(|source| RepoError::Io {
            path: path.to_path_buf(),
            source,
        })
    } else {
        Err(RepoError::MissingDirectory(path.to_path_buf()))
    }
}
