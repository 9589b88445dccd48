//! core::config
//!
//! Repository configuration schema and loading.
//!
//! The on-disk format is git's INI dialect. Only the `core` section is
//! recognized; unknown sections and keys are ignored so that configs
//! written by other tools still load.
//!
//! # Example
//!
//! ```no_run
//! use gitling::core::config::GitConfig;
//! use std::path::Path;
//!
//! let config = GitConfig::load(Path::new(".git/config")).unwrap();
//! assert_eq!(config.repository_format_version, 0);
//! ```

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

/// The only repository format version this tool accepts as supported.
pub const SUPPORTED_FORMAT_VERSION: i64 = 0;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    Parse { path: PathBuf, message: String },
}

/// Parsed repository configuration.
///
/// Mirrors the `core` section of `.git/config`. Defaults apply for any key
/// the file does not set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitConfig {
    /// On-disk layout version; only `0` is supported.
    pub repository_format_version: i64,

    /// Whether the filesystem honors executable-bit changes.
    pub filemode: bool,

    /// Whether the repository has no associated worktree. Parsed but not
    /// yet enforced.
    pub bare: bool,
}

impl GitConfig {
    /// Load configuration from a git-style INI file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be opened and
    /// [`ConfigError::Parse`] on malformed syntax.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let document = Ini::load_from_file(path).map_err(|err| match err {
            ini::Error::Io(source) => ConfigError::Read {
                path: path.to_path_buf(),
                source,
            },
            ini::Error::Parse(parse) => ConfigError::Parse {
                path: path.to_path_buf(),
                message: parse.to_string(),
            },
        })?;

        let mut config = GitConfig::default();
        for (section, properties) in document.iter() {
            for (key, value) in properties.iter() {
                config.apply(section, key, value);
            }
        }

        Ok(config)
    }

    /// Whether the parsed format version is one this tool supports.
    pub fn is_supported_version(&self) -> bool {
        self.repository_format_version == SUPPORTED_FORMAT_VERSION
    }

    /// Fold one parsed `(section, key, value)` triple into the config.
    fn apply(&mut self, section: Option<&str>, key: &str, value: &str) {
        if section != Some("core") {
            return;
        }
        match key {
            // Parse failure reads as version 0.
            "repositoryformatversion" => {
                self.repository_format_version = value.parse().unwrap_or(0);
            }
            // Booleans are true iff the text is exactly "true".
            "filemode" => self.filemode = value == "true",
            "bare" => self.bare = value == "true",
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_core_section_values() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            "[core]\nrepositoryformatversion = 0\nfilemode = true\nbare = false\n",
        );

        let config = GitConfig::load(&path).unwrap();
        assert_eq!(config.repository_format_version, 0);
        assert!(config.filemode);
        assert!(!config.bare);
        assert!(config.is_supported_version());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let tmp = TempDir::new().unwrap();
        let result = GitConfig::load(&tmp.path().join("missing"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn malformed_syntax_is_a_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[core\nrepositoryformatversion = 0\n");

        let result = GitConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn unknown_sections_and_keys_are_ignored() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            "[core]\nrepositoryformatversion = 0\nignorecase = true\n\
             [remote \"origin\"]\nurl = https://example.invalid/repo.git\n",
        );

        let config = GitConfig::load(&path).unwrap();
        assert_eq!(config, GitConfig::default());
    }

    #[test]
    fn non_numeric_version_parses_as_zero() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[core]\nrepositoryformatversion = lots\n");

        let config = GitConfig::load(&path).unwrap();
        assert_eq!(config.repository_format_version, 0);
    }

    #[test]
    fn unsupported_version_is_preserved() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[core]\nrepositoryformatversion = 1\n");

        let config = GitConfig::load(&path).unwrap();
        assert_eq!(config.repository_format_version, 1);
        assert!(!config.is_supported_version());
    }

    #[test]
    fn booleans_match_the_literal_true_only() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[core]\nfilemode = TRUE\nbare = yes\n");

        let config = GitConfig::load(&path).unwrap();
        assert!(!config.filemode);
        assert!(!config.bare);
    }
}
