//! Configuration for docqa
//!
//! Settings come from an explicit `--config` file, else the global
//! `config.toml`, else built-in defaults.

pub mod global;
pub mod types;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::bail_invalid;
use crate::error::{DocqaError, Result};

pub use types::{QaConfig, FILE_MATCHES, SENTENCE_MATCHES};

impl QaConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| DocqaError::file_access(path, e))?;
        let config: QaConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective configuration
    ///
    /// An explicit path must exist. Without one, the global config file is
    /// used when present.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "config_explicit");
            return Self::load(path);
        }

        let global = global::config_path()?;
        if global.is_file() {
            debug!(path = %global.display(), "config_global");
            return Self::load(&global);
        }

        Ok(Self::default())
    }

    /// Reject settings that would make the pipeline meaningless
    pub fn validate(&self) -> Result<()> {
        if self.file_matches == 0 {
            bail_invalid!("file_matches", "0 (must be at least 1)");
        }
        if self.sentence_matches == 0 {
            bail_invalid!("sentence_matches", "0 (must be at least 1)");
        }
        if self.extensions.is_empty() {
            bail_invalid!("extensions", "[] (at least one extension is required)");
        }
        Ok(())
    }

    /// Whether a file extension is recognized as corpus text
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.extensions
            .iter()
            .any(|known| known.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = QaConfig::default();
        assert_eq!(config.file_matches, FILE_MATCHES);
        assert_eq!(config.sentence_matches, SENTENCE_MATCHES);
        assert_eq!(config.extensions, vec!["txt"]);
        assert!(!config.stemming);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "sentence_matches = 3\nstemming = true\n").unwrap();

        let config = QaConfig::load(&path).unwrap();
        assert_eq!(config.file_matches, 1);
        assert_eq!(config.sentence_matches, 3);
        assert!(config.stemming);
        assert_eq!(config.extensions, vec!["txt"]);
    }

    #[test]
    fn test_load_rejects_zero_matches() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "file_matches = 0\n").unwrap();

        let err = QaConfig::load(&path).unwrap_err();
        assert!(matches!(err, DocqaError::InvalidValue { .. }));
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "file_matches = \"many\"\n").unwrap();

        assert!(matches!(
            QaConfig::load(&path).unwrap_err(),
            DocqaError::Toml(_)
        ));
    }

    #[test]
    fn test_resolve_missing_explicit_path_fails() {
        let dir = tempdir().unwrap();
        let err = QaConfig::resolve(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, DocqaError::FileAccess { .. }));
    }

    #[test]
    fn test_accepts_extension_case_insensitive() {
        let config = QaConfig {
            extensions: vec!["txt".into(), ".md".into()],
            ..QaConfig::default()
        };
        assert!(config.accepts_extension("TXT"));
        assert!(config.accepts_extension("md"));
        assert!(!config.accepts_extension("rs"));
    }
}
