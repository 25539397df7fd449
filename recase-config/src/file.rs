use std::path::{Path, PathBuf};

use crate::{Config, Result, parse_config};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "recase.toml";

/// A parsed recase.toml file.
///
/// `path` is `None` when no file was found and defaults are in effect.
pub struct RecaseToml {
    path: Option<PathBuf>,
    config: Config,
}

impl RecaseToml {
    /// Open and parse a recase.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let config = parse_config(&content, &path.display().to_string())?;

        log::debug!("loaded config from {}", path.display());
        Ok(Self {
            path: Some(path),
            config,
        })
    }

    /// Resolve the config to use.
    ///
    /// An explicit path must exist. Otherwise `recase.toml` in `dir` is used when
    /// present, falling back to defaults.
    pub fn discover(explicit: Option<&Path>, dir: impl AsRef<Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::open(path);
        }

        let candidate = dir.as_ref().join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::open(candidate)
        } else {
            log::debug!("no {} found, using defaults", candidate.display());
            Ok(Self::defaults())
        }
    }

    /// Built-in defaults, not backed by a file.
    pub fn defaults() -> Self {
        Self {
            path: None,
            config: Config::default(),
        }
    }

    /// Get the file path, if the config came from a file.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use recase_core::{CaseStyle, Language};
    use tempfile::TempDir;

    use super::*;
    use crate::Error;

    #[test]
    fn test_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[convert]\nstyle = \"snake\"\n").unwrap();

        let file = RecaseToml::open(&path).unwrap();
        assert_eq!(file.path(), Some(path.as_path()));
        assert_eq!(file.config().convert.style, CaseStyle::Snake);
    }

    #[test]
    fn test_open_missing() {
        let dir = TempDir::new().unwrap();
        let err = RecaseToml::open(dir.path().join("missing.toml")).err().unwrap();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_discover_in_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[naming]\nlanguage = \"go\"\n",
        )
        .unwrap();

        let file = RecaseToml::discover(None, dir.path()).unwrap();
        assert!(file.path().is_some());
        assert_eq!(file.config().naming.language, Language::Go);
    }

    #[test]
    fn test_discover_defaults() {
        let dir = TempDir::new().unwrap();
        let file = RecaseToml::discover(None, dir.path()).unwrap();
        assert!(file.path().is_none());
        assert_eq!(file.config().convert.style, CaseStyle::Camel);
    }

    #[test]
    fn test_discover_explicit_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = RecaseToml::discover(Some(missing.as_path()), dir.path()).err().unwrap();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "[convert\n").unwrap();

        let err = RecaseToml::open(&path).err().unwrap();
        assert_eq!(err.to_string(), format!("failed to parse {}", path.display()));
        match *err {
            Error::Parse { src, span, .. } => {
                assert_eq!(src.name(), path.display().to_string());
                assert!(span.is_some());
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
