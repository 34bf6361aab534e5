//! Shared configuration types for CLI commands

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Result, error::Error};

/// Common configuration shared across commands
///
/// Loaded from an optional JSON file; command-line flags are layered on top
/// with [`CommonConfig::with_overrides`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommonConfig {
    /// Random seed for the rock-paper-scissors opponent
    pub seed: Option<u64>,

    /// Verbose (debug-level) logging
    pub verbose: bool,

    /// Emit one JSON object per event instead of text
    pub json: bool,
}

impl CommonConfig {
    /// Read a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and [`Error::Config`]
    /// when it is not a valid configuration object.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config file '{}'", path.display()),
            source,
        })?;
        serde_json::from_str(&text).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from `path` when given, otherwise start from defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line flags. Flags can switch options on but not off,
    /// and a seed given on the command line replaces the file's seed.
    pub fn with_overrides(mut self, seed: Option<u64>, verbose: bool, json: bool) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self.verbose |= verbose;
        self.json |= json;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let config: CommonConfig = serde_json::from_str(r#"{"seed": 5}"#).unwrap();
        assert_eq!(
            config,
            CommonConfig {
                seed: Some(5),
                verbose: false,
                json: false
            }
        );
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(serde_json::from_str::<CommonConfig>(r#"{"sead": 5}"#).is_err());
    }

    #[test]
    fn test_overrides() {
        let base = CommonConfig {
            seed: Some(1),
            verbose: true,
            json: false,
        };

        let kept = base.clone().with_overrides(None, false, false);
        assert_eq!(kept, base);

        let replaced = base.with_overrides(Some(2), false, true);
        assert_eq!(replaced.seed, Some(2));
        assert!(replaced.verbose);
        assert!(replaced.json);
    }
}
