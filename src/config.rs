use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Errors raised while reading a [`GenConfig`].
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid generator config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Settings for the `httpheaders-gen` binary.
///
/// Every field may be omitted from the TOML file, missing fields take their
/// [`Default`] value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// File the constant table is written to.
    pub output: PathBuf,

    /// Embed the generation time in a comment. Informational only.
    pub timestamp: bool,

    /// Run `rustfmt` on the written file.
    pub rustfmt: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("src/http/names.rs"),
            timestamp: true,
            rustfmt: true,
        }
    }
}

impl GenConfig {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str::<GenConfig>(content)?)
    }

    /// Loads the config from `path`, falling back to the defaults when the
    /// file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                log::warn!("Fail to read {}: {err}", path.display());
                log::warn!("Fall back to default config");
                return GenConfig::default();
            }
        };

        match Self::parse(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Fail to deserialize config file {}: {err}", path.display());
                log::warn!("Fall back to default config");
                GenConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(GenConfig::parse("").unwrap(), GenConfig::default());
    }

    #[test]
    fn partial_file() {
        let config = GenConfig::parse("timestamp = false\noutput = \"out/names.rs\"\n").unwrap();
        assert_eq!(config.output, PathBuf::from("out/names.rs"));
        assert!(!config.timestamp);
        assert!(config.rustfmt);
    }

    #[test]
    fn rejects_wrong_types() {
        let err = GenConfig::parse("rustfmt = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn missing_file_falls_back() {
        let config = GenConfig::from_file(Path::new("/nonexistent-dir/httpheaders.toml"));
        assert_eq!(config, GenConfig::default());
    }
}
