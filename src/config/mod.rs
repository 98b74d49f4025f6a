// analyzer configuration: pasvortgardo.toml + coded defaults

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// tunables for the analysis engine. every field has a documented default;
/// a config file only needs the keys it wants to change.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// edit distance at or below which a corpus entry counts as a risk
    pub similarity_threshold: usize,
    /// how many alternative passwords to offer
    pub suggestion_count: usize,
    /// per-candidate regeneration attempts before giving up on one slot
    pub suggestion_retries: usize,
    /// hard cap on accepted password length (bounds dp cost)
    pub max_password_length: usize,
    /// generated suggestions are padded up to at least this length
    pub min_suggestion_length: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            similarity_threshold: 2,
            suggestion_count: 3,
            suggestion_retries: 10,
            max_password_length: 128,
            min_suggestion_length: 12,
        }
    }
}

impl AnalyzerConfig {
    /// load from a TOML file, falling back to defaults for absent keys
    pub fn load(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: AnalyzerConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_password_length == 0 {
            return Err(ConfigError::Invalid(
                "max_password_length must be positive".to_string(),
            ));
        }
        if self.min_suggestion_length == 0 {
            return Err(ConfigError::Invalid(
                "min_suggestion_length must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
