//! Engine configuration
//!
//! Loaded from TOML; every field is optional and falls back to
//! [`EngineConfig::default`]. Command-line flags override file values.
//!
//! ```toml
//! time_limit_ms = 1000
//! max_depth = 12
//! pruning = true
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default per-move allowance
pub const DEFAULT_TIME_LIMIT_MS: u64 = 1000;

/// Search settings for [`crate::AIEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Wall-clock allowance per move in milliseconds
    pub time_limit_ms: u64,
    /// Stop iterative deepening after this depth (`None` = until time or game end)
    pub max_depth: Option<u32>,
    /// Alpha-beta pruning; disabling it gives plain minimax with the same result
    pub pruning: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: DEFAULT_TIME_LIMIT_MS,
            max_depth: None,
            pruning: true,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == Some(0) {
            return Err(ConfigError::Invalid(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = EngineConfig::from_toml_str("max_depth = 8\n").unwrap();
        assert_eq!(config.max_depth, Some(8));
        assert_eq!(config.time_limit_ms, DEFAULT_TIME_LIMIT_MS);
        assert!(config.pruning);
    }

    #[test]
    fn test_full_document() {
        let config = EngineConfig::from_toml_str(
            "time_limit_ms = 250\nmax_depth = 3\npruning = false\n",
        )
        .unwrap();
        assert_eq!(config.time_limit(), Duration::from_millis(250));
        assert_eq!(config.max_depth, Some(3));
        assert!(!config.pruning);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let err = EngineConfig::from_toml_str("max_depth = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = EngineConfig::from_toml_str("threads = 4").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let err = EngineConfig::from_toml_str("time_limit_ms = \"fast\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::load("/nonexistent/kalah.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/kalah.toml"));
    }
}
