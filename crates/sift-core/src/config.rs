//! Analyzer configuration
//!
//! Config is loaded with a layered resolution:
//! 1. An explicit override path (e.g. `--config`)
//! 2. The data dir override (~/.local/share/sift/config.toml)
//! 3. Embedded defaults (compiled into binary)
//!
//! Missing keys fall back to the built-in defaults, so an override file only
//! needs the values it changes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::engine::DEFAULT_CURRENCY_SYMBOL;
use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/sift.toml");

/// Minimum snapshot size before a full analysis is considered meaningful
pub const DEFAULT_MIN_TRANSACTIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiftConfig {
    /// Prefix for amounts in recommendation messages
    pub currency_symbol: String,
    /// Caller-side guard; the engine itself accepts any input size
    pub min_transactions: usize,
    /// Fixed reference date (today when unset)
    pub as_of: Option<NaiveDate>,
}

impl Default for SiftConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            min_transactions: DEFAULT_MIN_TRANSACTIONS,
            as_of: None,
        }
    }
}

impl SiftConfig {
    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))
    }

    /// Load configuration (override first, then data dir, then embedded default)
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = override_path {
            if path.exists() {
                tracing::debug!(path = %path.display(), "Loading config override");
                return Self::from_file(path);
            }
            tracing::warn!(
                path = %path.display(),
                "Config file not found, using defaults"
            );
            return Self::from_toml(DEFAULT_CONFIG);
        }

        if let Some(default_path) = default_config_path() {
            if default_path.exists() {
                tracing::debug!(path = %default_path.display(), "Loading config from data dir");
                return Self::from_file(&default_path);
            }
        }

        Self::from_toml(DEFAULT_CONFIG)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?;
        Self::from_toml(&content)
    }
}

/// Get the data dir override location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("sift").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_default_parses() {
        let config = SiftConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, SiftConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = SiftConfig::from_toml(
            r#"
            currency_symbol = "$"
            as_of = "2026-01-31"
            "#,
        )
        .unwrap();

        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.min_transactions, DEFAULT_MIN_TRANSACTIONS);
        assert_eq!(config.as_of, NaiveDate::from_ymd_opt(2026, 1, 31));
    }

    #[test]
    fn test_invalid_toml() {
        let err = SiftConfig::from_toml("min_transactions = \"lots\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "min_transactions = 25").unwrap();

        let config = SiftConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.min_transactions, 25);
        assert_eq!(config.currency_symbol, DEFAULT_CURRENCY_SYMBOL);
    }

    #[test]
    fn test_missing_override_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let config = SiftConfig::load(Some(missing.as_path())).unwrap();
        assert_eq!(config, SiftConfig::default());
    }
}
