//! Configuration management.
//!
//! Provides the parser configuration, its defaults, and loading from a
//! TOML file.

use crate::constants::{CONFIG_ENV_VAR, DEFAULT_MAX_DIAGNOSTICS};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings that control how a file is parsed and reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Surface a missing envelope or unreadable file as an error instead of
    /// an empty result
    pub strict_envelope: bool,

    /// Log skipped records at warn level (debug level otherwise)
    pub log_diagnostics: bool,

    /// Maximum number of diagnostics kept in the parse statistics (0 = unlimited)
    pub max_diagnostics: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            strict_envelope: false,
            log_diagnostics: true,
            max_diagnostics: DEFAULT_MAX_DIAGNOSTICS,
        }
    }
}

impl ParserConfig {
    /// Enable strict envelope handling
    pub fn with_strict_envelope(mut self) -> Self {
        self.strict_envelope = true;
        self
    }

    /// Log skipped records at debug level only
    pub fn without_diagnostic_logging(mut self) -> Self {
        self.log_diagnostics = false;
        self
    }

    /// Cap the number of stored diagnostics
    pub fn with_max_diagnostics(mut self, max_diagnostics: usize) -> Self {
        self.max_diagnostics = max_diagnostics;
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config file {}", path.display()), e))?;
        let config = Self::from_toml_str(&contents)?;
        debug!("Loaded parser configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: ParserConfig = toml::from_str(contents)
            .map_err(|e| Error::configuration(format!("Invalid TOML: {}", e)))?;
        Ok(config)
    }

    /// Resolve configuration: an explicit path wins, then the environment
    /// variable, then defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from);
        match path.map(Path::to_path_buf).or(env_path) {
            Some(p) => Self::from_file(&p),
            None => Ok(Self::default()),
        }
    }
}
