//! `carehome` configuration file
//!
//! ```toml
//! log_filter = "care_eligibility=debug"
//! log_format = "json"
//!
//! [resolver]
//! strategies = ["by_room_id", "by_room_number"]
//! ```

use care_eligibility::{ConfigError, EligibilityResolver, ResolverConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Resolver strategy order
    pub resolver: ResolverConfig,
    /// `EnvFilter` directives used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            resolver: ResolverConfig::default(),
            log_filter: "warn".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl CliConfig {
    /// Parse and validate TOML
    ///
    /// # Errors
    /// [`CliConfigError::Parse`] for malformed TOML or unknown strategy
    /// names, [`CliConfigError::Invalid`] for an unusable strategy list.
    pub fn from_toml_str(raw: &str) -> Result<Self, CliConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.resolver.validate()?;
        Ok(config)
    }

    /// Load from `path`; a missing file yields the defaults
    ///
    /// # Errors
    /// See [`CliConfig::from_toml_str`]; unreadable files are
    /// [`CliConfigError::Io`].
    pub fn load(path: &Path) -> Result<Self, CliConfigError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::from_toml_str(&raw),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(CliConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Resolver built from the `[resolver]` table
    ///
    /// # Errors
    /// Propagates [`ConfigError`] from chain construction.
    pub fn resolver(&self) -> Result<EligibilityResolver, ConfigError> {
        EligibilityResolver::from_config(&self.resolver)
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum CliConfigError {
    /// File could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Config path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Not valid TOML for [`CliConfig`]
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Parsed, but the resolver configuration is unusable
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}
