//! Resolver configuration

use crate::chain::StrategyChain;
use crate::strategy::StrategyKind;
use serde::{Deserialize, Serialize};

/// Resolver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Bed resolution strategies, tried in order
    pub strategies: Vec<StrategyKind>,
}

impl ResolverConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With strategy order
    #[inline]
    #[must_use]
    pub fn with_strategies(mut self, strategies: Vec<StrategyKind>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Without synthesized placeholder beds
    #[must_use]
    pub fn without_synthesis(mut self) -> Self {
        self.strategies.retain(|k| *k != StrategyKind::BedInfoSummary);
        self
    }

    /// Check the configuration is usable
    ///
    /// # Errors
    /// - [`ConfigError::EmptyChain`] when no strategy is configured
    /// - [`ConfigError::DuplicateStrategy`] when a strategy is listed twice
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strategies.is_empty() {
            return Err(ConfigError::EmptyChain);
        }
        for (i, kind) in self.strategies.iter().enumerate() {
            if self.strategies[..i].contains(kind) {
                return Err(ConfigError::DuplicateStrategy(*kind));
            }
        }
        Ok(())
    }

    /// Build the strategy chain
    ///
    /// # Errors
    /// See [`ResolverConfig::validate`].
    pub fn build_chain(&self) -> Result<StrategyChain, ConfigError> {
        self.validate()?;
        Ok(StrategyChain::from_kinds(&self.strategies))
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            strategies: StrategyKind::ALL.to_vec(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Strategy name not recognised
    #[error("unknown bed resolution strategy: '{0}'")]
    UnknownStrategy(String),

    /// Strategy listed more than once
    #[error("bed resolution strategy listed twice: {0}")]
    DuplicateStrategy(StrategyKind),

    /// No strategies configured
    #[error("at least one bed resolution strategy is required")]
    EmptyChain,
}
