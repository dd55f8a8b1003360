//! Ordered bed resolution strategies
//!
//! Provides [`StrategyChain`], tried front to back until one strategy
//! answers.

use crate::strategy::{BedResolutionStrategy, StrategyKind};
use care_model::{Bed, Room};

/// Ordered list of bed resolution strategies
#[derive(Debug, Default)]
pub struct StrategyChain {
    strategies: Vec<Box<dyn BedResolutionStrategy>>,
}

impl StrategyChain {
    /// Create empty chain
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Chain with built-in strategies: by id, by number, from summary
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::from_kinds(&StrategyKind::ALL)
    }

    /// Chain of built-in strategies in the given order
    #[must_use]
    pub fn from_kinds(kinds: &[StrategyKind]) -> Self {
        let mut chain = Self::new();
        for kind in kinds {
            chain.push(kind.build());
        }
        chain
    }

    /// Append a strategy
    pub fn push(&mut self, strategy: Box<dyn BedResolutionStrategy>) {
        self.strategies.push(strategy);
    }

    /// With appended strategy
    #[inline]
    #[must_use]
    pub fn with(mut self, strategy: impl BedResolutionStrategy + 'static) -> Self {
        self.push(Box::new(strategy));
        self
    }

    /// Strategy names in order
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Number of strategies
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Check if chain is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Beds of `room`, from the first strategy that answers
    ///
    /// Empty when no strategy answers.
    #[must_use]
    pub fn resolve(&self, room: &Room, beds: &[Bed]) -> Vec<Bed> {
        for (position, strategy) in self.strategies.iter().enumerate() {
            if let Some(found) = strategy.resolve(room, beds) {
                if position > 0 {
                    tracing::debug!(
                        room_id = %room.id,
                        strategy = strategy.name(),
                        "bed lookup fell back"
                    );
                }
                return found;
            }
        }
        tracing::debug!(room_id = %room.id, "no strategy found beds for room");
        Vec::new()
    }
}
