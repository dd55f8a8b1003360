//! Bed resolution strategy trait and built-in kinds
//!
//! Backends disagree on how beds are linked to rooms. Each
//! [`BedResolutionStrategy`] encodes one linkage; a
//! [`StrategyChain`](crate::StrategyChain) tries them in order.

use crate::config::ConfigError;
use care_model::{Bed, Room};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// One way of finding the beds that belong to a room
///
/// # Contract
/// Return `None` when the strategy has nothing to say about the room, so the
/// next strategy in the chain is tried. Never return `Some(vec![])`.
/// Availability is not filtered here; the resolver does that afterwards.
pub trait BedResolutionStrategy: Send + Sync + std::fmt::Debug {
    /// Beds of `room` found in `beds`, or `None`
    fn resolve(&self, room: &Room, beds: &[Bed]) -> Option<Vec<Bed>>;

    /// Strategy name (for tracing/configuration)
    fn name(&self) -> &'static str;
}

/// Built-in strategies, in their default order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum StrategyKind {
    /// Match `bed.room_id` against `room.id`
    ByRoomId,

    /// Match by room number
    ByRoomNumber,

    /// Synthesize placeholders from `room.bed_info`
    BedInfoSummary,
}

impl StrategyKind {
    /// All kinds, default order
    pub const ALL: [Self; 3] = [Self::ByRoomId, Self::ByRoomNumber, Self::BedInfoSummary];

    /// Configuration name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ByRoomId => "by_room_id",
            Self::ByRoomNumber => "by_room_number",
            Self::BedInfoSummary => "bed_info_summary",
        }
    }

    /// Instantiate the strategy
    #[must_use]
    pub fn build(self) -> Box<dyn BedResolutionStrategy> {
        match self {
            Self::ByRoomId => Box::new(crate::ByRoomIdStrategy::new()),
            Self::ByRoomNumber => Box::new(crate::ByRoomNumberStrategy::new()),
            Self::BedInfoSummary => Box::new(crate::BedInfoSummaryStrategy::new()),
        }
    }
}

impl Display for StrategyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ConfigError::UnknownStrategy(s.to_string()))
    }
}

impl TryFrom<String> for StrategyKind {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Wrap a non-empty collection in `Some`
#[inline]
pub(crate) fn non_empty(beds: Vec<Bed>) -> Option<Vec<Bed>> {
    if beds.is_empty() {
        None
    } else {
        Some(beds)
    }
}
