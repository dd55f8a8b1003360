//! Beds linked to rooms by id

use crate::strategy::{non_empty, BedResolutionStrategy};
use care_model::{Bed, Room};

/// Select beds whose `room_id` equals the room's id
///
/// This is the normal backend linkage and heads the default chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByRoomIdStrategy;

impl ByRoomIdStrategy {
    /// Create strategy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl BedResolutionStrategy for ByRoomIdStrategy {
    fn resolve(&self, room: &Room, beds: &[Bed]) -> Option<Vec<Bed>> {
        if room.id.is_empty() {
            return None;
        }
        non_empty(
            beds.iter()
                .filter(|bed| bed.room_id.as_ref() == Some(&room.id))
                .cloned()
                .collect(),
        )
    }

    fn name(&self) -> &'static str {
        "by_room_id"
    }
}
