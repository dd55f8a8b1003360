//! Placeholder beds synthesized from a room's bed summary

use crate::strategy::BedResolutionStrategy;
use care_model::{Bed, BedNumber, BedStatus, EntityId, Room};

/// Largest room summary that is turned into placeholder beds
pub const MAX_SYNTHESIZED_BEDS: u32 = 64;

/// Synthesize beds from `room.bed_info` when no bed records exist
///
/// Beds are numbered `1..=total_beds`; the first `available_beds` are
/// marked available and the rest occupied. Real numbering and occupancy
/// are unknown to the resolver, so this is a fallback for incomplete
/// backend responses only and sits last in the default chain. Summaries
/// above [`MAX_SYNTHESIZED_BEDS`] are treated as corrupt and ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct BedInfoSummaryStrategy;

impl BedInfoSummaryStrategy {
    /// Create strategy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn placeholder(room: &Room, number: u32, status: BedStatus) -> Bed {
        Bed {
            id: EntityId::new(format!("{}-{number}", room.id)),
            bed_number: Some(BedNumber::Numeric(number)),
            bed_name: None,
            room_id: Some(room.id.clone()),
            room_number: Some(room.room_number.clone()).filter(|n| !n.is_empty()),
            status,
            synthesized: true,
        }
    }
}

impl BedResolutionStrategy for BedInfoSummaryStrategy {
    fn resolve(&self, room: &Room, _beds: &[Bed]) -> Option<Vec<Bed>> {
        let info = room.bed_info?;
        if info.total_beds == 0 {
            return None;
        }
        if info.total_beds > MAX_SYNTHESIZED_BEDS {
            tracing::warn!(
                room_id = %room.id,
                total_beds = info.total_beds,
                "implausible bed_info, not synthesizing placeholders"
            );
            return None;
        }

        let available = info.available_beds.min(info.total_beds);
        tracing::warn!(
            room_id = %room.id,
            total_beds = info.total_beds,
            available_beds = available,
            "no bed records for room, synthesizing placeholders from bed_info"
        );

        Some(
            (1..=info.total_beds)
                .map(|n| {
                    let status = if n <= available {
                        BedStatus::Available
                    } else {
                        BedStatus::Occupied
                    };
                    Self::placeholder(room, n, status)
                })
                .collect(),
        )
    }

    fn name(&self) -> &'static str {
        "bed_info_summary"
    }
}
