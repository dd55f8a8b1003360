//! Rows shown in the room and bed pickers

use care_eligibility::format_bed_label;
use care_model::{Bed, EntityId, Room};
use serde::Serialize;

/// Room picker row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomOption {
    pub room_id: EntityId,
    pub room_number: String,
    pub room_type: String,
    pub floor: Option<i32>,
    /// Eligible beds in the room
    pub available_beds: usize,
}

impl RoomOption {
    #[must_use]
    pub fn new(room: &Room, available_beds: usize) -> Self {
        Self {
            room_id: room.id.clone(),
            room_number: room.room_number.clone(),
            room_type: room.room_type.clone(),
            floor: room.floor,
            available_beds,
        }
    }
}

/// Bed picker row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BedOption {
    pub bed_id: EntityId,
    pub label: String,
    /// Placeholder built from the room summary, not a backend record
    pub synthesized: bool,
}

impl BedOption {
    #[must_use]
    pub fn new(bed: &Bed, room_number: &str) -> Self {
        Self {
            bed_id: bed.id.clone(),
            label: format_bed_label(bed, Some(room_number)),
            synthesized: bed.synthesized,
        }
    }
}
