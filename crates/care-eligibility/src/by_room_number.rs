//! Beds linked to rooms by room number

use crate::strategy::{non_empty, BedResolutionStrategy};
use care_model::{Bed, Room};

/// Select beds that reference the room by its number
///
/// A bed qualifies when its `room_number` equals the room's number and it
/// carries no `room_id`, or one equal to this room's id. A bed whose
/// `room_id` names another room belongs to that room, whatever its number
/// field says.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByRoomNumberStrategy;

impl ByRoomNumberStrategy {
    /// Create strategy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn references(bed: &Bed, room: &Room) -> bool {
        bed.room_number.as_deref() == Some(room.room_number.as_str())
            && bed.room_id.as_ref().map_or(true, |id| *id == room.id)
    }
}

impl BedResolutionStrategy for ByRoomNumberStrategy {
    fn resolve(&self, room: &Room, beds: &[Bed]) -> Option<Vec<Bed>> {
        if room.room_number.is_empty() {
            return None;
        }
        non_empty(
            beds.iter()
                .filter(|bed| Self::references(bed, room))
                .cloned()
                .collect(),
        )
    }

    fn name(&self) -> &'static str {
        "by_room_number"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use care_model::EntityId;

    #[test]
    fn matches_room_number_field() {
        let room = Room::new(1, "305", "double");
        let beds = vec![
            Bed::new(10, 0, 1u32).linked_by_number("305"),
            Bed::new(11, 0, 1u32).linked_by_number("306"),
        ];

        let found = ByRoomNumberStrategy::new().resolve(&room, &beds).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.as_str(), "10");
    }

    #[test]
    fn ignores_room_id_equal_to_number() {
        // room 1 is numbered "2"; bed 900 belongs to the room whose id is 2
        let room = Room::new(1, "2", "double");
        let beds = vec![Bed::new(900, 2, 1u32)];
        assert!(ByRoomNumberStrategy::new().resolve(&room, &beds).is_none());
    }

    #[test]
    fn ignores_number_match_owned_by_other_room() {
        let room = Room::new(1, "305", "double");
        let mut foreign = Bed::new(10, 2, 1u32);
        foreign.room_number = Some("305".to_string());
        let own = Bed::new(11, 1, 2u32).linked_by_number("305");
        let mut same_id = own.clone();
        same_id.id = EntityId::from(12);
        same_id.room_id = Some(EntityId::from(1));

        let found = ByRoomNumberStrategy::new()
            .resolve(&room, &[foreign, own, same_id])
            .unwrap();
        let ids: Vec<_> = found.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["11", "12"]);
    }

    #[test]
    fn blank_room_number_is_none() {
        let room = Room::new(1, "", "double");
        let beds = vec![Bed::new(10, 0, 1u32).linked_by_number("")];
        assert!(ByRoomNumberStrategy::new().resolve(&room, &beds).is_none());
    }
}
