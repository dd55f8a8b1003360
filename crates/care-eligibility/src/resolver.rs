//! Eligibility resolver
//!
//! Derives the selectable rooms and beds for a resident from fetched
//! inventory. Pure and synchronous: the caller re-runs it whenever the
//! selected room type, the resident, or the fetched collections change.

use crate::chain::StrategyChain;
use crate::config::{ConfigError, ResolverConfig};
use crate::gender::room_is_eligible;
use crate::inventory::Inventory;
use care_model::{Bed, EntityId, Gender, Room};
use indexmap::IndexMap;
use serde::Serialize;

/// Eligible rooms and beds of one room type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomTypeAvailability {
    /// Room type code
    pub room_type: String,
    /// Rooms with at least one eligible bed
    pub eligible_rooms: usize,
    /// Eligible beds across those rooms
    pub eligible_beds: usize,
}

/// Resolves room and bed eligibility for a resident
#[derive(Debug)]
pub struct EligibilityResolver {
    chain: StrategyChain,
}

impl EligibilityResolver {
    /// Create resolver with the default strategy chain
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_chain(StrategyChain::with_defaults())
    }

    /// Create resolver with a custom chain
    #[inline]
    #[must_use]
    pub fn with_chain(chain: StrategyChain) -> Self {
        Self { chain }
    }

    /// Create resolver from configuration
    ///
    /// # Errors
    /// When the configured strategy list is invalid.
    pub fn from_config(config: &ResolverConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_chain(config.build_chain()?))
    }

    /// Strategy chain in use
    #[inline]
    #[must_use]
    pub fn chain(&self) -> &StrategyChain {
        &self.chain
    }

    /// Rooms of `room_type` the resident can be placed in
    ///
    /// A room qualifies when it is available, gender compatible, and has at
    /// least one available bed. Input order is preserved; an empty result is
    /// a valid answer ("no room for this type/gender").
    #[must_use]
    pub fn eligible_rooms<'a>(
        &self,
        inventory: &Inventory<'a>,
        room_type: &str,
        resident_gender: Option<&Gender>,
    ) -> Vec<&'a Room> {
        let room_type = room_type.trim();
        inventory
            .rooms()
            .iter()
            .filter(|room| room.room_type == room_type)
            .filter(|room| !self.beds_in(inventory, room, resident_gender).is_empty())
            .collect()
    }

    /// Available beds of a room the resident can take
    ///
    /// Empty for an unknown room id, a non-available room, or a gender
    /// mismatch, whatever the state of the beds.
    #[must_use]
    pub fn beds_for_room(
        &self,
        inventory: &Inventory<'_>,
        room_id: &EntityId,
        resident_gender: Option<&Gender>,
    ) -> Vec<Bed> {
        match inventory.room(room_id) {
            Some(room) => self.beds_in(inventory, room, resident_gender),
            None => {
                tracing::debug!(%room_id, "bed lookup for unknown room");
                Vec::new()
            }
        }
    }

    /// Like [`beds_for_room`](Self::beds_for_room) for an already located room
    #[must_use]
    pub fn beds_in(
        &self,
        inventory: &Inventory<'_>,
        room: &Room,
        resident_gender: Option<&Gender>,
    ) -> Vec<Bed> {
        if !room_is_eligible(room, resident_gender) {
            return Vec::new();
        }
        let mut beds = self.chain.resolve(room, inventory.beds());
        beds.retain(|bed| bed.status.is_available());
        beds
    }

    /// Eligible room and bed counts per room type
    ///
    /// Every room type present in the inventory is listed, in first-seen
    /// order, including those with nothing eligible.
    #[must_use]
    pub fn available_room_types(
        &self,
        inventory: &Inventory<'_>,
        resident_gender: Option<&Gender>,
    ) -> Vec<RoomTypeAvailability> {
        let mut by_type: IndexMap<&str, RoomTypeAvailability> = IndexMap::new();

        for room in inventory.rooms() {
            if room.room_type.is_empty() {
                continue;
            }
            let entry = by_type
                .entry(room.room_type.as_str())
                .or_insert_with(|| RoomTypeAvailability {
                    room_type: room.room_type.clone(),
                    eligible_rooms: 0,
                    eligible_beds: 0,
                });

            let beds = self.beds_in(inventory, room, resident_gender).len();
            if beds > 0 {
                entry.eligible_rooms += 1;
                entry.eligible_beds += beds;
            }
        }

        by_type.into_values().collect()
    }
}

impl Default for EligibilityResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use care_model::{BedStatus, RoomStatus};
    use pretty_assertions::assert_eq;

    fn fixture() -> (Vec<Room>, Vec<Bed>) {
        let rooms = vec![
            Room::new(1, "101", "single").with_gender(Gender::Female),
            Room::new(2, "102", "single").with_gender(Gender::Male),
            Room::new(3, "201", "double"),
            Room::new(4, "202", "double").with_status(RoomStatus::Unavailable),
            Room::new(5, "203", "double").with_bed_info(2, 1),
        ];
        let beds = vec![
            Bed::new(10, 1, 1u32),
            Bed::new(20, 2, 1u32),
            Bed::new(30, 3, 1u32).with_status(BedStatus::Occupied),
            Bed::new(31, 3, 2u32),
            Bed::new(40, 4, 1u32),
        ];
        (rooms, beds)
    }

    fn numbers(rooms: &[&Room]) -> Vec<String> {
        rooms.iter().map(|r| r.room_number.clone()).collect()
    }

    #[test]
    fn eligible_rooms_filters_by_gender() {
        let (rooms, beds) = fixture();
        let inventory = Inventory::new(&rooms, &beds);
        let resolver = EligibilityResolver::new();

        let female = resolver.eligible_rooms(&inventory, "single", Some(&Gender::Female));
        assert_eq!(numbers(&female), vec!["101"]);

        let unknown = resolver.eligible_rooms(&inventory, "single", None);
        assert_eq!(numbers(&unknown), vec!["101", "102"]);
    }

    #[test]
    fn eligible_rooms_skips_unavailable_and_keeps_order() {
        let (rooms, beds) = fixture();
        let inventory = Inventory::new(&rooms, &beds);
        let resolver = EligibilityResolver::new();

        let doubles = resolver.eligible_rooms(&inventory, "double", Some(&Gender::Male));
        assert_eq!(numbers(&doubles), vec!["201", "203"]);
    }

    #[test]
    fn eligible_rooms_unknown_type_is_empty() {
        let (rooms, beds) = fixture();
        let inventory = Inventory::new(&rooms, &beds);
        assert!(EligibilityResolver::new()
            .eligible_rooms(&inventory, "suite", None)
            .is_empty());
    }

    #[test]
    fn beds_for_room_filters_occupied() {
        let (rooms, beds) = fixture();
        let inventory = Inventory::new(&rooms, &beds);
        let found = EligibilityResolver::new().beds_for_room(&inventory, &EntityId::from(3), None);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.as_str(), "31");
    }

    #[test]
    fn beds_for_room_gender_veto() {
        let (rooms, beds) = fixture();
        let inventory = Inventory::new(&rooms, &beds);
        let found = EligibilityResolver::new().beds_for_room(
            &inventory,
            &EntityId::from(1),
            Some(&Gender::Male),
        );
        assert!(found.is_empty());
    }

    #[test]
    fn beds_for_room_unknown_room() {
        let (rooms, beds) = fixture();
        let inventory = Inventory::new(&rooms, &beds);
        assert!(EligibilityResolver::new()
            .beds_for_room(&inventory, &EntityId::from(99), None)
            .is_empty());
    }

    #[test]
    fn beds_for_room_synthesized() {
        let (rooms, beds) = fixture();
        let inventory = Inventory::new(&rooms, &beds);
        let found = EligibilityResolver::new().beds_for_room(&inventory, &EntityId::from(5), None);

        assert_eq!(found.len(), 1);
        assert!(found[0].synthesized);
        assert_eq!(found[0].id.as_str(), "5-1");
    }

    #[test]
    fn without_synthesis_summary_rooms_drop_out() {
        let (rooms, beds) = fixture();
        let inventory = Inventory::new(&rooms, &beds);
        let config = ResolverConfig::new().without_synthesis();
        let resolver = EligibilityResolver::from_config(&config).unwrap();

        let doubles = resolver.eligible_rooms(&inventory, "double", None);
        assert_eq!(numbers(&doubles), vec!["201"]);
    }

    #[test]
    fn room_type_summary() {
        let (rooms, beds) = fixture();
        let inventory = Inventory::new(&rooms, &beds);
        let summary = EligibilityResolver::new().available_room_types(&inventory, Some(&Gender::Male));

        assert_eq!(
            summary,
            vec![
                RoomTypeAvailability {
                    room_type: "single".to_string(),
                    eligible_rooms: 1,
                    eligible_beds: 1,
                },
                RoomTypeAvailability {
                    room_type: "double".to_string(),
                    eligible_rooms: 2,
                    eligible_beds: 2,
                },
            ]
        );
    }
}
