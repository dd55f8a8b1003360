//! Borrowed view over fetched rooms and beds

use care_model::{Bed, EntityId, FacilitySnapshot, Room};

/// Rooms and beds the resolver reads
///
/// Borrowed so the same fetched collections can be re-resolved after every
/// selection without copying.
#[derive(Debug, Clone, Copy)]
pub struct Inventory<'a> {
    rooms: &'a [Room],
    beds: &'a [Bed],
}

impl<'a> Inventory<'a> {
    /// Create inventory from fetched collections
    #[inline]
    #[must_use]
    pub fn new(rooms: &'a [Room], beds: &'a [Bed]) -> Self {
        Self { rooms, beds }
    }

    /// Borrow the rooms and beds of a snapshot
    #[inline]
    #[must_use]
    pub fn from_snapshot(snapshot: &'a FacilitySnapshot) -> Self {
        Self::new(&snapshot.rooms, &snapshot.beds)
    }

    /// All rooms, in fetch order
    #[inline]
    #[must_use]
    pub fn rooms(&self) -> &'a [Room] {
        self.rooms
    }

    /// All beds, in fetch order
    #[inline]
    #[must_use]
    pub fn beds(&self) -> &'a [Bed] {
        self.beds
    }

    /// First room with the given id
    #[must_use]
    pub fn room(&self, id: &EntityId) -> Option<&'a Room> {
        self.rooms.iter().find(|r| &r.id == id)
    }
}

impl<'a> From<&'a FacilitySnapshot> for Inventory<'a> {
    fn from(snapshot: &'a FacilitySnapshot) -> Self {
        Self::from_snapshot(snapshot)
    }
}
