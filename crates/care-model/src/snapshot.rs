//! One fetch of every collection the placement flow reads

use crate::bed::Bed;
use crate::de;
use crate::error::{ModelError, ModelResult};
use crate::id::EntityId;
use crate::plan::{CarePlan, CarePlanAssignment};
use crate::resident::Resident;
use crate::room::Room;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Backend collections as fetched together
///
/// Missing or `null` collections decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacilitySnapshot {
    /// Residents
    #[serde(default, deserialize_with = "de::list")]
    pub residents: Vec<Resident>,

    /// Rooms
    #[serde(default, deserialize_with = "de::list")]
    pub rooms: Vec<Room>,

    /// Beds
    #[serde(default, deserialize_with = "de::list")]
    pub beds: Vec<Bed>,

    /// Care plans
    #[serde(default, deserialize_with = "de::list")]
    pub care_plans: Vec<CarePlan>,

    /// Care plan assignments
    #[serde(default, deserialize_with = "de::list")]
    pub assignments: Vec<CarePlanAssignment>,
}

impl FacilitySnapshot {
    /// Decode from a JSON document
    ///
    /// # Errors
    /// [`ModelError::Malformed`] when the document does not match.
    pub fn from_json_str(json: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and decode a JSON file
    ///
    /// # Errors
    /// [`ModelError::Io`] when the file cannot be read,
    /// [`ModelError::Malformed`] when it does not decode.
    pub fn from_json_file(path: impl AsRef<Path>) -> ModelResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ModelError::io(path, e))?;
        Self::from_json_str(&json)
    }

    /// Look up resident by id
    #[must_use]
    pub fn resident(&self, id: &EntityId) -> Option<&Resident> {
        self.residents.iter().find(|r| &r.id == id)
    }

    /// Look up room by id
    #[must_use]
    pub fn room(&self, id: &EntityId) -> Option<&Room> {
        self.rooms.iter().find(|r| &r.id == id)
    }

    /// Look up care plan by id
    #[must_use]
    pub fn care_plan(&self, id: &EntityId) -> Option<&CarePlan> {
        self.care_plans.iter().find(|p| &p.id == id)
    }

    /// Assignments of one resident that still hold a bed
    pub fn open_assignments<'a>(
        &'a self,
        resident_id: &'a EntityId,
    ) -> impl Iterator<Item = &'a CarePlanAssignment> + 'a {
        self.assignments
            .iter()
            .filter(move |a| &a.resident_id == resident_id && a.status.holds_bed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bed::BedNumber;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "residents": [{ "id": 1, "name": "Ada", "gender": "female" }],
        "rooms": [{ "id": 10, "room_number": "101", "room_type": "single", "status": "available" }],
        "beds": null,
        "care_plans": [{ "id": 100, "plan_name": "Standard", "category": "main", "monthly_price": 1500 }],
        "assignments": [
            { "id": 7, "resident_id": 1, "status": "active" },
            { "id": 8, "resident_id": 1, "status": "rejected" }
        ]
    }"#;

    #[test]
    fn decode_snapshot() {
        let snapshot = FacilitySnapshot::from_json_str(SNAPSHOT).unwrap();
        assert_eq!(snapshot.residents.len(), 1);
        assert_eq!(snapshot.rooms.len(), 1);
        assert!(snapshot.beds.is_empty());
        assert_eq!(snapshot.care_plans[0].monthly_price, 1500.0);
    }

    #[test]
    fn lookups() {
        let snapshot = FacilitySnapshot::from_json_str(SNAPSHOT).unwrap();
        assert_eq!(snapshot.resident(&EntityId::from(1)).unwrap().name, "Ada");
        assert!(snapshot.room(&EntityId::from("10")).is_some());
        assert!(snapshot.care_plan(&EntityId::from(999)).is_none());

        let resident = EntityId::from(1);
        let open: Vec<_> = snapshot.open_assignments(&resident).map(|a| a.id.clone()).collect();
        assert_eq!(open, vec![EntityId::from(7)]);
    }

    #[test]
    fn odd_scalars_do_not_reject_document() {
        let snapshot = FacilitySnapshot::from_json_str(
            r#"{
                "residents": [{ "id": 1, "name": "Ada", "age": "81" }],
                "rooms": [{ "id": 10, "room_number": "101", "floor": "1",
                            "bed_info": { "total_beds": 1e12, "available_beds": 1 } }],
                "beds": [{ "id": 5, "room_id": 10, "bed_number": 1.0 },
                         { "id": 6, "room_id": 10, "bed_number": -1 }]
            }"#,
        )
        .unwrap();

        assert_eq!(snapshot.residents[0].age, Some(81));
        assert_eq!(snapshot.rooms[0].floor, Some(1));
        assert_eq!(snapshot.rooms[0].bed_info.map(|i| i.total_beds), Some(0));
        assert_eq!(snapshot.beds[0].bed_number, Some(BedNumber::Numeric(1)));
        assert_eq!(snapshot.beds[1].bed_number, None);
    }

    #[test]
    fn empty_document() {
        assert_eq!(
            FacilitySnapshot::from_json_str("{}").unwrap(),
            FacilitySnapshot::default()
        );
    }

    #[test]
    fn from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let snapshot = FacilitySnapshot::from_json_file(file.path()).unwrap();
        assert_eq!(snapshot.rooms[0].room_number, "101");
    }

    #[test]
    fn from_missing_file() {
        let err = FacilitySnapshot::from_json_file("/nonexistent/snapshot.json").unwrap_err();
        assert!(matches!(err, ModelError::Io { .. }));
    }

    #[test]
    fn malformed_document() {
        let err = FacilitySnapshot::from_json_str(r#"{"rooms": 3}"#).unwrap_err();
        assert!(err.is_malformed());
    }
}
