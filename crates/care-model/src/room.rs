//! Room entity and its embedded bed summary

use crate::de;
use crate::gender::Gender;
use crate::id::EntityId;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Room availability as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum RoomStatus {
    /// Open for new placements
    Available,
    /// Closed for placements
    Unavailable,
    /// Out of service
    Maintenance,
    /// Unrecognised status, stored lowercased
    Other(String),
}

impl RoomStatus {
    /// Parse case-insensitively
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "available" => Self::Available,
            "unavailable" | "full" | "occupied" => Self::Unavailable,
            "maintenance" => Self::Maintenance,
            _ => Self::Other(normalized),
        }
    }

    /// Lowercase label
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
            Self::Maintenance => "maintenance",
            Self::Other(label) => label,
        }
    }

    /// True only for [`RoomStatus::Available`]
    #[inline]
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl Default for RoomStatus {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<Option<String>> for RoomStatus {
    fn from(raw: Option<String>) -> Self {
        raw.map_or_else(Self::default, |s| Self::parse(&s))
    }
}

impl From<RoomStatus> for String {
    fn from(status: RoomStatus) -> Self {
        status.as_str().to_string()
    }
}

impl Display for RoomStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bed counts embedded in some room responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BedInfo {
    /// Beds in the room
    #[serde(default, deserialize_with = "de::count")]
    pub total_beds: u32,

    /// Beds currently free
    #[serde(default, deserialize_with = "de::count")]
    pub available_beds: u32,
}

impl BedInfo {
    /// Create summary
    #[inline]
    #[must_use]
    pub fn new(total_beds: u32, available_beds: u32) -> Self {
        Self {
            total_beds,
            available_beds,
        }
    }
}

/// A room in the facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Backend id
    pub id: EntityId,

    /// Human-facing room number, e.g. `"305"` or `"B-12"`
    #[serde(default, deserialize_with = "de::text")]
    pub room_number: String,

    /// Size/type code, e.g. `"single"`, `"double"`
    #[serde(default, deserialize_with = "de::text")]
    pub room_type: String,

    /// Gender the room is designated for, `None` when unrestricted
    #[serde(default, deserialize_with = "Gender::deserialize_opt")]
    pub gender: Option<Gender>,

    /// Availability
    #[serde(default)]
    pub status: RoomStatus,

    /// Floor number
    #[serde(default, deserialize_with = "de::opt_int")]
    pub floor: Option<i32>,

    /// Embedded bed summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bed_info: Option<BedInfo>,
}

impl Room {
    /// Create available, unrestricted room
    #[must_use]
    pub fn new(
        id: impl Into<EntityId>,
        room_number: impl Into<String>,
        room_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            room_number: room_number.into(),
            room_type: room_type.into(),
            gender: None,
            status: RoomStatus::Available,
            floor: None,
            bed_info: None,
        }
    }

    /// With gender designation
    #[inline]
    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    /// With embedded bed summary
    #[inline]
    #[must_use]
    pub fn with_bed_info(mut self, total_beds: u32, available_beds: u32) -> Self {
        self.bed_info = Some(BedInfo::new(total_beds, available_beds));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse() {
        assert_eq!(RoomStatus::parse("AVAILABLE"), RoomStatus::Available);
        assert_eq!(
            RoomStatus::parse("Cleaning"),
            RoomStatus::Other("cleaning".to_string())
        );
    }

    #[test]
    fn decode_room_with_summary() {
        let room: Room = serde_json::from_str(
            r#"{
                "id": 9,
                "room_number": 305,
                "room_type": "double",
                "gender": "Male",
                "status": "available",
                "bed_info": { "total_beds": 4, "available_beds": "2" }
            }"#,
        )
        .unwrap();

        assert_eq!(room.room_number, "305");
        assert_eq!(room.gender, Some(Gender::Male));
        assert!(room.status.is_available());
        assert_eq!(room.bed_info, Some(BedInfo::new(4, 2)));
    }

    #[test]
    fn decode_quoted_floor_and_oversized_summary() {
        let room: Room = serde_json::from_str(
            r#"{"id": 3, "room_number": "12", "floor": "1",
                "bed_info": { "total_beds": 1e12, "available_beds": 1 }}"#,
        )
        .unwrap();
        assert_eq!(room.floor, Some(1));
        assert_eq!(room.bed_info, Some(BedInfo::new(0, 1)));

        let room: Room = serde_json::from_str(r#"{"id": 3, "floor": "mezzanine"}"#).unwrap();
        assert_eq!(room.floor, None);
    }

    #[test]
    fn decode_missing_status_is_not_available() {
        let room: Room = serde_json::from_str(r#"{"id": 1, "status": null}"#).unwrap();
        assert!(!room.status.is_available());
        assert!(room.gender.is_none());
    }
}
