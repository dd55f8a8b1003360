//! Bed entity

use crate::de;
use crate::id::EntityId;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Bed occupancy as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum BedStatus {
    /// Free for assignment
    Available,
    /// Assigned to a resident
    Occupied,
    /// Held for a pending registration
    Reserved,
    /// Out of service
    Maintenance,
    /// Unrecognised status, stored lowercased
    Other(String),
}

impl BedStatus {
    /// Parse case-insensitively
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "available" | "vacant" => Self::Available,
            "occupied" => Self::Occupied,
            "reserved" => Self::Reserved,
            "maintenance" => Self::Maintenance,
            _ => Self::Other(normalized),
        }
    }

    /// Lowercase label
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Reserved => "reserved",
            Self::Maintenance => "maintenance",
            Self::Other(label) => label,
        }
    }

    /// True only for [`BedStatus::Available`]
    #[inline]
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl Default for BedStatus {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<Option<String>> for BedStatus {
    fn from(raw: Option<String>) -> Self {
        raw.map_or_else(Self::default, |s| Self::parse(&s))
    }
}

impl From<BedStatus> for String {
    fn from(status: BedStatus) -> Self {
        status.as_str().to_string()
    }
}

impl Display for BedStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bed number: a plain ordinal or a pre-composed label such as `"101-A"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BedNumber {
    /// Ordinal within the room
    Numeric(u32),
    /// Free-form label
    Text(String),
}

impl BedNumber {
    /// Ordinal value, also for numeric strings like `"2"`
    #[must_use]
    pub fn as_numeric(&self) -> Option<u32> {
        match self {
            Self::Numeric(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    /// True when the label already carries a room/bed separator
    #[must_use]
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Text(s) if s.contains('-'))
    }
}

impl Display for BedNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u32> for BedNumber {
    fn from(n: u32) -> Self {
        Self::Numeric(n)
    }
}

impl From<&str> for BedNumber {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A bed, either fetched from the backend or synthesized from a room summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bed {
    /// Backend id
    pub id: EntityId,

    /// Ordinal or label
    #[serde(default, deserialize_with = "de::bed_number")]
    pub bed_number: Option<BedNumber>,

    /// Display name, preferred over a derived label
    #[serde(default, deserialize_with = "de::opt_text")]
    pub bed_name: Option<String>,

    /// Owning room id
    #[serde(default)]
    pub room_id: Option<EntityId>,

    /// Owning room number, served by backends that link beds by number
    #[serde(default, deserialize_with = "de::opt_text")]
    pub room_number: Option<String>,

    /// Occupancy
    #[serde(default)]
    pub status: BedStatus,

    /// Placeholder built from a room's bed summary, not a backend record
    #[serde(skip)]
    pub synthesized: bool,
}

impl Bed {
    /// Create available bed belonging to a room
    #[must_use]
    pub fn new(id: impl Into<EntityId>, room_id: impl Into<EntityId>, bed_number: impl Into<BedNumber>) -> Self {
        Self {
            id: id.into(),
            bed_number: Some(bed_number.into()),
            bed_name: None,
            room_id: Some(room_id.into()),
            room_number: None,
            status: BedStatus::Available,
            synthesized: false,
        }
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: BedStatus) -> Self {
        self.status = status;
        self
    }

    /// With display name
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.bed_name = Some(name.into());
        self
    }

    /// Link by room number instead of room id
    #[inline]
    #[must_use]
    pub fn linked_by_number(mut self, room_number: impl Into<String>) -> Self {
        self.room_id = None;
        self.room_number = Some(room_number.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bed_number_numeric_string() {
        assert_eq!(BedNumber::from("2").as_numeric(), Some(2));
        assert_eq!(BedNumber::from("101-A").as_numeric(), None);
        assert!(BedNumber::from("101-A").is_composite());
        assert!(!BedNumber::Numeric(3).is_composite());
    }

    #[test]
    fn decode_bed() {
        let bed: Bed = serde_json::from_str(
            r#"{"id": 11, "bed_number": 2, "room_id": 9, "status": "Occupied"}"#,
        )
        .unwrap();
        assert_eq!(bed.bed_number, Some(BedNumber::Numeric(2)));
        assert_eq!(bed.room_id, Some(EntityId::from(9)));
        assert_eq!(bed.status, BedStatus::Occupied);
        assert!(!bed.synthesized);
    }

    #[test]
    fn decode_float_and_negative_bed_numbers() {
        let bed: Bed = serde_json::from_str(r#"{"id": 1, "bed_number": 1.0}"#).unwrap();
        assert_eq!(bed.bed_number, Some(BedNumber::Numeric(1)));

        let bed: Bed = serde_json::from_str(r#"{"id": 1, "bed_number": -1}"#).unwrap();
        assert_eq!(bed.bed_number, None);
    }

    #[test]
    fn decode_bed_linked_by_number() {
        let bed: Bed = serde_json::from_str(
            r#"{"id": "b1", "bed_number": "305-A", "room_number": 305, "status": "available"}"#,
        )
        .unwrap();
        assert!(bed.room_id.is_none());
        assert_eq!(bed.room_number.as_deref(), Some("305"));
        assert!(bed.status.is_available());
    }
}
