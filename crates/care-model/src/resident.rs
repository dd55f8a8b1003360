//! Resident entity

use crate::de;
use crate::gender::Gender;
use crate::id::EntityId;
use serde::{Deserialize, Serialize};

/// A person receiving care
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resident {
    /// Backend id
    pub id: EntityId,

    /// Display name
    #[serde(default, alias = "full_name", deserialize_with = "de::text")]
    pub name: String,

    /// Gender, `None` when unset
    #[serde(default, deserialize_with = "Gender::deserialize_opt")]
    pub gender: Option<Gender>,

    /// Age in years
    #[serde(default, deserialize_with = "de::opt_int")]
    pub age: Option<u32>,

    /// Phone number
    #[serde(default, deserialize_with = "de::opt_text")]
    pub phone: Option<String>,

    /// Email address
    #[serde(default, deserialize_with = "de::opt_text")]
    pub email: Option<String>,

    /// Emergency contact name or number
    #[serde(default, deserialize_with = "de::opt_text")]
    pub emergency_contact: Option<String>,
}

impl Resident {
    /// Create resident with only the fields placement needs
    #[must_use]
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>, gender: Option<Gender>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            gender,
            age: None,
            phone: None,
            email: None,
            emergency_contact: None,
        }
    }
}
