//! Backend entity identifiers

use crate::de::Scalar;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Opaque backend identifier
///
/// The backend serves ids as integers on some endpoints and strings on
/// others; both decode to the same textual form so `7` and `"7"` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Scalar", into = "String")]
pub struct EntityId(String);

impl EntityId {
    /// Create id from any string-like value
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    /// Borrow the textual form
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the backend sent an empty id
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Scalar> for EntityId {
    fn from(raw: Scalar) -> Self {
        Self::new(raw.into_text())
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

macro_rules! impl_from_integer {
    ($($int:ty),*) => {
        $(
            impl From<$int> for EntityId {
                fn from(id: $int) -> Self {
                    Self(id.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64, usize);

impl Display for EntityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl PartialEq<str> for EntityId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_match() {
        let a: EntityId = serde_json::from_str("7").unwrap();
        let b: EntityId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, EntityId::from(7));
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&EntityId::from(42)).unwrap();
        assert_eq!(json, "\"42\"");
    }
}
