//! Resident and room gender designation

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display, Formatter};

/// Gender of a resident, or the gender a room is designated for
///
/// Parsing is case-insensitive. Blank values and the backend's
/// "unspecified" markers parse to `None`, i.e. no designation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Any other designation, stored lowercased
    Other(String),
}

impl Gender {
    /// Parse a backend gender string
    ///
    /// Returns `None` for values that mean "no designation".
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "" | "unspecified" | "unknown" | "none" | "n/a" | "any" | "mixed" => None,
            "male" | "m" | "man" => Some(Self::Male),
            "female" | "f" | "woman" => Some(Self::Female),
            _ => Some(Self::Other(normalized)),
        }
    }

    /// Lowercase canonical label
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other(label) => label,
        }
    }

    /// Decode an optional gender field
    pub(crate) fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.and_then(|raw| Self::parse(&raw)))
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Gender::parse("MALE"), Some(Gender::Male));
        assert_eq!(Gender::parse(" Female "), Some(Gender::Female));
        assert_eq!(Gender::parse("f"), Some(Gender::Female));
    }

    #[test]
    fn parse_unset_markers() {
        assert_eq!(Gender::parse(""), None);
        assert_eq!(Gender::parse("Unspecified"), None);
    }

    #[test]
    fn parse_other_is_lowercased() {
        assert_eq!(
            Gender::parse("Non-Binary"),
            Some(Gender::Other("non-binary".to_string()))
        );
    }
}
