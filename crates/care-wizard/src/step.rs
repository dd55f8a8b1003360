//! Wizard steps

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Registration steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Resident,
    RoomType,
    Room,
    Bed,
    CarePlans,
    Period,
    Review,
}

impl WizardStep {
    /// All steps in order
    pub const ALL: [Self; 7] = [
        Self::Resident,
        Self::RoomType,
        Self::Room,
        Self::Bed,
        Self::CarePlans,
        Self::Period,
        Self::Review,
    ];

    /// Step label for display
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Resident => "resident",
            Self::RoomType => "room type",
            Self::Room => "room",
            Self::Bed => "bed",
            Self::CarePlans => "care plans",
            Self::Period => "period",
            Self::Review => "review",
        }
    }

    /// Position, 1-based
    #[must_use]
    pub fn number(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).map_or(0, |i| i + 1)
    }
}

impl Display for WizardStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_ordered() {
        assert!(WizardStep::Resident < WizardStep::Bed);
        assert!(WizardStep::Period < WizardStep::Review);
        assert_eq!(WizardStep::Resident.number(), 1);
        assert_eq!(WizardStep::Review.number(), 7);
    }
}
