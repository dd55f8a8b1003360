//! Wizard validation errors
//!
//! These are user-facing: each maps to the step whose input was rejected so
//! the page can show the message next to the right control.

use crate::step::WizardStep;
use care_model::EntityId;
use chrono::NaiveDate;

/// Registration wizard error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WizardError {
    #[error("unknown resident: {0}")]
    UnknownResident(EntityId),

    #[error("unknown room: {0}")]
    UnknownRoom(EntityId),

    #[error("unknown care plan: {0}")]
    UnknownPlan(EntityId),

    /// No room of the type has an eligible bed for the resident
    #[error("no room available for room type '{room_type}'")]
    NoEligibleRoom { room_type: String },

    #[error("room {room_number} is not available for this resident")]
    RoomNotEligible { room_id: EntityId, room_number: String },

    #[error("bed {bed_id} is not available in room {room_id}")]
    BedNotEligible { bed_id: EntityId, room_id: EntityId },

    #[error("care plan '{0}' is no longer offered")]
    InactivePlan(String),

    #[error("a main care plan is required")]
    MissingMainPlan,

    /// An earlier step has not been completed
    #[error("select a {0} first")]
    MissingSelection(WizardStep),

    #[error("end date {end} is before start date {start}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },
}

impl WizardError {
    /// Step whose input caused the error
    #[must_use]
    pub fn step(&self) -> WizardStep {
        match self {
            Self::UnknownResident(_) => WizardStep::Resident,
            Self::NoEligibleRoom { .. } => WizardStep::RoomType,
            Self::UnknownRoom(_) | Self::RoomNotEligible { .. } => WizardStep::Room,
            Self::BedNotEligible { .. } => WizardStep::Bed,
            Self::UnknownPlan(_) | Self::InactivePlan(_) | Self::MissingMainPlan => {
                WizardStep::CarePlans
            }
            Self::MissingSelection(step) => *step,
            Self::InvalidPeriod { .. } => WizardStep::Period,
        }
    }

    /// True when a re-fetch may have made the selection stale
    #[inline]
    #[must_use]
    pub fn is_availability_change(&self) -> bool {
        matches!(
            self,
            Self::NoEligibleRoom { .. } | Self::RoomNotEligible { .. } | Self::BedNotEligible { .. }
        )
    }
}

/// Result type alias for wizard operations
pub type WizardResult<T> = Result<T, WizardError>;
