//! Gender compatibility between residents and rooms

use care_model::{Gender, Room};

/// Check whether a room designation admits a resident
///
/// Compatible when either side is unset, or both are equal. [`Gender`]
/// values are already case-normalised, so equality is case-insensitive.
///
/// This is the only gender check in the crate; room filtering and bed
/// resolution both call it.
#[inline]
#[must_use]
pub fn gender_compatible(room_gender: Option<&Gender>, resident_gender: Option<&Gender>) -> bool {
    match (room_gender, resident_gender) {
        (Some(room), Some(resident)) => room == resident,
        _ => true,
    }
}

/// Room-level eligibility: available and gender compatible
///
/// Bed availability is not considered here; see
/// [`EligibilityResolver::eligible_rooms`](crate::EligibilityResolver::eligible_rooms).
#[inline]
#[must_use]
pub fn room_is_eligible(room: &Room, resident_gender: Option<&Gender>) -> bool {
    room.status.is_available() && gender_compatible(room.gender.as_ref(), resident_gender)
}

#[cfg(test)]
mod tests {
    use super::*;
    use care_model::RoomStatus;

    #[test]
    fn unset_sides_are_compatible() {
        assert!(gender_compatible(None, None));
        assert!(gender_compatible(None, Some(&Gender::Male)));
        assert!(gender_compatible(Some(&Gender::Female), None));
    }

    #[test]
    fn mismatch_is_incompatible() {
        assert!(!gender_compatible(Some(&Gender::Female), Some(&Gender::Male)));
        assert!(gender_compatible(Some(&Gender::Male), Some(&Gender::Male)));
    }

    #[test]
    fn case_is_normalised_before_comparison() {
        let room = Gender::parse("FEMALE");
        let resident = Gender::parse("female");
        assert!(gender_compatible(room.as_ref(), resident.as_ref()));
    }

    #[test]
    fn unavailable_room_is_not_eligible() {
        let room = care_model::Room::new(1, "101", "single").with_status(RoomStatus::Maintenance);
        assert!(!room_is_eligible(&room, None));
    }
}
