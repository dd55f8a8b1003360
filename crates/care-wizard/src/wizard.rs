//! Registration wizard state machine
//!
//! Each `select_*` call validates its input against the resolver's current
//! output and clears the selections that depend on it. [`WizardState`] is
//! plain data so a page can persist it between renders.

use crate::error::{WizardError, WizardResult};
use crate::options::{BedOption, RoomOption};
use crate::plans::{offered_plans, PlanSelection};
use crate::request::AssignmentRequest;
use crate::step::WizardStep;
use care_eligibility::{format_bed_label, EligibilityResolver, Inventory, RoomTypeAvailability};
use care_model::{
    AssignmentStatus, Bed, CarePlan, CarePlanAssignment, EntityId, FacilitySnapshot, Gender,
    Resident, Room,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Selections made so far
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub resident_id: Option<EntityId>,
    pub room_type: Option<String>,
    pub room_id: Option<EntityId>,
    pub bed_id: Option<EntityId>,
    pub plans: PlanSelection,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl WizardState {
    fn clear_from(&mut self, step: WizardStep) {
        if step <= WizardStep::RoomType {
            self.room_type = None;
        }
        if step <= WizardStep::Room {
            self.room_id = None;
        }
        if step <= WizardStep::Bed {
            self.bed_id = None;
        }
    }
}

/// Registration wizard over one fetched snapshot
#[derive(Debug)]
pub struct RegistrationWizard<'a> {
    snapshot: &'a FacilitySnapshot,
    resolver: &'a EligibilityResolver,
    state: WizardState,
}

impl<'a> RegistrationWizard<'a> {
    /// Start an empty registration
    #[must_use]
    pub fn new(snapshot: &'a FacilitySnapshot, resolver: &'a EligibilityResolver) -> Self {
        Self {
            snapshot,
            resolver,
            state: WizardState::default(),
        }
    }

    /// Resume from saved state, dropping selections that no longer hold
    #[must_use]
    pub fn with_state(
        snapshot: &'a FacilitySnapshot,
        resolver: &'a EligibilityResolver,
        state: WizardState,
    ) -> Self {
        let mut wizard = Self {
            snapshot,
            resolver,
            state,
        };
        wizard.revalidate();
        wizard
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn into_state(self) -> WizardState {
        self.state
    }

    fn inventory(&self) -> Inventory<'a> {
        Inventory::from_snapshot(self.snapshot)
    }

    /// Selected resident
    #[must_use]
    pub fn resident(&self) -> Option<&'a Resident> {
        self.state
            .resident_id
            .as_ref()
            .and_then(|id| self.snapshot.resident(id))
    }

    fn gender(&self) -> Option<&'a Gender> {
        self.resident().and_then(|r| r.gender.as_ref())
    }

    /// Assignment the selected resident already holds, if any
    #[must_use]
    pub fn open_assignment(&self) -> Option<&'a CarePlanAssignment> {
        let resident = self.resident()?;
        let snapshot = self.snapshot;
        snapshot.open_assignments(&resident.id).next()
    }

    // ---- selection -------------------------------------------------------

    /// Pick the resident; a different resident clears room type, room and bed
    ///
    /// # Errors
    /// [`WizardError::UnknownResident`] when the id is not in the snapshot.
    pub fn select_resident(&mut self, resident_id: &EntityId) -> WizardResult<&'a Resident> {
        let snapshot = self.snapshot;
        let resident = snapshot
            .resident(resident_id)
            .ok_or_else(|| WizardError::UnknownResident(resident_id.clone()))?;

        if self.state.resident_id.as_ref() != Some(resident_id) {
            self.state.resident_id = Some(resident_id.clone());
            self.state.clear_from(WizardStep::RoomType);
        }
        Ok(resident)
    }

    /// Pick a room type; a different type clears room and bed
    ///
    /// # Errors
    /// - [`WizardError::MissingSelection`] without a resident
    /// - [`WizardError::NoEligibleRoom`] when no room of the type can take the resident
    pub fn select_room_type(&mut self, room_type: &str) -> WizardResult<()> {
        let room_type = room_type.trim();
        self.check_room_type(room_type)?;

        if self.state.room_type.as_deref() != Some(room_type) {
            self.state.room_type = Some(room_type.to_string());
            self.state.clear_from(WizardStep::Room);
        }
        Ok(())
    }

    /// Pick a room; a different room clears the bed
    ///
    /// # Errors
    /// - [`WizardError::MissingSelection`] without a room type
    /// - [`WizardError::UnknownRoom`] / [`WizardError::RoomNotEligible`]
    pub fn select_room(&mut self, room_id: &EntityId) -> WizardResult<&'a Room> {
        let room = self.check_room(room_id)?;

        if self.state.room_id.as_ref() != Some(room_id) {
            self.state.room_id = Some(room_id.clone());
            self.state.clear_from(WizardStep::Bed);
        }
        Ok(room)
    }

    /// Pick a bed in the selected room
    ///
    /// # Errors
    /// - [`WizardError::MissingSelection`] without a room
    /// - [`WizardError::BedNotEligible`] when the bed is not offered for the room
    pub fn select_bed(&mut self, bed_id: &EntityId) -> WizardResult<Bed> {
        let bed = self.check_bed(bed_id)?;
        self.state.bed_id = Some(bed_id.clone());
        Ok(bed)
    }

    /// Toggle a care plan, returning whether it is selected afterwards
    ///
    /// # Errors
    /// [`WizardError::UnknownPlan`] / [`WizardError::InactivePlan`]
    pub fn toggle_care_plan(&mut self, plan_id: &EntityId) -> WizardResult<bool> {
        let snapshot = self.snapshot;
        let plan = snapshot
            .care_plan(plan_id)
            .ok_or_else(|| WizardError::UnknownPlan(plan_id.clone()))?;
        self.state.plans.toggle(plan)
    }

    /// Set the placement period; `end` is open-ended when `None`
    ///
    /// # Errors
    /// [`WizardError::InvalidPeriod`] when `end` precedes `start`.
    pub fn set_period(&mut self, start: NaiveDate, end: Option<NaiveDate>) -> WizardResult<()> {
        check_period(start, end)?;
        self.state.start_date = Some(start);
        self.state.end_date = end;
        Ok(())
    }

    // ---- derived views ---------------------------------------------------

    /// Room types with eligible room and bed counts for the resident
    #[must_use]
    pub fn room_type_options(&self) -> Vec<RoomTypeAvailability> {
        self.resolver
            .available_room_types(&self.inventory(), self.gender())
    }

    /// Eligible rooms of the selected type
    #[must_use]
    pub fn room_options(&self) -> Vec<RoomOption> {
        let Some(room_type) = self.state.room_type.as_deref() else {
            return Vec::new();
        };
        let inventory = self.inventory();
        self.resolver
            .eligible_rooms(&inventory, room_type, self.gender())
            .into_iter()
            .map(|room| {
                let beds = self.resolver.beds_in(&inventory, room, self.gender()).len();
                RoomOption::new(room, beds)
            })
            .collect()
    }

    /// Eligible beds of the selected room, labelled
    #[must_use]
    pub fn bed_options(&self) -> Vec<BedOption> {
        let Some(room) = self.selected_room() else {
            return Vec::new();
        };
        self.resolver
            .beds_in(&self.inventory(), room, self.gender())
            .iter()
            .map(|bed| BedOption::new(bed, &room.room_number))
            .collect()
    }

    /// Active care plans, main plans first
    #[must_use]
    pub fn care_plan_options(&self) -> Vec<&'a CarePlan> {
        offered_plans(&self.snapshot.care_plans)
    }

    #[must_use]
    pub fn selected_room(&self) -> Option<&'a Room> {
        self.state
            .room_id
            .as_ref()
            .and_then(|id| self.inventory().room(id))
    }

    #[must_use]
    pub fn selected_bed(&self) -> Option<Bed> {
        self.state
            .bed_id
            .as_ref()
            .and_then(|id| self.check_bed(id).ok())
    }

    /// Monthly price of the selected plans
    #[must_use]
    pub fn monthly_total(&self) -> f64 {
        self.state.plans.monthly_total(&self.snapshot.care_plans)
    }

    /// First step that still needs input
    #[must_use]
    pub fn current_step(&self) -> WizardStep {
        let s = &self.state;
        if s.resident_id.is_none() {
            WizardStep::Resident
        } else if s.room_type.is_none() {
            WizardStep::RoomType
        } else if s.room_id.is_none() {
            WizardStep::Room
        } else if s.bed_id.is_none() {
            WizardStep::Bed
        } else if s.plans.main().is_none() {
            WizardStep::CarePlans
        } else if s.start_date.is_none() {
            WizardStep::Period
        } else {
            WizardStep::Review
        }
    }

    // ---- refresh / submit ------------------------------------------------

    /// Swap in a re-fetched snapshot
    ///
    /// Returns the steps whose selection was dropped because it is no
    /// longer valid against the new data.
    pub fn refresh(&mut self, snapshot: &'a FacilitySnapshot) -> Vec<WizardStep> {
        self.snapshot = snapshot;
        self.revalidate()
    }

    fn revalidate(&mut self) -> Vec<WizardStep> {
        let mut dropped = Vec::new();

        if self.state.resident_id.is_some() && self.resident().is_none() {
            self.state.resident_id = None;
            dropped.push(WizardStep::Resident);
        }

        let room_type_ok = match self.state.room_type.as_deref() {
            Some(room_type) => self.check_room_type(room_type).is_ok(),
            None => true,
        };
        if !room_type_ok {
            self.state.clear_from(WizardStep::RoomType);
            dropped.push(WizardStep::RoomType);
        }

        if let Some(room_id) = self.state.room_id.clone() {
            if self.check_room(&room_id).is_err() {
                self.state.clear_from(WizardStep::Room);
                dropped.push(WizardStep::Room);
            }
        }

        if let Some(bed_id) = self.state.bed_id.clone() {
            if self.check_bed(&bed_id).is_err() {
                self.state.clear_from(WizardStep::Bed);
                dropped.push(WizardStep::Bed);
            }
        }

        if self.state.plans.retain_offered(&self.snapshot.care_plans) {
            dropped.push(WizardStep::CarePlans);
        }

        if !dropped.is_empty() {
            tracing::debug!(?dropped, "registration selections invalidated");
        }
        dropped
    }

    /// Validate every selection and build the request
    ///
    /// # Errors
    /// The first failing step, in wizard order.
    pub fn submit(&self) -> WizardResult<AssignmentRequest> {
        let resident = self
            .resident()
            .ok_or(WizardError::MissingSelection(WizardStep::Resident))?;
        let room_type = self
            .state
            .room_type
            .as_deref()
            .ok_or(WizardError::MissingSelection(WizardStep::RoomType))?;
        self.check_room_type(room_type)?;

        let room_id = self
            .state
            .room_id
            .as_ref()
            .ok_or(WizardError::MissingSelection(WizardStep::Room))?;
        let room = self.check_room(room_id)?;

        let bed_id = self
            .state
            .bed_id
            .as_ref()
            .ok_or(WizardError::MissingSelection(WizardStep::Bed))?;
        let bed = self.check_bed(bed_id)?;

        let plans = self.state.plans.resolve(&self.snapshot.care_plans)?;

        let start_date = self
            .state
            .start_date
            .ok_or(WizardError::MissingSelection(WizardStep::Period))?;
        check_period(start_date, self.state.end_date)?;

        let request = AssignmentRequest {
            resident_id: resident.id.clone(),
            room_id: room.id.clone(),
            bed_id: (!bed.synthesized).then(|| bed.id.clone()),
            bed_label: format_bed_label(&bed, Some(&room.room_number)),
            bed_number: bed.bed_number,
            care_plan_ids: plans.iter().map(|p| p.id.clone()).collect(),
            monthly_total: plans.iter().map(|p| p.monthly_price).sum(),
            start_date,
            end_date: self.state.end_date,
            status: AssignmentStatus::Pending,
        };

        tracing::info!(
            resident_id = %request.resident_id,
            room_id = %request.room_id,
            bed = %request.bed_label,
            plans = request.care_plan_ids.len(),
            "registration submitted"
        );
        Ok(request)
    }

    // ---- checks ----------------------------------------------------------

    fn check_room_type(&self, room_type: &str) -> WizardResult<()> {
        if self.state.resident_id.is_none() {
            return Err(WizardError::MissingSelection(WizardStep::Resident));
        }
        let eligible = self
            .resolver
            .eligible_rooms(&self.inventory(), room_type, self.gender());
        if eligible.is_empty() {
            return Err(WizardError::NoEligibleRoom {
                room_type: room_type.to_string(),
            });
        }
        Ok(())
    }

    fn check_room(&self, room_id: &EntityId) -> WizardResult<&'a Room> {
        let room_type = self
            .state
            .room_type
            .as_deref()
            .ok_or(WizardError::MissingSelection(WizardStep::RoomType))?;
        let inventory = self.inventory();
        let room = inventory
            .room(room_id)
            .ok_or_else(|| WizardError::UnknownRoom(room_id.clone()))?;

        if room.room_type != room_type
            || self.resolver.beds_in(&inventory, room, self.gender()).is_empty()
        {
            return Err(WizardError::RoomNotEligible {
                room_id: room.id.clone(),
                room_number: room.room_number.clone(),
            });
        }
        Ok(room)
    }

    fn check_bed(&self, bed_id: &EntityId) -> WizardResult<Bed> {
        let room_id = self
            .state
            .room_id
            .as_ref()
            .ok_or(WizardError::MissingSelection(WizardStep::Room))?;
        let room = self.check_room(room_id)?;

        self.resolver
            .beds_in(&self.inventory(), room, self.gender())
            .into_iter()
            .find(|bed| &bed.id == bed_id)
            .ok_or_else(|| WizardError::BedNotEligible {
                bed_id: bed_id.clone(),
                room_id: room.id.clone(),
            })
    }
}

fn check_period(start: NaiveDate, end: Option<NaiveDate>) -> WizardResult<()> {
    match end {
        Some(end) if end < start => Err(WizardError::InvalidPeriod { start, end }),
        _ => Ok(()),
    }
}
