//! Assignment request sent to the backend on submit

use care_model::{AssignmentStatus, BedNumber, EntityId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// New care plan assignment, as POSTed by the registration page
///
/// `bed_id` is `None` when the bed was synthesized from a room summary; the
/// backend then allocates by `bed_number`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRequest {
    pub resident_id: EntityId,
    pub room_id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bed_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bed_number: Option<BedNumber>,
    pub bed_label: String,
    /// Main plan first
    pub care_plan_ids: Vec<EntityId>,
    pub monthly_total: f64,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub status: AssignmentStatus,
}
