//! Care plans and care plan assignments

use crate::de;
use crate::id::EntityId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Care plan category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", rename_all = "lowercase")]
pub enum PlanCategory {
    /// Primary plan; a resident holds exactly one
    Main,
    /// Add-on plan
    #[default]
    Supplementary,
}

impl From<Option<String>> for PlanCategory {
    fn from(raw: Option<String>) -> Self {
        match raw.as_deref().map(|s| s.trim().to_lowercase()).as_deref() {
            Some("main" | "primary" | "basic") => Self::Main,
            _ => Self::Supplementary,
        }
    }
}

impl Display for PlanCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => f.write_str("main"),
            Self::Supplementary => f.write_str("supplementary"),
        }
    }
}

/// A priced bundle of services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarePlan {
    /// Backend id
    pub id: EntityId,

    /// Display name
    #[serde(default, alias = "name", deserialize_with = "de::text")]
    pub plan_name: String,

    /// Main or supplementary
    #[serde(default)]
    pub category: PlanCategory,

    /// Monthly price in the facility's currency
    #[serde(default, deserialize_with = "de::price")]
    pub monthly_price: f64,

    /// Free-text description
    #[serde(default, deserialize_with = "de::text")]
    pub description: String,

    /// Services in display order
    #[serde(default, deserialize_with = "de::list")]
    pub services_included: Vec<String>,

    /// Inactive plans are kept for history but cannot be selected
    #[serde(default = "de::default_true", deserialize_with = "de::flag_default_true")]
    pub is_active: bool,
}

impl CarePlan {
    /// Create active plan
    #[must_use]
    pub fn new(
        id: impl Into<EntityId>,
        plan_name: impl Into<String>,
        category: PlanCategory,
        monthly_price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            plan_name: plan_name.into(),
            category,
            monthly_price,
            description: String::new(),
            services_included: Vec::new(),
            is_active: true,
        }
    }

    /// Mark inactive
    #[inline]
    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// With services
    #[must_use]
    pub fn with_services<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.services_included = services.into_iter().map(Into::into).collect();
        self
    }
}

/// Assignment lifecycle state
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum AssignmentStatus {
    /// Awaiting staff approval
    #[default]
    Pending,
    /// Approved, not yet started
    Approved,
    /// Rejected by staff
    Rejected,
    /// In effect
    Active,
    /// Finished
    Ended,
    /// Unrecognised status, stored lowercased
    Other(String),
}

impl From<Option<String>> for AssignmentStatus {
    fn from(raw: Option<String>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "" | "pending" => Self::Pending,
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            "active" => Self::Active,
            "ended" | "completed" | "cancelled" => Self::Ended,
            _ => Self::Other(normalized),
        }
    }
}

impl From<AssignmentStatus> for String {
    fn from(status: AssignmentStatus) -> Self {
        match status {
            AssignmentStatus::Pending => "pending".to_string(),
            AssignmentStatus::Approved => "approved".to_string(),
            AssignmentStatus::Rejected => "rejected".to_string(),
            AssignmentStatus::Active => "active".to_string(),
            AssignmentStatus::Ended => "ended".to_string(),
            AssignmentStatus::Other(label) => label,
        }
    }
}

impl AssignmentStatus {
    /// True while the assignment holds its bed
    #[inline]
    #[must_use]
    pub fn holds_bed(&self) -> bool {
        matches!(self, Self::Pending | Self::Approved | Self::Active)
    }
}

/// Link from a resident to care plans and a room/bed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarePlanAssignment {
    /// Backend id
    pub id: EntityId,

    /// Resident
    pub resident_id: EntityId,

    /// Main plan first, then supplementary plans
    #[serde(default, deserialize_with = "de::list")]
    pub care_plan_ids: Vec<EntityId>,

    /// Assigned room
    #[serde(default)]
    pub room_id: Option<EntityId>,

    /// Assigned bed
    #[serde(default)]
    pub bed_id: Option<EntityId>,

    /// First day
    #[serde(default, deserialize_with = "de::date")]
    pub start_date: Option<NaiveDate>,

    /// Last day, open-ended when `None`
    #[serde(default, deserialize_with = "de::date")]
    pub end_date: Option<NaiveDate>,

    /// Lifecycle state
    #[serde(default)]
    pub status: AssignmentStatus,
}
