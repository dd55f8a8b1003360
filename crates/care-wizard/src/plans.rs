//! Care plan selection rules
//!
//! A registration holds exactly one main plan and any number of
//! supplementary plans. Only active plans can be selected.

use crate::error::{WizardError, WizardResult};
use care_model::{CarePlan, EntityId, PlanCategory};
use serde::{Deserialize, Serialize};

/// Selected care plans
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSelection {
    main: Option<EntityId>,
    supplementary: Vec<EntityId>,
}

impl PlanSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a plan, returning whether it is selected afterwards
    ///
    /// Selecting a main plan replaces the current one; selecting the current
    /// main plan again clears it.
    ///
    /// # Errors
    /// [`WizardError::InactivePlan`] for inactive plans.
    pub fn toggle(&mut self, plan: &CarePlan) -> WizardResult<bool> {
        if self.is_selected(&plan.id) {
            self.remove(&plan.id);
            return Ok(false);
        }
        if !plan.is_active {
            return Err(WizardError::InactivePlan(plan.plan_name.clone()));
        }

        match plan.category {
            PlanCategory::Main => self.main = Some(plan.id.clone()),
            PlanCategory::Supplementary => self.supplementary.push(plan.id.clone()),
        }
        Ok(true)
    }

    fn remove(&mut self, id: &EntityId) {
        if self.main.as_ref() == Some(id) {
            self.main = None;
        }
        self.supplementary.retain(|s| s != id);
    }

    #[inline]
    #[must_use]
    pub fn main(&self) -> Option<&EntityId> {
        self.main.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn supplementary(&self) -> &[EntityId] {
        &self.supplementary
    }

    #[must_use]
    pub fn is_selected(&self, id: &EntityId) -> bool {
        self.main.as_ref() == Some(id) || self.supplementary.contains(id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main.is_none() && self.supplementary.is_empty()
    }

    /// Selected ids, main plan first
    #[must_use]
    pub fn ids(&self) -> Vec<EntityId> {
        self.main
            .iter()
            .chain(self.supplementary.iter())
            .cloned()
            .collect()
    }

    /// Selected plans looked up in `plans`, main first
    ///
    /// # Errors
    /// - [`WizardError::MissingMainPlan`] when no main plan is selected
    /// - [`WizardError::UnknownPlan`] when a selected id is not offered
    /// - [`WizardError::InactivePlan`] when a selected plan was deactivated
    pub fn resolve<'a>(&self, plans: &'a [CarePlan]) -> WizardResult<Vec<&'a CarePlan>> {
        if self.main.is_none() {
            return Err(WizardError::MissingMainPlan);
        }
        self.ids()
            .into_iter()
            .map(|id| {
                let plan = plans
                    .iter()
                    .find(|p| p.id == id)
                    .ok_or_else(|| WizardError::UnknownPlan(id.clone()))?;
                if plan.is_active {
                    Ok(plan)
                } else {
                    Err(WizardError::InactivePlan(plan.plan_name.clone()))
                }
            })
            .collect()
    }

    /// Monthly price of the selected plans that are still offered
    #[must_use]
    pub fn monthly_total(&self, plans: &[CarePlan]) -> f64 {
        plans
            .iter()
            .filter(|p| p.is_active && self.is_selected(&p.id))
            .map(|p| p.monthly_price)
            .sum()
    }

    /// Drop selections that are no longer offered, returning whether any were
    ///
    /// A selection is kept only while its plan is active and still in the
    /// category it was selected under.
    pub fn retain_offered(&mut self, plans: &[CarePlan]) -> bool {
        let offered = |id: &EntityId, category: PlanCategory| {
            plans
                .iter()
                .any(|p| &p.id == id && p.is_active && p.category == category)
        };
        let before = self.ids().len();

        if self.main.as_ref().is_some_and(|id| !offered(id, PlanCategory::Main)) {
            self.main = None;
        }
        self.supplementary
            .retain(|id| offered(id, PlanCategory::Supplementary));

        self.ids().len() != before
    }
}

/// Active plans for display: main plans first, then supplementary, each in
/// input order
#[must_use]
pub fn offered_plans(plans: &[CarePlan]) -> Vec<&CarePlan> {
    let active = || plans.iter().filter(|p| p.is_active);
    active()
        .filter(|p| p.category == PlanCategory::Main)
        .chain(active().filter(|p| p.category == PlanCategory::Supplementary))
        .collect()
}
