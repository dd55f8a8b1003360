//! Care Wizard - registration view-model
//!
//! Sequences the service registration flow:
//! - pick a resident
//! - pick a room type, then an eligible room, then an eligible bed
//! - pick one main care plan and any supplementary plans
//! - set the placement period and submit
//!
//! All page state lives in [`RegistrationWizard`]; derived option lists are
//! recomputed from the borrowed snapshot on every call, so a re-fetched
//! snapshot only needs [`RegistrationWizard::refresh`].
//!
//! # Example
//!
//! ```rust,ignore
//! use care_eligibility::EligibilityResolver;
//! use care_wizard::RegistrationWizard;
//!
//! let resolver = EligibilityResolver::new();
//! let mut wizard = RegistrationWizard::new(&snapshot, &resolver);
//!
//! wizard.select_resident(&"1".into())?;
//! wizard.select_room_type("double")?;
//! let rooms = wizard.room_options();
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod error;
pub mod options;
pub mod plans;
pub mod request;
pub mod step;
pub mod wizard;

pub use error::{WizardError, WizardResult};
pub use options::{BedOption, RoomOption};
pub use plans::PlanSelection;
pub use request::AssignmentRequest;
pub use step::WizardStep;
pub use wizard::{RegistrationWizard, WizardState};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
