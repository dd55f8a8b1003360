//! Care Model
//!
//! Read-only snapshots of the entities served by the facility backend.
//!
//! # Overview
//!
//! - [`Resident`]: the person a placement is being resolved for
//! - [`Room`] / [`Bed`]: physical inventory, with the optional [`BedInfo`] summary
//! - [`CarePlan`] / [`CarePlanAssignment`]: priced service bundles and their links to residents
//! - [`FacilitySnapshot`]: one fetch of all the collections above
//!
//! Decoding is lenient: identifiers and room numbers may arrive as numbers or
//! strings, enumerations are matched case-insensitively, and `null` collections
//! decode as empty.
//!
//! # Example
//!
//! ```rust
//! use care_model::{FacilitySnapshot, RoomStatus};
//!
//! let snapshot = FacilitySnapshot::from_json_str(
//!     r#"{ "rooms": [{ "id": 1, "room_number": 101, "room_type": "single", "status": "Available" }] }"#,
//! ).unwrap();
//!
//! assert_eq!(snapshot.rooms[0].room_number, "101");
//! assert_eq!(snapshot.rooms[0].status, RoomStatus::Available);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod bed;
mod de;
mod error;
mod gender;
mod id;
mod plan;
mod resident;
mod room;
mod snapshot;

pub use bed::{Bed, BedNumber, BedStatus};
pub use error::{ModelError, ModelResult};
pub use gender::Gender;
pub use id::EntityId;
pub use plan::{AssignmentStatus, CarePlan, CarePlanAssignment, PlanCategory};
pub use resident::Resident;
pub use room::{BedInfo, Room, RoomStatus};
pub use snapshot::FacilitySnapshot;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
