//! Care Eligibility
//!
//! Resolves which rooms and beds a resident can be placed in.
//!
//! # Core Concepts
//!
//! - [`gender_compatible`]: the single gender predicate used at room and bed level
//! - [`BedResolutionStrategy`]: one way of finding a room's beds
//! - [`StrategyChain`]: ordered strategies, first non-empty answer wins
//! - [`EligibilityResolver`]: `eligible_rooms` / `beds_for_room` over an [`Inventory`]
//! - [`format_bed_label`]: display label for a bed
//!
//! Every operation is pure and total: malformed or missing input yields an
//! empty list or a fallback label, never an error.
//!
//! # Example
//!
//! ```rust
//! use care_eligibility::{EligibilityResolver, Inventory};
//! use care_model::{Bed, BedStatus, Gender, Room};
//!
//! let rooms = vec![
//!     Room::new(1, "101", "single").with_gender(Gender::Female),
//!     Room::new(2, "102", "single"),
//! ];
//! let beds = vec![
//!     Bed::new(10, 1, 1u32),
//!     Bed::new(20, 2, 1u32).with_status(BedStatus::Occupied),
//! ];
//!
//! let resolver = EligibilityResolver::new();
//! let inventory = Inventory::new(&rooms, &beds);
//!
//! let eligible = resolver.eligible_rooms(&inventory, "single", Some(&Gender::Female));
//! assert_eq!(eligible.len(), 1);
//! assert_eq!(eligible[0].room_number, "101");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod by_room_id;
mod by_room_number;
mod chain;
mod config;
mod gender;
mod inventory;
mod label;
mod resolver;
mod strategy;
mod summary;

pub use by_room_id::ByRoomIdStrategy;
pub use by_room_number::ByRoomNumberStrategy;
pub use chain::StrategyChain;
pub use config::{ConfigError, ResolverConfig};
pub use gender::{gender_compatible, room_is_eligible};
pub use inventory::Inventory;
pub use label::{bed_letter, format_bed_label};
pub use resolver::{EligibilityResolver, RoomTypeAvailability};
pub use strategy::{BedResolutionStrategy, StrategyKind};
pub use summary::{BedInfoSummaryStrategy, MAX_SYNTHESIZED_BEDS};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
