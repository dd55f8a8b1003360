//! # Carehome CLI
//!
//! Runs the eligibility resolver and the registration wizard over JSON
//! snapshots of the facility backend.
//!
//! ```text
//! carehome rooms --snapshot facility.json --room-type double --resident 12
//! carehome beds --snapshot facility.json --room 21 --gender female --json
//! carehome register --snapshot facility.json --resident 12 --room-type double \
//!     --room 21 --bed 211 --plan 1000 --plan 1002 --start 2025-03-01
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

pub use cli::command;
pub use commands::{execute, OutputFormat};
pub use config::{CliConfig, CliConfigError, LogFormat};
