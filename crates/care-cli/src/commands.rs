//! Subcommand execution
//!
//! Every command renders to a `String`; `main` decides where it goes.

use crate::config::CliConfig;
use anyhow::{bail, Context, Result};
use care_eligibility::{EligibilityResolver, Inventory, RoomTypeAvailability};
use care_model::{EntityId, FacilitySnapshot, Gender, PlanCategory};
use care_wizard::plans::offered_plans;
use care_wizard::{BedOption, RegistrationWizard, RoomOption};
use chrono::NaiveDate;
use clap::ArgMatches;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned text lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    fn from_matches(matches: &ArgMatches) -> Self {
        if matches.get_flag("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Run the selected subcommand
///
/// # Errors
/// Unreadable snapshots, unknown ids, invalid configuration and rejected
/// registrations, each with context naming what was being done.
pub fn execute(matches: &ArgMatches, config: &CliConfig) -> Result<String> {
    let resolver = config
        .resolver()
        .context("building eligibility resolver")?;

    let Some((name, args)) = matches.subcommand() else {
        bail!("no subcommand given");
    };
    let format = OutputFormat::from_matches(args);
    let snapshot = load_snapshot(args)?;
    tracing::debug!(
        command = name,
        rooms = snapshot.rooms.len(),
        beds = snapshot.beds.len(),
        "snapshot loaded"
    );

    match name {
        "rooms" => {
            let room_type = required(args, "room-type")?;
            let gender = occupant_gender(args, &snapshot)?;
            rooms(&snapshot, &resolver, room_type, gender.as_ref(), format)
        }
        "beds" => {
            let room_id = EntityId::from(required(args, "room")?);
            let gender = occupant_gender(args, &snapshot)?;
            beds(&snapshot, &resolver, &room_id, gender.as_ref(), format)
        }
        "room-types" => {
            let gender = occupant_gender(args, &snapshot)?;
            room_types(&snapshot, &resolver, gender.as_ref(), format)
        }
        "plans" => plans(&snapshot, format),
        "register" => register(&snapshot, &resolver, &Registration::from_matches(args)?),
        other => bail!("unknown command '{other}'"),
    }
}

fn load_snapshot(args: &ArgMatches) -> Result<FacilitySnapshot> {
    let path = args
        .get_one::<PathBuf>("snapshot")
        .context("--snapshot is required")?;
    FacilitySnapshot::from_json_file(path)
        .with_context(|| format!("loading snapshot {}", path.display()))
}

fn required<'m>(args: &'m ArgMatches, name: &str) -> Result<&'m str> {
    args.get_one::<String>(name)
        .map(String::as_str)
        .with_context(|| format!("--{name} is required"))
}

/// Gender used for eligibility: the resident's, or `--gender`
fn occupant_gender(args: &ArgMatches, snapshot: &FacilitySnapshot) -> Result<Option<Gender>> {
    if let Some(raw) = args.get_one::<String>("resident") {
        let id = EntityId::from(raw.as_str());
        let resident = snapshot
            .resident(&id)
            .with_context(|| format!("unknown resident {id}"))?;
        return Ok(resident.gender.clone());
    }
    Ok(args
        .get_one::<Option<Gender>>("gender")
        .cloned()
        .flatten())
}

fn render<T: Serialize>(format: OutputFormat, value: &T, text: impl FnOnce() -> String) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(value).context("serializing output")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => Ok(text()),
    }
}

/// Eligible rooms of `room_type`
///
/// # Errors
/// Only JSON serialization failures.
pub fn rooms(
    snapshot: &FacilitySnapshot,
    resolver: &EligibilityResolver,
    room_type: &str,
    gender: Option<&Gender>,
    format: OutputFormat,
) -> Result<String> {
    let inventory = Inventory::from_snapshot(snapshot);
    let options: Vec<RoomOption> = resolver
        .eligible_rooms(&inventory, room_type, gender)
        .into_iter()
        .map(|room| RoomOption::new(room, resolver.beds_in(&inventory, room, gender).len()))
        .collect();

    render(format, &options, || {
        if options.is_empty() {
            return format!("no eligible {room_type} rooms\n");
        }
        let mut out = String::new();
        for room in &options {
            let floor = room
                .floor
                .map(|f| format!(", floor {f}"))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "{:<8} {} ({} free{floor})",
                room.room_number, room.room_id, room.available_beds
            );
        }
        out
    })
}

/// Eligible beds of one room
///
/// # Errors
/// Only JSON serialization failures; an unknown room lists no beds.
pub fn beds(
    snapshot: &FacilitySnapshot,
    resolver: &EligibilityResolver,
    room_id: &EntityId,
    gender: Option<&Gender>,
    format: OutputFormat,
) -> Result<String> {
    let inventory = Inventory::from_snapshot(snapshot);
    let room_number = inventory
        .room(room_id)
        .map(|room| room.room_number.as_str())
        .unwrap_or_default();
    let options: Vec<BedOption> = resolver
        .beds_for_room(&inventory, room_id, gender)
        .iter()
        .map(|bed| BedOption::new(bed, room_number))
        .collect();

    render(format, &options, || {
        if options.is_empty() {
            return format!("no eligible beds in room {room_id}\n");
        }
        let mut out = String::new();
        for bed in &options {
            let marker = if bed.synthesized { " (from room summary)" } else { "" };
            let _ = writeln!(out, "{:<8} {}{marker}", bed.label, bed.bed_id);
        }
        out
    })
}

/// Room types with eligible room and bed counts
///
/// # Errors
/// Only JSON serialization failures.
pub fn room_types(
    snapshot: &FacilitySnapshot,
    resolver: &EligibilityResolver,
    gender: Option<&Gender>,
    format: OutputFormat,
) -> Result<String> {
    let summary: Vec<RoomTypeAvailability> =
        resolver.available_room_types(&Inventory::from_snapshot(snapshot), gender);

    render(format, &summary, || {
        let mut out = String::new();
        for entry in &summary {
            let _ = writeln!(
                out,
                "{:<12} {} rooms, {} beds",
                entry.room_type, entry.eligible_rooms, entry.eligible_beds
            );
        }
        out
    })
}

/// Care plans offered for selection
///
/// # Errors
/// Only JSON serialization failures.
pub fn plans(snapshot: &FacilitySnapshot, format: OutputFormat) -> Result<String> {
    let offered = offered_plans(&snapshot.care_plans);

    render(format, &offered, || {
        let mut out = String::new();
        for plan in &offered {
            let category = match plan.category {
                PlanCategory::Main => "main",
                PlanCategory::Supplementary => "extra",
            };
            let _ = writeln!(
                out,
                "{:<6} {:<6} {:>10.2}  {}",
                plan.id, category, plan.monthly_price, plan.plan_name
            );
        }
        out
    })
}

/// Inputs of the `register` command
#[derive(Debug, Clone)]
pub struct Registration {
    /// Resident id
    pub resident: EntityId,
    /// Room type code
    pub room_type: String,
    /// Room id
    pub room: EntityId,
    /// Bed id
    pub bed: EntityId,
    /// Care plan ids, any order
    pub plans: Vec<EntityId>,
    /// Placement start
    pub start: NaiveDate,
    /// Placement end
    pub end: Option<NaiveDate>,
}

impl Registration {
    fn from_matches(args: &ArgMatches) -> Result<Self> {
        Ok(Self {
            resident: required(args, "resident")?.into(),
            room_type: required(args, "room-type")?.to_string(),
            room: required(args, "room")?.into(),
            bed: required(args, "bed")?.into(),
            plans: args
                .get_many::<String>("plan")
                .into_iter()
                .flatten()
                .map(|id| EntityId::from(id.as_str()))
                .collect(),
            start: *args
                .get_one::<NaiveDate>("start")
                .context("--start is required")?,
            end: args.get_one::<NaiveDate>("end").copied(),
        })
    }
}

/// Walk the registration wizard and print the request JSON
///
/// # Errors
/// The first rejected step, with context.
pub fn register(
    snapshot: &FacilitySnapshot,
    resolver: &EligibilityResolver,
    registration: &Registration,
) -> Result<String> {
    let mut wizard = RegistrationWizard::new(snapshot, resolver);

    let resident = wizard
        .select_resident(&registration.resident)
        .context("selecting resident")?;
    if let Some(existing) = wizard.open_assignment() {
        tracing::warn!(
            resident = %resident.id,
            assignment = %existing.id,
            "resident already holds an open assignment"
        );
    }

    wizard
        .select_room_type(&registration.room_type)
        .context("selecting room type")?;
    wizard
        .select_room(&registration.room)
        .context("selecting room")?;
    wizard
        .select_bed(&registration.bed)
        .context("selecting bed")?;
    for plan in &registration.plans {
        let selected = wizard
            .toggle_care_plan(plan)
            .with_context(|| format!("selecting care plan {plan}"))?;
        if !selected {
            bail!("care plan {plan} given more than once");
        }
    }
    wizard
        .set_period(registration.start, registration.end)
        .context("setting placement period")?;

    let request = wizard.submit().context("submitting registration")?;
    let mut json = serde_json::to_string_pretty(&request).context("serializing request")?;
    json.push('\n');
    Ok(json)
}
