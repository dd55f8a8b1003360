//! Argument definitions

use care_model::Gender;
use chrono::NaiveDate;
use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

/// Build the `carehome` command
#[must_use]
pub fn command() -> Command {
    Command::new("carehome")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Room, bed and care plan eligibility for resident registration")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file (missing file uses defaults)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Output as JSON"),
        )
        .subcommand(
            Command::new("rooms")
                .about("List eligible rooms of a room type")
                .arg(snapshot_arg())
                .arg(
                    Arg::new("room-type")
                        .long("room-type")
                        .required(true)
                        .help("Room type code, e.g. single or double"),
                )
                .args(occupant_args()),
        )
        .subcommand(
            Command::new("beds")
                .about("List eligible beds of a room")
                .arg(snapshot_arg())
                .arg(Arg::new("room").long("room").required(true).help("Room id"))
                .args(occupant_args()),
        )
        .subcommand(
            Command::new("room-types")
                .about("Summarise eligible rooms and beds per room type")
                .arg(snapshot_arg())
                .args(occupant_args()),
        )
        .subcommand(
            Command::new("plans")
                .about("List care plans offered for selection")
                .arg(snapshot_arg()),
        )
        .subcommand(
            Command::new("register")
                .about("Validate a registration and print the assignment request")
                .arg(snapshot_arg())
                .arg(
                    Arg::new("resident")
                        .long("resident")
                        .required(true)
                        .help("Resident id"),
                )
                .arg(
                    Arg::new("room-type")
                        .long("room-type")
                        .required(true)
                        .help("Room type code"),
                )
                .arg(Arg::new("room").long("room").required(true).help("Room id"))
                .arg(Arg::new("bed").long("bed").required(true).help("Bed id"))
                .arg(
                    Arg::new("plan")
                        .long("plan")
                        .required(true)
                        .action(ArgAction::Append)
                        .help("Care plan id (repeat for supplementary plans)"),
                )
                .arg(
                    Arg::new("start")
                        .long("start")
                        .required(true)
                        .value_parser(parse_date)
                        .help("Start date (YYYY-MM-DD)"),
                )
                .arg(
                    Arg::new("end")
                        .long("end")
                        .value_parser(parse_date)
                        .help("End date (YYYY-MM-DD), open-ended when omitted"),
                ),
        )
}

fn snapshot_arg() -> Arg {
    Arg::new("snapshot")
        .long("snapshot")
        .short('s')
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Facility snapshot JSON file")
}

fn occupant_args() -> [Arg; 2] {
    [
        Arg::new("resident")
            .long("resident")
            .conflicts_with("gender")
            .help("Resident id whose gender applies"),
        Arg::new("gender")
            .long("gender")
            .value_parser(parse_gender)
            .help("Occupant gender (male, female, ...; 'any' for none)"),
    ]
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("expected YYYY-MM-DD: {err}"))
}

// `None` inside the value means "no gender constraint"
fn parse_gender(raw: &str) -> Result<Option<Gender>, String> {
    Ok(Gender::parse(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn resident_and_gender_conflict() {
        let result = command().try_get_matches_from([
            "carehome", "rooms", "-s", "f.json", "--room-type", "single", "--resident", "1",
            "--gender", "male",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn register_collects_plans_and_dates() {
        let matches = command()
            .try_get_matches_from([
                "carehome", "register", "-s", "f.json", "--resident", "1", "--room-type",
                "double", "--room", "21", "--bed", "211", "--plan", "1000", "--plan", "1002",
                "--start", "2025-03-01",
            ])
            .unwrap();
        let (name, args) = matches.subcommand().unwrap();
        assert_eq!(name, "register");
        let plans: Vec<&String> = args.get_many("plan").unwrap().collect();
        assert_eq!(plans, ["1000", "1002"]);
        assert_eq!(
            args.get_one::<NaiveDate>("start"),
            NaiveDate::from_ymd_opt(2025, 3, 1).as_ref()
        );
    }

    #[test]
    fn bad_date_is_rejected() {
        let result = command().try_get_matches_from([
            "carehome", "register", "-s", "f.json", "--resident", "1", "--room-type", "double",
            "--room", "21", "--bed", "211", "--plan", "1000", "--start", "01/03/2025",
        ]);
        assert!(result.is_err());
    }
}
