//! Inventories where room ids and room numbers overlap, and rooms whose
//! bed summary is implausible.

use care_eligibility::{EligibilityResolver, Inventory, MAX_SYNTHESIZED_BEDS};
use care_model::{EntityId, Gender};
use care_test_utils::{bed, closed_room, female_resident, male_resident, occupied_bed, room};
use pretty_assertions::assert_eq;

fn bed_ids(beds: &[care_model::Bed]) -> Vec<String> {
    beds.iter().map(|b| b.id.to_string()).collect()
}

#[test]
fn bed_of_other_room_is_not_borrowed_through_number() {
    // room 1 is numbered "2", room 2 is a male room with a free bed
    let rooms = vec![
        room(1, "2", "double"),
        room(2, "7", "double").with_gender(Gender::Male),
    ];
    let beds = vec![bed(900, 2, 1)];
    let inventory = Inventory::new(&rooms, &beds);
    let resolver = EligibilityResolver::new();
    let female = female_resident();

    let eligible = resolver.eligible_rooms(&inventory, "double", female.gender.as_ref());
    assert!(eligible.is_empty());
    assert!(resolver
        .beds_for_room(&inventory, &EntityId::from(1), female.gender.as_ref())
        .is_empty());

    let male = male_resident();
    let eligible: Vec<_> = resolver
        .eligible_rooms(&inventory, "double", male.gender.as_ref())
        .iter()
        .map(|r| r.id.to_string())
        .collect();
    assert_eq!(eligible, vec!["2"]);
    assert_eq!(
        bed_ids(&resolver.beds_for_room(&inventory, &EntityId::from(2), male.gender.as_ref())),
        vec!["900"]
    );
}

#[test]
fn closed_room_and_occupied_beds_stay_hidden() {
    let rooms = vec![
        closed_room(1, "101", "single"),
        room(2, "102", "single"),
        room(3, "103", "single"),
    ];
    let beds = vec![bed(10, 1, 1), occupied_bed(20, 2, 1), bed(30, 3, 1)];
    let inventory = Inventory::new(&rooms, &beds);
    let resolver = EligibilityResolver::new();

    let eligible: Vec<_> = resolver
        .eligible_rooms(&inventory, "single", female_resident().gender.as_ref())
        .iter()
        .map(|r| r.room_number.clone())
        .collect();
    assert_eq!(eligible, vec!["103"]);
}

#[test]
fn implausible_summary_yields_no_beds() {
    let rooms = vec![
        room(1, "305", "ward").with_bed_info(u32::MAX, 1),
        room(2, "306", "ward").with_bed_info(MAX_SYNTHESIZED_BEDS + 1, 3),
        room(3, "307", "ward").with_bed_info(4, 9),
    ];
    let inventory = Inventory::new(&rooms, &[]);
    let resolver = EligibilityResolver::new();

    assert!(resolver
        .beds_for_room(&inventory, &EntityId::from(1), None)
        .is_empty());
    let eligible: Vec<_> = resolver
        .eligible_rooms(&inventory, "ward", None)
        .iter()
        .map(|r| r.room_number.clone())
        .collect();
    assert_eq!(eligible, vec!["307"]);

    let summary = resolver.available_room_types(&inventory, None);
    assert_eq!(summary[0].eligible_rooms, 1);
    assert_eq!(summary[0].eligible_beds, 4);
}
