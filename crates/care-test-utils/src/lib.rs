//! Testing utilities for the carehome workspace
//!
//! Shared fixtures: a small facility snapshot exercising every bed linkage
//! the resolver supports.

#![allow(missing_docs)]

use care_model::{
    Bed, BedStatus, CarePlan, FacilitySnapshot, Gender, PlanCategory, Resident, Room, RoomStatus,
};

/// JSON as the backend serves it, with mixed id types and casing.
pub const SAMPLE_SNAPSHOT_JSON: &str = r#"{
    "residents": [
        { "id": 1, "name": "Ada Byron", "gender": "Female", "age": 81 },
        { "id": 2, "name": "Alan Brooks", "gender": "MALE", "age": 77 },
        { "id": "3", "name": "Sam Reyes", "gender": null }
    ],
    "rooms": [
        { "id": 10, "room_number": 101, "room_type": "single", "gender": "female", "status": "available" },
        { "id": 11, "room_number": "102", "room_type": "single", "gender": "male", "status": "Available" },
        { "id": 20, "room_number": "201", "room_type": "double", "status": "available" },
        { "id": 21, "room_number": "202", "room_type": "double", "gender": "Female", "status": "available" },
        { "id": 22, "room_number": "203", "room_type": "double", "status": "unavailable" },
        { "id": 30, "room_number": "305", "room_type": "quad", "status": "available",
          "bed_info": { "total_beds": 4, "available_beds": 2 } }
    ],
    "beds": [
        { "id": 100, "bed_number": 1, "room_id": 10, "status": "available" },
        { "id": 110, "bed_number": 1, "room_id": 11, "status": "occupied" },
        { "id": 200, "bed_number": "201-A", "room_id": 20, "status": "occupied" },
        { "id": 201, "bed_number": "201-B", "room_id": 20, "status": "available" },
        { "id": 210, "bed_number": 1, "room_number": "202", "status": "available" },
        { "id": 211, "bed_number": 2, "room_number": "202", "status": "available", "bed_name": "Window" },
        { "id": 220, "bed_number": 1, "room_id": 22, "status": "available" }
    ],
    "care_plans": [
        { "id": 1000, "plan_name": "Standard Care", "category": "main", "monthly_price": 1800,
          "services_included": ["Meals", "Housekeeping"] },
        { "id": 1001, "plan_name": "Memory Care", "category": "main", "monthly_price": "2600.00" },
        { "id": 1002, "plan_name": "Physiotherapy", "category": "supplementary", "monthly_price": 250 },
        { "id": 1003, "plan_name": "Legacy Plus", "category": "main", "monthly_price": 1500, "is_active": false },
        { "id": 1004, "plan_name": "Hairdressing", "category": "supplementary", "monthly_price": 40.5 }
    ],
    "assignments": [
        { "id": 5000, "resident_id": 2, "care_plan_ids": [1000], "room_id": 11, "bed_id": 110,
          "start_date": "2024-01-01", "status": "active" }
    ]
}"#;

pub fn sample_snapshot() -> FacilitySnapshot {
    FacilitySnapshot::from_json_str(SAMPLE_SNAPSHOT_JSON).unwrap()
}

pub fn female_resident() -> Resident {
    Resident::new(1, "Ada Byron", Some(Gender::Female))
}

pub fn male_resident() -> Resident {
    Resident::new(2, "Alan Brooks", Some(Gender::Male))
}

pub fn room(id: i64, number: &str, room_type: &str) -> Room {
    Room::new(id, number, room_type)
}

pub fn closed_room(id: i64, number: &str, room_type: &str) -> Room {
    Room::new(id, number, room_type).with_status(RoomStatus::Unavailable)
}

pub fn bed(id: i64, room_id: i64, number: u32) -> Bed {
    Bed::new(id, room_id, number)
}

pub fn occupied_bed(id: i64, room_id: i64, number: u32) -> Bed {
    Bed::new(id, room_id, number).with_status(BedStatus::Occupied)
}

pub fn main_plan(id: i64, name: &str, price: f64) -> CarePlan {
    CarePlan::new(id, name, PlanCategory::Main, price)
}

pub fn supplementary_plan(id: i64, name: &str, price: f64) -> CarePlan {
    CarePlan::new(id, name, PlanCategory::Supplementary, price)
}
