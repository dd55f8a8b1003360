//! Display labels for beds

use care_model::Bed;

/// Display label for a bed
///
/// In order of preference:
/// 1. a composite `bed_number` such as `"101-A"`, unchanged
/// 2. `bed_name`
/// 3. `"{room digits}-{letter}"` from the room number and a numeric
///    `bed_number` (`2` in room `"305"` becomes `"305-B"`)
/// 4. the raw `bed_number`
/// 5. `"Bed {id}"`
#[must_use]
pub fn format_bed_label(bed: &Bed, room_number: Option<&str>) -> String {
    if let Some(number) = bed.bed_number.as_ref().filter(|n| n.is_composite()) {
        return number.to_string();
    }

    if let Some(name) = bed.bed_name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        return name.to_string();
    }

    let room_number = room_number
        .or(bed.room_number.as_deref())
        .map(str::trim)
        .filter(|n| !n.is_empty());
    let ordinal = bed.bed_number.as_ref().and_then(|n| n.as_numeric());

    if let (Some(room_number), Some(letter)) = (room_number, ordinal.and_then(bed_letter)) {
        let digits: String = room_number.chars().filter(char::is_ascii_digit).collect();
        let prefix = if digits.is_empty() { room_number } else { digits.as_str() };
        return format!("{prefix}-{letter}");
    }

    match &bed.bed_number {
        Some(number) if !number.to_string().trim().is_empty() => number.to_string(),
        _ => format!("Bed {}", bed.id),
    }
}

/// Letter for a bed ordinal: `1 → A`, `26 → Z`, `27 → AA`
///
/// `None` for `0`.
#[must_use]
pub fn bed_letter(ordinal: u32) -> Option<String> {
    if ordinal == 0 {
        return None;
    }
    let mut n = ordinal;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    Some(letters.iter().rev().collect())
}
