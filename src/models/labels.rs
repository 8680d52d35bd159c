//! Qualitative labels for the 1..=5 rating scales.

pub const DAY_RATING_LABELS: [&str; 5] = ["Terrible", "Bad", "Okay", "Good", "Amazing"];

pub const ENERGY_LABELS: [&str; 5] = [
    "Exhausted",
    "Tired",
    "Normal",
    "Energized",
    "Very Energized",
];

/// Label for a 1-based day rating; "-" when out of range.
pub fn day_rating_label(rating: u8) -> &'static str {
    DAY_RATING_LABELS
        .get(rating.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("-")
}

/// Label for a 1-based energy level; "-" when out of range.
pub fn energy_label(level: u8) -> &'static str {
    ENERGY_LABELS
        .get(level.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("-")
}
