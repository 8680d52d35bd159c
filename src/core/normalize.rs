//! Read-time normalization of stored records.
//!
//! The on-disk schema has drifted over time without a version field:
//! older records carry `mood` instead of `dayRating`, and a single
//! `energy` integer instead of the `energyLogs` list. Normalization maps
//! any of those shapes onto the canonical entry. It is pure, total and
//! idempotent; unknown or missing fields degrade to defaults.

use crate::models::entry::{DailyEntry, EnergyLog};
use crate::models::raw::RawEntry;

pub fn normalize(raw: RawEntry) -> DailyEntry {
    let created_at = raw.created_at.unwrap_or_default();

    let day_rating = raw.day_rating.or(raw.mood).unwrap_or(3);

    let energy_logs = match raw.energy_logs {
        Some(logs) => logs,
        None => match raw.energy {
            Some(level) => vec![EnergyLog {
                level,
                timestamp: created_at.clone(),
            }],
            None => Vec::new(),
        },
    };

    DailyEntry {
        id: raw.id.unwrap_or_default(),
        date: raw.date.unwrap_or_default(),
        day_rating,
        energy_logs,
        accomplishments: raw.accomplishments,
        challenges: raw.challenges,
        notes: raw.notes,
        created_at,
        updated_at: raw.updated_at.unwrap_or_default(),
    }
}
