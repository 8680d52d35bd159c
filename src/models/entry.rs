use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One point-in-time self-reported energy sample.
/// Immutable once created, except by removal from its parent entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyLog {
    pub level: u8,         // 1-5
    pub timestamp: String, // RFC-3339 instant
}

/// One journaled day, keyed by its calendar date.
///
/// Serialized with the camelCase field names the on-disk store and the
/// export document use, so stored data round-trips byte-compatibly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntry {
    pub id: String,
    pub date: String, // "YYYY-MM-DD", unique key
    pub day_rating: u8, // 1-5
    pub energy_logs: Vec<EnergyLog>,
    pub accomplishments: Vec<String>,
    pub challenges: Vec<String>,
    pub notes: String,
    pub created_at: String,
    pub updated_at: String,
}

impl DailyEntry {
    pub fn date_naive(&self) -> Option<NaiveDate> {
        crate::utils::date::parse_date(&self.date)
    }

    /// Nearest-integer average of the entry's energy samples, if any.
    pub fn average_energy_level(&self) -> Option<u8> {
        if self.energy_logs.is_empty() {
            return None;
        }
        let sum: u32 = self.energy_logs.iter().map(|l| l.level as u32).sum();
        let avg = sum as f64 / self.energy_logs.len() as f64;
        Some(avg.round() as u8)
    }
}
