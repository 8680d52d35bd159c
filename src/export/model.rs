use crate::models::entry::DailyEntry;
use crate::models::labels::day_rating_label;
use serde::Serialize;

/// Flat per-entry row for CSV export.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub date: String,
    pub day_rating: u8,
    pub day_rating_label: String,
    pub energy_samples: usize,
    pub avg_energy: String,
    pub accomplishments: String,
    pub challenges: String,
    pub notes: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&DailyEntry> for EntryExport {
    fn from(e: &DailyEntry) -> Self {
        Self {
            date: e.date.clone(),
            day_rating: e.day_rating,
            day_rating_label: day_rating_label(e.day_rating).to_string(),
            energy_samples: e.energy_logs.len(),
            avg_energy: e
                .average_energy_level()
                .map(|l| l.to_string())
                .unwrap_or_default(),
            accomplishments: e.accomplishments.join("; "),
            challenges: e.challenges.join("; "),
            notes: e.notes.clone(),
            created_at: e.created_at.clone(),
            updated_at: e.updated_at.clone(),
        }
    }
}
