//! Stored-record shape as it may appear on disk.
//!
//! Older versions of the store wrote `mood` instead of `dayRating` and a
//! single `energy` integer instead of the `energyLogs` list. Every field is
//! optional or defaulted so any plausibly-shaped record decodes; the
//! normalizer in `core::normalize` maps this to the canonical entry.

use crate::models::entry::EnergyLog;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawEntry {
    pub id: Option<String>,
    pub date: Option<String>,

    // current shape
    pub day_rating: Option<u8>,
    pub energy_logs: Option<Vec<EnergyLog>>,

    // legacy shape
    pub mood: Option<u8>,
    pub energy: Option<u8>,

    pub accomplishments: Vec<String>,
    pub challenges: Vec<String>,
    pub notes: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
