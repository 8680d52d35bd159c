use crate::db::pool::DbPool;
use crate::db::repository;
use crate::errors::AppResult;
use crate::models::entry::{DailyEntry, EnergyLog};
use crate::ui::messages::success;
use crate::utils::date::format_date;
use crate::utils::time::now_rfc3339;
use chrono::{Local, NaiveDate, NaiveTime, TimeZone};

/// One `--energy` argument, already validated at the CLI boundary.
#[derive(Debug, Clone, Copy)]
pub struct EnergySpec {
    pub level: u8,
    pub time: Option<NaiveTime>,
}

/// High-level business logic for the `add` command.
pub struct SaveLogic;

impl SaveLogic {
    /// Create or update the entry for `date`.
    ///
    /// A fresh entry starts from the neutral rating; provided fields
    /// replace the rating/notes and append to the energy and item lists.
    pub fn apply(
        pool: &DbPool,
        date: NaiveDate,
        rating: Option<u8>,
        energy: &[EnergySpec],
        accomplishments: &[String],
        challenges: &[String],
        notes: Option<&str>,
    ) -> AppResult<DailyEntry> {
        let date_str = format_date(date);
        let existing = repository::find_by_date(pool, &date_str)?;
        let is_new = existing.is_none();

        let mut entry = existing.unwrap_or_else(|| DailyEntry {
            id: String::new(), // filled by the repository
            date: date_str.clone(),
            day_rating: 3,
            energy_logs: Vec::new(),
            accomplishments: Vec::new(),
            challenges: Vec::new(),
            notes: String::new(),
            created_at: now_rfc3339(),
            updated_at: now_rfc3339(),
        });

        if let Some(r) = rating {
            entry.day_rating = r;
        }

        for spec in energy {
            entry.energy_logs.push(EnergyLog {
                level: spec.level,
                timestamp: energy_timestamp(date, spec.time),
            });
        }

        entry.accomplishments.extend(accomplishments.iter().cloned());
        entry.challenges.extend(challenges.iter().cloned());

        if let Some(n) = notes {
            entry.notes = n.to_string();
        }

        let saved = repository::save_entry(pool, entry)?;

        if is_new {
            success(format!("Entry created for {}.", saved.date));
        } else {
            success(format!("Entry updated for {}.", saved.date));
        }

        Ok(saved)
    }
}

/// Timestamp for an energy sample: the given wall time on `date`, or the
/// current instant when no time was passed and `date` is today. Logging
/// energy for another day without a time lands on midday.
fn energy_timestamp(date: NaiveDate, time: Option<NaiveTime>) -> String {
    let today = crate::utils::date::today();

    let time = match time {
        Some(t) => t,
        None if date == today => return now_rfc3339(),
        None => NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default(),
    };

    match Local.from_local_datetime(&date.and_time(time)).earliest() {
        Some(dt) => dt.to_rfc3339(),
        // skipped wall-clock times around a DST jump: keep the naive form
        None => format!("{}T{}:00", format_date(date), time.format("%H:%M")),
    }
}
