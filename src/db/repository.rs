//! CRUD access over the canonical entry collection, keyed by calendar date.
//!
//! Every mutating operation is one read-decode-mutate-encode-write cycle
//! against the entries slot (whole-collection rewrite, no partial update).
//! Two concurrent writers race with last-write-wins; that is accepted.

use crate::core::normalize::normalize;
use crate::db::pool::DbPool;
use crate::db::slots::{self, ENTRIES_KEY, SETTINGS_KEY};
use crate::errors::AppResult;
use crate::models::entry::DailyEntry;
use crate::models::raw::RawEntry;
use crate::models::settings::Settings;
use crate::ui::messages::warning;
use crate::utils::time::now_rfc3339;

/// All entries, normalized. No ordering guarantee; each consumer sorts as
/// needed. A malformed slot degrades to an empty collection instead of
/// failing the whole application.
pub fn load_entries(pool: &DbPool) -> AppResult<Vec<DailyEntry>> {
    let Some(data) = slots::get_slot(&pool.conn, ENTRIES_KEY)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str::<Vec<RawEntry>>(&data) {
        Ok(raw) => Ok(raw.into_iter().map(normalize).collect()),
        Err(e) => {
            warning(format!("Stored entries are unreadable ({e}); starting empty."));
            Ok(Vec::new())
        }
    }
}

/// Exact-match lookup by date string.
pub fn find_by_date(pool: &DbPool, date: &str) -> AppResult<Option<DailyEntry>> {
    let entries = load_entries(pool)?;
    Ok(entries.into_iter().find(|e| e.date == date))
}

/// Insert the entry, or replace the existing entry for the same date.
/// Replacement keeps the caller's fields but forces `updated_at` to now;
/// a blank id / created_at on a fresh insert is filled in here so the
/// collection stays well-formed even for callers that bypass the CLI.
pub fn save_entry(pool: &DbPool, entry: DailyEntry) -> AppResult<DailyEntry> {
    let mut entries = load_entries(pool)?;
    let now = now_rfc3339();

    let mut entry = entry;
    if entry.id.is_empty() {
        entry.id = uuid::Uuid::new_v4().to_string();
    }
    if entry.created_at.is_empty() {
        entry.created_at = now.clone();
    }

    match entries.iter_mut().find(|e| e.date == entry.date) {
        Some(existing) => {
            entry.updated_at = now;
            *existing = entry.clone();
        }
        None => {
            if entry.updated_at.is_empty() {
                entry.updated_at = now;
            }
            entries.push(entry.clone());
        }
    }

    write_entries(pool, &entries)?;
    Ok(entry)
}

/// Remove the entry with the given date. Returns whether one was removed;
/// deleting a date with no entry is a no-op, not an error.
pub fn delete_entry(pool: &DbPool, date: &str) -> AppResult<bool> {
    let mut entries = load_entries(pool)?;
    let before = entries.len();
    entries.retain(|e| e.date != date);

    if entries.len() == before {
        return Ok(false);
    }

    write_entries(pool, &entries)?;
    Ok(true)
}

/// Replace the whole collection (import semantics).
pub fn replace_entries(pool: &DbPool, entries: &[DailyEntry]) -> AppResult<()> {
    write_entries(pool, entries)
}

fn write_entries(pool: &DbPool, entries: &[DailyEntry]) -> AppResult<()> {
    let data = serde_json::to_string(entries)?;
    slots::set_slot(&pool.conn, ENTRIES_KEY, &data)
}

/// Settings, with absent keys back-filled from defaults. A malformed slot
/// degrades to the defaults.
pub fn load_settings(pool: &DbPool) -> AppResult<Settings> {
    let Some(data) = slots::get_slot(&pool.conn, SETTINGS_KEY)? else {
        return Ok(Settings::default());
    };

    match serde_json::from_str::<Settings>(&data) {
        Ok(settings) => Ok(settings),
        Err(e) => {
            warning(format!("Stored settings are unreadable ({e}); using defaults."));
            Ok(Settings::default())
        }
    }
}

pub fn save_settings(pool: &DbPool, settings: &Settings) -> AppResult<()> {
    let data = serde_json::to_string(settings)?;
    slots::set_slot(&pool.conn, SETTINGS_KEY, &data)
}

/// Drop both slots. Irreversible.
pub fn clear_all(pool: &DbPool) -> AppResult<()> {
    slots::delete_slot(&pool.conn, ENTRIES_KEY)?;
    slots::delete_slot(&pool.conn, SETTINGS_KEY)?;
    Ok(())
}
