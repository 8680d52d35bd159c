//! Named string-keyed slots over SQLite.
//!
//! Reads return None when a slot is empty; writes replace the slot's
//! entire contents. The repository layers entry/settings semantics on top.

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};

/// Slot holding the serialized entry collection.
pub const ENTRIES_KEY: &str = "daily-progress-entries";
/// Slot holding the serialized settings object.
pub const SETTINGS_KEY: &str = "daily-progress-settings";

pub fn get_slot(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM slots WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(value)
}

pub fn set_slot(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO slots (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn delete_slot(conn: &Connection, key: &str) -> AppResult<()> {
    conn.execute("DELETE FROM slots WHERE key = ?1", [key])?;
    Ok(())
}
