use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
///
/// The whole store is two named slots holding serialized JSON documents
/// (entries and settings), so the schema is a single key/value table.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS slots (
             key   TEXT PRIMARY KEY,
             value TEXT NOT NULL
         )",
        [],
    )?;
    Ok(())
}
