use crate::db::pool::DbPool;
use crate::db::repository;
use crate::errors::AppResult;

/// High-level business logic for the `del` command.
pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the entry for `date`. Returns whether anything was removed;
    /// a missing entry is a no-op.
    pub fn apply(pool: &DbPool, date: &str) -> AppResult<bool> {
        repository::delete_entry(pool, date)
    }
}
