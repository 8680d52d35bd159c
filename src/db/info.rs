use crate::db::pool::DbPool;
use crate::db::repository;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::parse_date;
use std::fs;

/// Print database information: file size, entry count, date range and
/// average entries per day over that range.
pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL ENTRIES
    //
    let mut entries = repository::load_entries(pool)?;
    entries.sort_by(|a, b| a.date.cmp(&b.date));

    println!(
        "{}• Total entries:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        entries.len(),
        RESET
    );

    //
    // 3) DATE RANGE
    //
    let first_date = entries.first().map(|e| e.date.clone());
    let last_date = entries.last().map(|e| e.date.clone());

    let fmt_first = first_date
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE ENTRIES/DAY
    //
    if let (Some(f), Some(l)) = (
        first_date.as_deref().and_then(parse_date),
        last_date.as_deref().and_then(parse_date),
    ) {
        let days = (l - f).num_days().max(0) + 1;
        let avg = entries.len() as f64 / days as f64;
        println!("{}• Average entries/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}

/// Run SQLite's integrity check; returns the result string.
pub fn integrity_check(pool: &DbPool) -> AppResult<String> {
    let result: String = pool
        .conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    Ok(result)
}

/// Reclaim free pages.
pub fn vacuum(pool: &DbPool) -> AppResult<()> {
    pool.conn.execute_batch("VACUUM")?;
    Ok(())
}
