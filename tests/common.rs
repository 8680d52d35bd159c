#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use daylog::db::initialize::init_db;
use daylog::db::pool::DbPool;
use daylog::models::entry::{DailyEntry, EnergyLog};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dlg() -> Command {
    cargo_bin_cmd!("daylog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_daylog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Open a pool on a fresh test DB with the schema created.
pub fn open_pool(db_path: &str) -> DbPool {
    let pool = DbPool::new(db_path).expect("open db");
    init_db(&pool.conn).expect("init db");
    pool
}

/// Minimal well-formed entry for a date.
pub fn entry(date: &str, rating: u8) -> DailyEntry {
    DailyEntry {
        id: format!("test-{}", date),
        date: date.to_string(),
        day_rating: rating,
        energy_logs: Vec::new(),
        accomplishments: Vec::new(),
        challenges: Vec::new(),
        notes: String::new(),
        created_at: "2024-01-01T08:00:00+00:00".to_string(),
        updated_at: "2024-01-01T08:00:00+00:00".to_string(),
    }
}

/// Entry carrying energy samples at the given RFC-3339 timestamps.
pub fn entry_with_energy(date: &str, rating: u8, samples: &[(u8, &str)]) -> DailyEntry {
    let mut e = entry(date, rating);
    e.energy_logs = samples
        .iter()
        .map(|(level, ts)| EnergyLog {
            level: *level,
            timestamp: ts.to_string(),
        })
        .collect();
    e
}

/// Initialize DB via the CLI and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates schema)
    dlg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    dlg()
        .args([
            "--db",
            db_path,
            "add",
            "2025-09-01",
            "--rating",
            "4",
            "--done",
            "reviewed flashcards",
        ])
        .assert()
        .success();

    dlg()
        .args([
            "--db",
            db_path,
            "add",
            "2025-09-15",
            "--rating",
            "2",
            "--challenge",
            "slept badly",
        ])
        .assert()
        .success();
}
