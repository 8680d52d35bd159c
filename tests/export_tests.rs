//! Export/import round-trip and failure handling.

mod common;
use common::{dlg, entry, entry_with_energy, open_pool, setup_test_db, temp_out};

use daylog::db::repository::{load_entries, load_settings, save_entry, save_settings};
use daylog::models::settings::{Section, Settings, Theme};
use predicates::str::contains;
use std::fs;

#[test]
fn export_import_round_trip_preserves_entries_and_settings() {
    let db_src = setup_test_db("export_rt_src");
    let db_dst = setup_test_db("export_rt_dst");
    let out = temp_out("export_rt", "json");

    // seed source store via the library API
    {
        let pool = open_pool(&db_src);
        save_entry(&pool, entry("2025-01-01", 4)).expect("save");
        save_entry(
            &pool,
            entry_with_energy("2025-01-02", 2, &[(3, "2025-01-02T09:30:00+01:00")]),
        )
        .expect("save");

        let mut settings = Settings::default();
        settings.theme = Theme::Dark;
        settings.enabled_sections.set(Section::Challenges, false);
        save_settings(&pool, &settings).expect("save settings");
    }

    dlg()
        .args(["--db", &db_src, "export", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    // the document carries the expected envelope
    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read export")).expect("valid json");
    assert_eq!(doc["version"], "1.0");
    assert!(doc["exportedAt"].is_string());
    assert_eq!(doc["entries"].as_array().expect("entries array").len(), 2);
    assert_eq!(doc["settings"]["theme"], "dark");

    // import into a fresh store
    {
        let pool = open_pool(&db_dst);
        drop(pool);
    }
    dlg()
        .args(["--db", &db_dst, "import", "--file", &out, "--yes"])
        .assert()
        .success()
        .stdout(contains("Imported 2 entries"));

    let src_pool = open_pool(&db_src);
    let dst_pool = open_pool(&db_dst);

    let mut src_entries = load_entries(&src_pool).expect("src entries");
    let mut dst_entries = load_entries(&dst_pool).expect("dst entries");
    src_entries.sort_by(|a, b| a.date.cmp(&b.date));
    dst_entries.sort_by(|a, b| a.date.cmp(&b.date));

    assert_eq!(src_entries, dst_entries);
    assert_eq!(
        load_settings(&src_pool).expect("src settings"),
        load_settings(&dst_pool).expect("dst settings")
    );
}

#[test]
fn import_of_malformed_document_fails_without_touching_store() {
    let db = setup_test_db("import_malformed");
    let bad = temp_out("import_malformed", "json");

    {
        let pool = open_pool(&db);
        save_entry(&pool, entry("2025-01-01", 4)).expect("seed");
    }

    fs::write(&bad, "{ this is not json").expect("write bad file");

    dlg()
        .args(["--db", &db, "import", "--file", &bad, "--yes"])
        .assert()
        .failure()
        .stderr(contains("Import failed"));

    // existing data must be intact
    let pool = open_pool(&db);
    let entries = load_entries(&pool).expect("load");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].date, "2025-01-01");
}

#[test]
fn import_rejects_document_without_entries_or_settings() {
    let db = setup_test_db("import_empty_doc");
    let doc = temp_out("import_empty_doc", "json");

    {
        open_pool(&db);
    }
    fs::write(&doc, r#"{"exportedAt":"2025-01-01T00:00:00Z","version":"1.0"}"#)
        .expect("write doc");

    dlg()
        .args(["--db", &db, "import", "--file", &doc, "--yes"])
        .assert()
        .failure()
        .stderr(contains("neither entries nor settings"));
}

#[test]
fn import_accepts_entries_only_document() {
    let db = setup_test_db("import_entries_only");
    let doc = temp_out("import_entries_only", "json");

    {
        open_pool(&db);
    }
    fs::write(
        &doc,
        r#"{"entries":[{"id":"x","date":"2023-07-01","mood":5,"createdAt":"2023-07-01T20:00:00Z"}]}"#,
    )
    .expect("write doc");

    dlg()
        .args(["--db", &db, "import", "--file", &doc, "--yes"])
        .assert()
        .success()
        .stdout(contains("Imported 1 entries"));

    // legacy fields normalized on the way in
    let pool = open_pool(&db);
    let entries = load_entries(&pool).expect("load");
    assert_eq!(entries[0].day_rating, 5);
}

#[test]
fn csv_export_writes_one_row_per_entry() {
    let db = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");

    {
        let pool = open_pool(&db);
        save_entry(&pool, entry("2025-02-01", 1)).expect("save");
        save_entry(&pool, entry("2025-02-02", 5)).expect("save");
    }

    dlg()
        .args([
            "--db", &db, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3, "header + 2 rows");
    assert!(lines[0].contains("day_rating_label"));
    assert!(content.contains("Terrible"));
    assert!(content.contains("Amazing"));
}
