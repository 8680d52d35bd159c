//! Entry repository semantics: save/replace, lookup, delete, settings merge.

mod common;
use common::{entry, open_pool, setup_test_db};

use daylog::db::repository::{
    delete_entry, find_by_date, load_entries, load_settings, save_entry, save_settings,
};
use daylog::db::slots::{self, SETTINGS_KEY};
use daylog::models::settings::{Section, Settings, Theme};

#[test]
fn save_then_get_returns_saved_entry() {
    let db = setup_test_db("repo_save_get");
    let pool = open_pool(&db);

    let saved = save_entry(&pool, entry("2024-06-01", 5)).expect("save");
    let found = find_by_date(&pool, "2024-06-01")
        .expect("lookup")
        .expect("entry exists");

    assert_eq!(found, saved);
    assert_eq!(found.day_rating, 5);
}

#[test]
fn get_missing_date_is_absent_not_error() {
    let db = setup_test_db("repo_get_missing");
    let pool = open_pool(&db);

    assert!(find_by_date(&pool, "2024-06-01").expect("lookup").is_none());
}

#[test]
fn save_to_same_date_replaces_and_refreshes_updated_at() {
    let db = setup_test_db("repo_replace");
    let pool = open_pool(&db);

    let first = save_entry(&pool, entry("2024-06-01", 2)).expect("save");

    let mut second = entry("2024-06-01", 4);
    second.updated_at = first.updated_at.clone();
    let second = save_entry(&pool, second).expect("save again");

    let all = load_entries(&pool).expect("load");
    assert_eq!(all.len(), 1, "same date must replace, not duplicate");
    assert_eq!(all[0].day_rating, 4);
    assert!(
        second.updated_at.as_str() >= first.updated_at.as_str(),
        "updated_at must not move backwards"
    );
    assert_ne!(second.updated_at, "2024-01-01T08:00:00+00:00");
}

#[test]
fn blank_id_and_created_at_are_filled_on_insert() {
    let db = setup_test_db("repo_fill_ids");
    let pool = open_pool(&db);

    let mut fresh = entry("2024-06-02", 3);
    fresh.id = String::new();
    fresh.created_at = String::new();

    let saved = save_entry(&pool, fresh).expect("save");
    assert!(!saved.id.is_empty());
    assert!(!saved.created_at.is_empty());
}

#[test]
fn delete_removes_entry_and_is_noop_when_absent() {
    let db = setup_test_db("repo_delete");
    let pool = open_pool(&db);

    save_entry(&pool, entry("2024-06-01", 3)).expect("save");

    assert!(delete_entry(&pool, "2024-06-01").expect("delete"));
    assert!(find_by_date(&pool, "2024-06-01").expect("lookup").is_none());

    // second delete: no-op, no error
    assert!(!delete_entry(&pool, "2024-06-01").expect("delete again"));
}

#[test]
fn malformed_entries_slot_degrades_to_empty() {
    let db = setup_test_db("repo_malformed");
    let pool = open_pool(&db);

    slots::set_slot(&pool.conn, slots::ENTRIES_KEY, "{not json").expect("write garbage");

    assert!(load_entries(&pool).expect("load").is_empty());
}

#[test]
fn legacy_records_are_normalized_on_load() {
    let db = setup_test_db("repo_legacy");
    let pool = open_pool(&db);

    slots::set_slot(
        &pool.conn,
        slots::ENTRIES_KEY,
        r#"[{"id":"old","date":"2023-01-05","mood":4,"energy":2,"createdAt":"2023-01-05T21:00:00Z"}]"#,
    )
    .expect("seed legacy record");

    let all = load_entries(&pool).expect("load");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].day_rating, 4);
    assert_eq!(all[0].energy_logs.len(), 1);
    assert_eq!(all[0].energy_logs[0].level, 2);
}

#[test]
fn settings_default_when_absent_and_backfill_missing_keys() {
    let db = setup_test_db("repo_settings");
    let pool = open_pool(&db);

    // empty slot → defaults
    let settings = load_settings(&pool).expect("load");
    assert_eq!(settings, Settings::default());
    assert!(settings.enabled_sections.get(Section::Notes));

    // partial document → missing keys back-filled
    slots::set_slot(&pool.conn, SETTINGS_KEY, r#"{"theme":"dark"}"#).expect("seed partial");
    let settings = load_settings(&pool).expect("load partial");
    assert_eq!(settings.theme, Theme::Dark);
    assert!(settings.enabled_sections.day_rating);
    assert_eq!(settings.reminder_time, None);
}

#[test]
fn settings_round_trip() {
    let db = setup_test_db("repo_settings_rt");
    let pool = open_pool(&db);

    let mut settings = Settings::default();
    settings.theme = Theme::Light;
    settings.enabled_sections.set(Section::Energy, false);
    settings.reminder_time = Some("21:30".to_string());

    save_settings(&pool, &settings).expect("save");
    assert_eq!(load_settings(&pool).expect("reload"), settings);
}
