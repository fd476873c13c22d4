use chrono::{TimeZone, Utc};
use predicates::str::contains;

use shiftledger::db::entries;
use shiftledger::db::pool::DbPool;
use shiftledger::errors::AppError;
use shiftledger::models::entry::WorkEntry;

mod common;
use common::{setup_test_db, sl};

fn entry_at(day: u32, hour: u32) -> WorkEntry {
    let start = Utc.with_ymd_and_hms(2025, 6, day, hour, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2025, 6, day, hour + 2, 0, 0).unwrap();
    WorkEntry::new(start, end, None)
}

#[test]
fn test_list_is_ordered_by_start_descending() {
    let mut pool = DbPool::open_in_memory().expect("open db");
    shiftledger::db::initialize::init_db(&pool.conn).expect("init db");

    // saved out of order on purpose
    for day in [10, 3, 25, 17] {
        entries::save(&pool.conn, &entry_at(day, 9)).expect("save");
    }

    let listed = entries::list(&mut pool).expect("list");
    let days: Vec<u32> = listed
        .iter()
        .map(|e| chrono::Datelike::day(&e.start.date_naive()))
        .collect();

    assert_eq!(days, vec![25, 17, 10, 3]);
}

#[test]
fn test_entry_earlier_than_all_existing_lands_last() {
    let mut pool = DbPool::open_in_memory().expect("open db");
    shiftledger::db::initialize::init_db(&pool.conn).expect("init db");

    entries::save(&pool.conn, &entry_at(20, 9)).expect("save");
    entries::save(&pool.conn, &entry_at(15, 9)).expect("save");

    let oldest = entry_at(1, 9);
    entries::save(&pool.conn, &oldest).expect("save");

    let listed = entries::list(&mut pool).expect("list");
    assert_eq!(listed.last().map(|e| e.id.as_str()), Some(oldest.id.as_str()));
}

#[test]
fn test_save_with_same_id_replaces_in_place() {
    let mut pool = DbPool::open_in_memory().expect("open db");
    shiftledger::db::initialize::init_db(&pool.conn).expect("init db");

    let original = entry_at(5, 9);
    entries::save(&pool.conn, &original).expect("save");

    let edited = WorkEntry {
        id: original.id.clone(),
        start: original.start,
        end: original.end,
        notes: Some("corrected".into()),
    };
    entries::save(&pool.conn, &edited).expect("resave");

    let listed = entries::list(&mut pool).expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].notes.as_deref(), Some("corrected"));
}

#[test]
fn test_inverted_range_is_rejected_and_never_listed() {
    let mut pool = DbPool::open_in_memory().expect("open db");
    shiftledger::db::initialize::init_db(&pool.conn).expect("init db");

    let start = Utc.with_ymd_and_hms(2025, 6, 10, 17, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2025, 6, 10, 9, 0, 0).unwrap();
    let bad = WorkEntry {
        id: "inverted".into(),
        start,
        end: Some(end),
        notes: None,
    };

    let err = entries::save(&pool.conn, &bad).unwrap_err();
    assert!(matches!(err, AppError::InvalidEntry(_)));

    assert!(entries::list(&mut pool).expect("list").is_empty());
}

#[test]
fn test_open_entry_is_rejected_by_save() {
    let pool = DbPool::open_in_memory().expect("open db");
    shiftledger::db::initialize::init_db(&pool.conn).expect("init db");

    let open = WorkEntry::open(Utc::now(), None);
    let err = entries::save(&pool.conn, &open).unwrap_err();
    assert!(matches!(err, AppError::InvalidEntry(_)));
}

#[test]
fn test_delete_missing_id_is_a_noop() {
    let mut pool = DbPool::open_in_memory().expect("open db");
    shiftledger::db::initialize::init_db(&pool.conn).expect("init db");

    entries::save(&pool.conn, &entry_at(5, 9)).expect("save");

    let before = entries::list(&mut pool).expect("list");
    let removed = entries::delete(&pool.conn, "no-such-id").expect("delete");
    let after = entries::list(&mut pool).expect("list");

    assert_eq!(removed, 0);
    assert_eq!(before.len(), after.len());
}

#[test]
fn test_cli_add_rejects_inverted_range() {
    let db_path = setup_test_db("cli_add_inverted");

    sl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sl().args([
        "--db",
        &db_path,
        "add",
        "2025-09-01T17:00",
        "2025-09-01T09:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid entry"));

    sl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("The ledger is empty"));
}

#[test]
fn test_cli_add_edit_and_delete() {
    let db_path = setup_test_db("cli_add_edit_delete");

    sl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sl().args([
        "--db",
        &db_path,
        "add",
        "2025-09-01T09:00",
        "2025-09-01T17:00",
        "--notes",
        "workshop",
    ])
    .assert()
    .success()
    .stdout(contains("Entry added"));

    // fish the id back out through the library
    let mut pool = DbPool::new(&db_path).expect("open db");
    let id = entries::list(&mut pool).expect("list")[0].id.clone();

    sl().args([
        "--db",
        &db_path,
        "add",
        "2025-09-01T08:00",
        "2025-09-01T16:00",
        "--edit",
        &id,
    ])
    .assert()
    .success()
    .stdout(contains("Entry updated"));

    let listed = entries::list(&mut pool).expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);

    sl().args(["--db", &db_path, "del", &id, "--yes"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    assert!(entries::list(&mut pool).expect("list").is_empty());
}
