use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, rts, setup_test_db};

use rtimesheet::core::repository::DEFAULT_STORAGE_KEY;
use rtimesheet::storage::{KeyValueStore, SqliteStore};

#[test]
fn test_add_and_list() {
    let db_path = setup_test_db("add_and_list");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Ana Souza"))
        .stdout(contains("Bruno Lima"))
        .stdout(contains("10/01/2024"))
        .stdout(contains("05/01/2024"))
        .stdout(contains("8,50"))
        .stdout(contains("Entries:"))
        .stdout(contains("Total: 24,00 h"));
}

#[test]
fn test_add_reports_totals() {
    let db_path = setup_test_db("add_reports_totals");

    rts()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rts()
        .args([
            "--db", &db_path, "add", "Ana", "--date", "2024-01-10", "--in", "09:00", "--out",
            "18:30", "--break", "60",
        ])
        .assert()
        .success()
        .stdout(contains("Total: 8,50 h"))
        .stdout(contains("Overtime: 0,50 h"));
}

#[test]
fn test_add_rejects_out_before_in() {
    let db_path = setup_test_db("add_rejects_out_before_in");

    rts()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rts()
        .args([
            "--db", &db_path, "add", "Ana", "--date", "2024-01-10", "--in", "17:00", "--out",
            "08:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Clock-out time must be later than clock-in time"));

    rts()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries found."));
}

#[test]
fn test_add_rejects_bad_lunch_and_partial_lunch() {
    let db_path = setup_test_db("add_rejects_bad_lunch");

    rts()
        .args([
            "--db", &db_path, "add", "Ana", "--date", "2024-01-10", "--in", "08:00", "--out",
            "17:00", "--lunch-in", "13:00", "--lunch-out", "12:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Lunch end must be later than lunch start"));

    rts()
        .args([
            "--db", &db_path, "add", "Ana", "--date", "2024-01-10", "--in", "08:00", "--out",
            "17:00", "--lunch-in", "12:00",
        ])
        .assert()
        .failure()
        .stderr(contains("missing: lunch out"));
}

#[test]
fn test_break_and_lunch_conflict() {
    let db_path = setup_test_db("break_and_lunch_conflict");

    rts()
        .args([
            "--db", &db_path, "add", "Ana", "--in", "08:00", "--out", "17:00", "--break", "60",
            "--lunch-in", "12:00", "--lunch-out", "13:00",
        ])
        .assert()
        .failure();
}

#[test]
fn test_list_filters() {
    let db_path = setup_test_db("list_filters");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "list", "--employee", "BRUNO"])
        .assert()
        .success()
        .stdout(contains("Bruno Lima"))
        .stdout(contains("Ana Souza").not());

    rts()
        .args([
            "--db",
            &db_path,
            "list",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-05",
        ])
        .assert()
        .success()
        .stdout(contains("05/01/2024"))
        .stdout(contains("10/01/2024").not());

    rts()
        .args(["--db", &db_path, "list", "--from", "01/01/2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_list_json_is_sorted() {
    let db_path = setup_test_db("list_json_sorted");
    init_db_with_data(&db_path);

    let output = rts()
        .args(["--db", &db_path, "list", "--json"])
        .output()
        .expect("run list --json");
    assert!(output.status.success());

    let entries: Vec<rtimesheet::models::Entry> =
        serde_json::from_slice(&output.stdout).expect("valid json");
    let order: Vec<(String, String)> = entries
        .iter()
        .map(|e| (e.date_str(), e.employee.clone()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("2024-01-05".to_string(), "Ana Souza".to_string()),
            ("2024-01-10".to_string(), "Ana Souza".to_string()),
            ("2024-01-10".to_string(), "Bruno Lima".to_string()),
        ]
    );
}

#[test]
fn test_clear_all() {
    let db_path = setup_test_db("clear_all");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("3 entries deleted."));

    rts()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries found."));
}

#[test]
fn test_clear_declined_keeps_entries() {
    let db_path = setup_test_db("clear_declined");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Nothing deleted."));

    rts()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Bruno Lima"));
}

#[test]
fn test_seed_adds_demo_rows() {
    let db_path = setup_test_db("seed_demo");

    rts()
        .args(["--db", &db_path, "seed"])
        .assert()
        .success()
        .stdout(contains("2 demo entries added."));

    rts()
        .args(["--db", &db_path, "list", "--employee", "souza"])
        .assert()
        .success()
        .stdout(contains("Trabalho normal"));
}

#[test]
fn test_seed_includes_lunch_interval_row() {
    let db_path = setup_test_db("seed_lunch");

    rts().args(["--db", &db_path, "seed"]).assert().success();

    rts()
        .args(["--db", &db_path, "list", "--employee", "bruno", "--json"])
        .assert()
        .success()
        .stdout(contains("\"lunchIn\": \"12:30\""))
        .stdout(contains("\"lunchOut\": \"13:30\""))
        .stdout(contains("\"totalMin\": 480"));
}

#[test]
fn test_malformed_snapshot_is_logged_without_rust_log() {
    let db_path = setup_test_db("malformed_snapshot");
    {
        let mut store = SqliteStore::open(&db_path).unwrap();
        store.set(DEFAULT_STORAGE_KEY, "{not json").unwrap();
    }

    rts()
        .env_remove("RUST_LOG")
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stderr(contains("stored entries are malformed"));
}

#[test]
fn test_checkin_message() {
    rts()
        .args(["checkin", "João da Silva", "--lat", "-23.5505199", "--lon", "-46.6333094"])
        .assert()
        .success()
        .stdout(contains("João da Silva"))
        .stdout(contains("Latitude: -23.55052, Longitude: -46.63331"));

    rts()
        .args(["checkin", "João da Silva"])
        .assert()
        .success()
        .stdout(contains("Location not available"));
}
