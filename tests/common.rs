#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

use rtimesheet::core::add::EntryForm;
use rtimesheet::models::Entry;

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    rts()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rts()
        .args([
            "--db", db_path, "add", "Bruno Lima", "--date", "2024-01-10", "--in", "09:00", "--out",
            "18:30", "--break", "60",
        ])
        .assert()
        .success();

    rts()
        .args([
            "--db", db_path, "add", "Ana Souza", "--date", "2024-01-10", "--in", "08:00", "--out",
            "17:00", "--break", "60", "--notes", "Trabalho normal",
        ])
        .assert()
        .success();

    rts()
        .args([
            "--db",
            db_path,
            "add",
            "Ana Souza",
            "--date",
            "2024-01-05",
            "--in",
            "08:00",
            "--out",
            "17:00",
            "--lunch-in",
            "12:00",
            "--lunch-out",
            "13:30",
        ])
        .assert()
        .success();
}

/// Build an entry through the form, with a break in minutes.
pub fn entry(employee: &str, date: &str, time_in: &str, time_out: &str, break_min: &str) -> Entry {
    EntryForm {
        employee: employee.to_string(),
        date: date.to_string(),
        time_in: time_in.to_string(),
        time_out: time_out.to_string(),
        break_min: break_min.to_string(),
        ..Default::default()
    }
    .build()
    .expect("valid entry")
}
