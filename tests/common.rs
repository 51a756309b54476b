#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn plt() -> Command {
    cargo_bin_cmd!("plantoes")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_plantoes.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_plantoes_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    plt()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add a location through the CLI and return the short id it prints.
pub fn add_location(db_path: &str, name: &str, color: &str) -> String {
    let out = plt()
        .args(["--db", db_path, "location", "add", name, "--color", color])
        .output()
        .expect("run location add");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let line = stdout
        .lines()
        .find(|l| l.contains("added ["))
        .expect("location add prints the new id");
    let start = line.rfind('[').expect("open bracket") + 1;
    let end = line.rfind(']').expect("close bracket");
    line[start..end].to_string()
}

/// Initialize DB with one location and two shifts in September 2025
pub fn init_db_with_data(db_path: &str) -> String {
    init_db(db_path);
    let loc = add_location(db_path, "Hospital A", "#2196F3");

    for date in ["2025-09-01", "2025-09-15"] {
        plt()
            .args([
                "--db", db_path, "shift", "add", "--location", &loc, "--date", date, "--amount",
                "1200",
            ])
            .assert()
            .success();
    }

    loc
}
