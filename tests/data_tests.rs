use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, init_db_with_data, plt, setup_test_db, temp_out};

#[test]
fn test_export_json_import_round_trip() {
    let src = setup_test_db("data_roundtrip_src");
    init_db_with_data(&src);
    let out = temp_out("data_roundtrip", "json");

    plt()
        .args(["--db", &src, "export", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(doc["locations"].as_array().map(Vec::len), Some(1));
    assert_eq!(doc["shifts"].as_array().map(Vec::len), Some(2));
    assert_eq!(doc["version"], env!("CARGO_PKG_VERSION"));
    assert!(doc["exportedAt"].is_string());

    let dst = setup_test_db("data_roundtrip_dst");
    init_db(&dst);

    plt()
        .args(["--db", &dst, "import", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Imported 1 location(s) and 2 shift(s)"));

    plt()
        .args(["--db", &dst, "payments", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(contains("Hospital A"))
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-15"));
}

#[test]
fn test_import_rejects_invalid_document() {
    let db_path = setup_test_db("data_import_invalid");
    init_db_with_data(&db_path);
    let bad = temp_out("data_import_invalid", "json");
    fs::write(&bad, r#"{"locations": []}"#).expect("write bad file");

    plt()
        .args(["--db", &db_path, "import", "--file", &bad, "--force"])
        .assert()
        .failure()
        .stderr(contains("Invalid import file"));

    // data untouched
    plt()
        .args(["--db", &db_path, "location", "list"])
        .assert()
        .success()
        .stdout(contains("Hospital A"));
}

#[test]
fn test_export_csv_with_range() {
    let db_path = setup_test_db("data_export_csv_range");
    init_db_with_data(&db_path);
    let out = temp_out("data_export_csv_range", "csv");

    plt()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range",
            "2025-09-10:2025-09-30",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-09-15"));
    assert!(!content.contains("2025-09-01"));
    assert!(content.contains("Hospital A"));

    // existing file, declined overwrite
    plt()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("cancelled"));

    plt()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success();
    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-09-01"));
}

#[test]
fn test_clear_all_and_log() {
    let db_path = setup_test_db("data_clear_log");
    init_db_with_data(&db_path);

    plt()
        .args(["--db", &db_path, "clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    plt()
        .args(["--db", &db_path, "clear"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("All data cleared (1 location(s), 2 shift(s))"));

    plt()
        .args(["--db", &db_path, "location", "list"])
        .assert()
        .success()
        .stdout(contains("No locations yet"));

    plt()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("migration_applied"))
        .stdout(contains("add"))
        .stdout(contains("clear"));
}
