use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::env;
use std::path::PathBuf;

mod common;
use common::wl;

/// Create a unique test store path inside the system temp dir
fn setup_test_store(name: &str) -> String {
    // Cross-platform: /tmp su Linux/macOS, %TEMP% su Windows
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_walklog.json", name));

    let store_path = path.to_string_lossy().to_string();

    // Rimuove il file se esiste già (reset)
    std::fs::remove_file(&store_path).ok();

    store_path
}

#[test]
fn test_init_creates_store() {
    let store_path = setup_test_store("init_creates_store");

    wl().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("walklog initialization completed"));

    let content = std::fs::read_to_string(&store_path).expect("read store");
    assert_eq!(content.trim(), "[]");
}

#[test]
fn test_add_and_list_session() {
    let store_path = setup_test_store("add_and_list");

    wl().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    wl().args([
        "--store",
        &store_path,
        "add",
        "5m",
        "--target",
        "5m",
        "--date",
        "2025-09-01",
    ])
    .assert()
    .success()
    .stdout(contains("Recorded 5:00 walk on 2025-09-01. Target reached!"));

    wl().args(["--store", &store_path, "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("5:00"))
        .stdout(contains("1 session(s), 1 completed, total 5m"));
}

#[test]
fn test_add_incomplete_session() {
    let store_path = setup_test_store("add_incomplete");

    wl().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    wl().args([
        "--store",
        &store_path,
        "add",
        "2m",
        "--target",
        "5m",
        "--date",
        "2025-09-02",
    ])
    .assert()
    .success()
    .stdout(contains(
        "Recorded 2:00 walk on 2025-09-02 (stopped before the 5:00 target).",
    ));

    // incomplete sessions are hidden by --completed
    wl().args([
        "--store",
        &store_path,
        "list",
        "--period",
        "2025-09-02",
        "--completed",
    ])
    .assert()
    .success()
    .stdout(contains("No sessions found for the selected period."));
}

#[test]
fn test_list_sessions_all() {
    let store_path = setup_test_store("list_sessions_all");

    wl().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    for date in ["2025-08-31", "2025-09-15", "2024-09-10"] {
        wl().args([
            "--store",
            &store_path,
            "add",
            "5m",
            "--target",
            "5m",
            "--date",
            date,
        ])
        .assert()
        .success();
    }

    wl().args(["--store", &store_path, "list", "--period", "2024-09:2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-08-31"))
        .stdout(contains("2025-09-15"))
        .stdout(contains("2024-09-10"));
}

#[test]
fn test_list_sessions_filter_year() {
    let store_path = setup_test_store("filter_year");

    wl().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    for date in ["2025-01-10", "2025-05-20", "2024-12-31"] {
        wl().args([
            "--store",
            &store_path,
            "add",
            "5m",
            "--target",
            "5m",
            "--date",
            date,
        ])
        .assert()
        .success();
    }

    wl().args(["--store", &store_path, "list", "--period", "2025"])
        .assert()
        .success()
        .stdout(contains("2025-01-10"))
        .stdout(contains("2025-05-20"))
        .stdout(
            predicates::str::is_match("2024-12-31")
                .expect("Invalid regex")
                .not(),
        );
}

#[test]
fn test_list_sessions_filter_year_month() {
    let store_path = setup_test_store("filter_year_month");

    wl().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    for date in ["2025-09-01", "2025-09-15", "2025-10-01", "2024-09-01"] {
        wl().args([
            "--store",
            &store_path,
            "add",
            "5m",
            "--target",
            "5m",
            "--date",
            date,
        ])
        .assert()
        .success();
    }

    wl().args(["--store", &store_path, "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-15"))
        .stdout(
            predicates::str::is_match("2025-10-01")
                .expect("Invalid regex")
                .not(),
        )
        .stdout(
            predicates::str::is_match("2024-09-01")
                .expect("Invalid regex")
                .not(),
        );
}

#[test]
fn test_list_sessions_invalid_period() {
    let store_path = setup_test_store("invalid_period");

    wl().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    wl().args(["--store", &store_path, "list", "--period", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_list_sessions_reversed_range() {
    let store_path = setup_test_store("reversed_range");

    wl().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    wl().args(["--store", &store_path, "list", "--period", "2025-10:2025-09"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_add_and_delete_session() {
    let store_path = setup_test_store("delete_session");

    wl().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    wl().args([
        "--store",
        &store_path,
        "--test",
        "add",
        "5m",
        "--target",
        "5m",
        "--date",
        "2025-09-20",
    ])
    .assert()
    .success();

    // Verify session is listed
    wl().args(["--store", &store_path, "--test", "list", "--period", "2025-09-20"])
        .assert()
        .success()
        .stdout(contains("2025-09-20"));

    // Delete by date -- answer 'y' to confirmation prompt
    wl().args(["--store", &store_path, "--test", "del", "2025-09-20"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Deleted").or(contains("deleted")));

    // Verify session no longer appears in list
    wl().args(["--store", &store_path, "--test", "list", "--period", "2025-09-20"])
        .assert()
        .success()
        .stdout(contains("2025-09-20").not());
}

#[test]
fn test_delete_nonexistent_session() {
    let store_path = setup_test_store("delete_nonexistent");

    wl().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    // Try to delete a date that has no sessions: confirm with 'y'
    wl().args(["--store", &store_path, "--test", "del", "2099-01-01"])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stderr(contains("No sessions found for date 2099-01-01"));
}

#[test]
fn test_delete_cancelled() {
    let store_path = setup_test_store("delete_cancelled");

    wl().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    wl().args([
        "--store",
        &store_path,
        "add",
        "5m",
        "--target",
        "5m",
        "--date",
        "2025-09-21",
    ])
    .assert()
    .success();

    // Answer 'n' -> nothing is deleted
    wl().args(["--store", &store_path, "del", "2025-09-21"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    wl().args(["--store", &store_path, "list", "--period", "2025-09-21"])
        .assert()
        .success()
        .stdout(contains("2025-09-21"));
}

#[test]
fn test_delete_by_index() {
    let store_path = setup_test_store("delete_by_index");

    wl().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    // Two sessions on the same day
    wl().args([
        "--store",
        &store_path,
        "add",
        "5m",
        "--target",
        "5m",
        "--date",
        "2025-09-22 08:00",
    ])
    .assert()
    .success();

    wl().args([
        "--store",
        &store_path,
        "add",
        "6m",
        "--target",
        "5m",
        "--date",
        "2025-09-22 18:00",
    ])
    .assert()
    .success();

    // Delete the first one (index is 1-based within the day)
    wl().args([
        "--store",
        &store_path,
        "del",
        "--index",
        "1",
        "2025-09-22",
    ])
    .write_stdin("y\n")
    .assert()
    .success()
    .stdout(contains("Session #1 for 2025-09-22 has been deleted."));

    wl().args(["--store", &store_path, "list", "--period", "2025-09-22"])
        .assert()
        .success()
        .stdout(contains("18:00"))
        .stdout(contains("08:00").not());
}

#[test]
fn test_delete_invalid_index() {
    let store_path = setup_test_store("delete_invalid_index");

    wl().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    wl().args([
        "--store",
        &store_path,
        "add",
        "5m",
        "--target",
        "5m",
        "--date",
        "2025-09-23",
    ])
    .assert()
    .success();

    wl().args([
        "--store",
        &store_path,
        "del",
        "--index",
        "5",
        "2025-09-23",
    ])
    .write_stdin("y\n")
    .assert()
    .failure()
    .stderr(contains("Invalid session index: 5"));
}

#[test]
fn test_add_with_gps_track() {
    let store_path = setup_test_store("add_with_gps_track");
    let track_path = common::temp_out("gps_track", "json");

    std::fs::write(
        &track_path,
        r#"[{"lat":45.07,"lng":7.69,"timestamp":1757764800},
            {"lat":45.08,"lng":7.70,"timestamp":1757764860},
            {"lat":45.09,"lng":7.71,"timestamp":1757764920}]"#,
    )
    .expect("write track file");

    wl().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    wl().args([
        "--store",
        &store_path,
        "add",
        "10m",
        "--target",
        "5m",
        "--date",
        "2025-09-13",
        "--track",
        &track_path,
    ])
    .assert()
    .success()
    .stdout(contains("GPS track attached (3 points)"));

    wl().args(["--store", &store_path, "list", "--period", "2025-09-13"])
        .assert()
        .success()
        .stdout(contains("3 pts"));
}

#[test]
fn test_add_track_with_bad_coordinates() {
    let store_path = setup_test_store("bad_track");
    let track_path = common::temp_out("bad_track", "json");

    // latitude out of range
    std::fs::write(
        &track_path,
        r#"[{"lat":123.0,"lng":7.69,"timestamp":1757764800}]"#,
    )
    .expect("write track file");

    wl().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    wl().args([
        "--store",
        &store_path,
        "add",
        "10m",
        "--target",
        "5m",
        "--date",
        "2025-09-13",
        "--track",
        &track_path,
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid GPS track"))
    .stderr(contains("1 point(s) with out-of-range coordinates"));
}

#[test]
fn test_add_invalid_duration() {
    let store_path = setup_test_store("invalid_duration");

    wl().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    // zero is not a walk
    wl().args(["--store", &store_path, "add", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid duration"));

    // seconds field must stay below 60 in clock form
    wl().args(["--store", &store_path, "add", "10:75"])
        .assert()
        .failure()
        .stderr(contains("Invalid duration"));
}

#[test]
fn test_add_clock_and_suffix_durations() {
    let store_path = setup_test_store("duration_forms");

    wl().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    wl().args([
        "--store",
        &store_path,
        "add",
        "12:30",
        "--target",
        "5m",
        "--date",
        "2025-09-03",
    ])
    .assert()
    .success()
    .stdout(contains("Recorded 12:30 walk on 2025-09-03"));

    wl().args([
        "--store",
        &store_path,
        "add",
        "1h10m",
        "--target",
        "1h",
        "--date",
        "2025-09-04",
    ])
    .assert()
    .success()
    .stdout(contains("Recorded 70:00 walk on 2025-09-04"));
}

#[test]
fn test_store_info_and_check() {
    let store_path = setup_test_store("store_info_check");
    common::init_store_with_data(&store_path);

    wl().args(["--store", &store_path, "store", "--info"])
        .assert()
        .success()
        .stdout(contains("Total sessions:"))
        .stdout(contains("Date range:"));

    wl().args(["--store", &store_path, "store", "--check"])
        .assert()
        .success()
        .stdout(contains("Store check passed"));
}

#[test]
fn test_store_check_reports_problems() {
    let store_path = setup_test_store("store_check_problems");

    // Hand-written store: zero duration and out-of-order timestamps
    std::fs::write(
        &store_path,
        r#"[
  {"date":"2025-09-02T10:00:00Z","duration":0,"completed":false},
  {"date":"2025-09-01T10:00:00Z","duration":300,"completed":true}
]"#,
    )
    .expect("write store");

    wl().args(["--store", &store_path, "store", "--check"])
        .assert()
        .success()
        .stdout(contains("zero duration"))
        .stdout(contains("out of order"));
}

#[test]
fn test_stats_on_empty_store() {
    let store_path = setup_test_store("stats_empty");

    wl().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    wl().args(["--store", &store_path, "stats"])
        .assert()
        .success()
        .stdout(contains("Walking progress"))
        .stdout(contains("Total sessions:"))
        .stdout(contains("Day streak:"));
}

#[test]
fn test_recommend_on_empty_store() {
    let store_path = setup_test_store("recommend_empty");

    wl().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    wl().args(["--store", &store_path, "recommend"])
        .assert()
        .success()
        .stdout(contains("Recommended next walk"))
        .stdout(contains("3 minutes (3:00)"))
        .stdout(contains("Starting with a gentle 3-minute walk"))
        .stdout(contains("High confidence"));
}

#[test]
fn test_recommend_with_sparse_history() {
    let store_path = setup_test_store("recommend_sparse");

    wl().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    // one recent session is not enough to move the duration
    let yesterday = (chrono::Local::now() - chrono::Duration::days(1))
        .format("%Y-%m-%d %H:%M")
        .to_string();

    wl().args([
        "--store",
        &store_path,
        "add",
        "6m",
        "--target",
        "5m",
        "--date",
        &yesterday,
    ])
    .assert()
    .success();

    wl().args(["--store", &store_path, "recommend"])
        .assert()
        .success()
        .stdout(contains("6 minutes (6:00)"))
        .stdout(contains("Continue with current duration to build consistency"));
}

#[test]
fn test_log_print_runs() {
    let store_path = setup_test_store("log_print");

    wl().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    wl().args(["--store", &store_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"));
}
