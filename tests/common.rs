#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wl() -> Command {
    cargo_bin_cmd!("walklog")
}

/// Create a unique test store path inside the system temp dir and remove any existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_walklog.json", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the store and add a small dataset useful for many tests
pub fn init_store_with_data(store_path: &str) {
    // init store (creates the empty JSON array)
    wl().args(["--store", store_path, "--test", "init"])
        .assert()
        .success();

    // add a couple of sessions via CLI (fixed UTC instants, so exported
    // timestamps are stable regardless of the machine timezone)
    wl().args([
        "--store",
        store_path,
        "add",
        "5m",
        "--target",
        "5m",
        "--date",
        "2025-09-01T12:00:00Z",
    ])
    .assert()
    .success();

    wl().args([
        "--store",
        store_path,
        "add",
        "7m",
        "--target",
        "5m",
        "--date",
        "2025-09-15T12:00:00Z",
    ])
    .assert()
    .success();
}

/// Helper to populate many sessions directly via the library store API for performance tests
pub fn populate_many_sessions(store_path: &str, n: usize) {
    use chrono::{Duration, TimeZone, Utc};
    use walklog::models::WalkSession;
    use walklog::store::SessionStore;

    let store = SessionStore::open(store_path);
    let base = Utc.with_ymd_and_hms(2025, 11, 1, 12, 0, 0).unwrap();

    let mut sessions = Vec::with_capacity(n);
    for i in 0..n {
        // generate dates in a range
        let day = (i % 28) as i64; // 0..28
        sessions.push(WalkSession::new(base + Duration::days(day), 300, true));
    }
    sessions.sort_by(|a, b| a.date.cmp(&b.date));
    store.save(&sessions).expect("save sessions");
}
