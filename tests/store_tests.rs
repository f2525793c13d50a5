use chrono::{DateTime, Duration, TimeZone, Utc};
use walklog::models::{GpsPoint, WalkSession};
use walklog::store::{SessionStore, stats};

mod common;
use common::{populate_many_sessions, setup_test_store};

fn at(days: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 1, 12, 0, 0).unwrap() + Duration::days(days)
}

#[test]
fn insert_keeps_dates_ordered() {
    let store = SessionStore::open(&setup_test_store("insert_ordered"));

    store.insert(WalkSession::new(at(3), 300, true)).expect("insert");
    store.insert(WalkSession::new(at(1), 100, true)).expect("insert");
    store.insert(WalkSession::new(at(2), 200, true)).expect("insert");

    let sessions = store.load().expect("load");
    let durations: Vec<u32> = sessions.iter().map(|s| s.duration).collect();
    assert_eq!(durations, vec![100, 200, 300]);
}

#[test]
fn same_timestamp_inserts_after_existing() {
    let store = SessionStore::open(&setup_test_store("insert_same_ts"));

    let first = store.insert(WalkSession::new(at(0), 111, true)).expect("insert");
    let second = store.insert(WalkSession::new(at(0), 222, true)).expect("insert");

    assert_eq!(first, 0);
    assert_eq!(second, 1);

    let sessions = store.load().expect("load");
    let durations: Vec<u32> = sessions.iter().map(|s| s.duration).collect();
    assert_eq!(durations, vec![111, 222]);
}

#[test]
fn missing_file_is_empty_history() {
    let store = SessionStore::open(&setup_test_store("missing_file"));

    assert!(!store.exists());
    assert!(store.load().expect("load").is_empty());
}

#[test]
fn empty_file_is_empty_history() {
    let path = setup_test_store("empty_file");
    std::fs::write(&path, "").expect("write empty file");

    let store = SessionStore::open(&path);
    assert!(store.load().expect("load").is_empty());
}

#[test]
fn malformed_store_is_rejected() {
    let path = setup_test_store("malformed_store");
    std::fs::write(&path, "definitely not json").expect("write garbage");

    let store = SessionStore::open(&path);
    let err = store.load().expect_err("load must fail");
    assert!(err.to_string().contains("Session store error"));
}

#[test]
fn gps_track_survives_save_and_load() {
    let store = SessionStore::open(&setup_test_store("gps_roundtrip"));

    let mut with_track = WalkSession::new(at(0), 300, true);
    with_track.gps_track = Some(vec![
        GpsPoint {
            lat: 45.07,
            lng: 7.69,
            timestamp: 1757764800,
        },
        GpsPoint {
            lat: 45.08,
            lng: 7.70,
            timestamp: 1757764860,
        },
    ]);
    let without_track = WalkSession::new(at(1), 300, true);

    store.save(&[with_track, without_track]).expect("save");

    // sessions without a track must not serialize the field at all
    let raw = std::fs::read_to_string(store.path()).expect("read raw store");
    assert_eq!(raw.matches("gpsTrack").count(), 1);
    assert!(raw.contains("\"lat\""));

    let sessions = store.load().expect("load");
    assert_eq!(sessions[0].track_len(), 2);
    assert_eq!(sessions[1].track_len(), 0);
}

#[test]
fn sessions_on_matches_local_day() {
    let store = SessionStore::open(&setup_test_store("sessions_on"));

    store.insert(WalkSession::new(at(0), 100, true)).expect("insert");
    store.insert(WalkSession::new(at(1), 200, true)).expect("insert");
    store.insert(WalkSession::new(at(2), 300, true)).expect("insert");

    let middle_day = WalkSession::new(at(1), 0, true).local_date();
    let found = store.sessions_on(middle_day).expect("sessions_on");

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].0, 1);
    assert_eq!(found[0].1.duration, 200);
}

#[test]
fn remove_at_returns_the_removed_session() {
    let store = SessionStore::open(&setup_test_store("remove_at"));

    store.insert(WalkSession::new(at(0), 100, true)).expect("insert");
    store.insert(WalkSession::new(at(1), 200, true)).expect("insert");

    let removed = store.remove_at(0).expect("remove");
    assert_eq!(removed.duration, 100);

    let sessions = store.load().expect("load");
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].duration, 200);
}

#[test]
fn remove_at_out_of_bounds_errors() {
    let store = SessionStore::open(&setup_test_store("remove_oob"));

    store.insert(WalkSession::new(at(0), 100, true)).expect("insert");

    let err = store.remove_at(5).expect_err("out of bounds");
    assert!(err.to_string().contains("Invalid session index: 5"));
}

#[test]
fn check_store_passes_on_sound_data() {
    let store = SessionStore::open(&setup_test_store("check_sound"));

    store.insert(WalkSession::new(at(0), 300, true)).expect("insert");
    store.insert(WalkSession::new(at(1), 420, false)).expect("insert");

    let problems = stats::check_store(&store).expect("check");
    assert!(problems.is_empty());
}

#[test]
fn check_store_flags_problems() {
    let path = setup_test_store("check_problems");

    // zero duration, bad GPS point, and timestamps out of order
    std::fs::write(
        &path,
        r#"[
  {"date":"2025-09-02T10:00:00Z","duration":0,"completed":false},
  {"date":"2025-09-01T10:00:00Z","duration":300,"completed":true,
   "gpsTrack":[{"lat":123.0,"lng":7.69,"timestamp":1757764800}]}
]"#,
    )
    .expect("write store");

    let store = SessionStore::open(&path);
    let problems = stats::check_store(&store).expect("check");

    assert_eq!(problems.len(), 3);
    assert!(problems.iter().any(|p| p.contains("zero duration")));
    assert!(problems.iter().any(|p| p.contains("GPS point(s) out of range")));
    assert!(problems.iter().any(|p| p.contains("out of order")));
}

#[test]
fn browser_exported_array_loads_and_round_trips() {
    let path = setup_test_store("browser_interop");

    // the shape older exports of this data use: millisecond timestamps,
    // camelCase gpsTrack
    std::fs::write(
        &path,
        r#"[
  {
    "date": "2025-09-01T07:30:00.000Z",
    "duration": 300,
    "completed": true,
    "gpsTrack": [
      { "lat": 45.07, "lng": 7.69, "timestamp": 1756711800000 }
    ]
  },
  {
    "date": "2025-09-02T07:30:00.000Z",
    "duration": 240,
    "completed": false
  }
]"#,
    )
    .expect("write store");

    let store = SessionStore::open(&path);
    let sessions = store.load().expect("load browser export");

    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].duration, 300);
    assert!(sessions[0].completed);
    assert_eq!(sessions[0].track_len(), 1);
    assert_eq!(sessions[1].track_len(), 0);

    // writing back and reloading keeps the same sessions
    store.save(&sessions).expect("save");
    let again = store.load().expect("reload");

    assert_eq!(again.len(), 2);
    assert_eq!(again[0].date, sessions[0].date);
    assert_eq!(again[0].track_len(), 1);
}

#[test]
fn large_store_loads_back_completely() {
    let path = setup_test_store("large_store");
    populate_many_sessions(&path, 100);

    let store = SessionStore::open(&path);
    let sessions = store.load().expect("load");

    assert_eq!(sessions.len(), 100);
    assert!(sessions.windows(2).all(|w| w[0].date <= w[1].date));
}
