use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{GpsPoint, WalkSession};
use crate::store::SessionStore;
use crate::store::audit::wlog;
use crate::ui::messages::success;
use crate::utils::duration::format_clock;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(
        store: &SessionStore,
        cfg: &Config,
        date: DateTime<Utc>,
        duration: u32,
        target: u32,
        track_file: Option<&Path>,
    ) -> AppResult<()> {
        // ------------------------------------------------
        // Completion is derived here, never passed in
        // ------------------------------------------------
        let completed = duration >= target;

        // ------------------------------------------------
        // 1️⃣ OPTIONAL GPS TRACK
        // ------------------------------------------------
        let gps_track = match track_file {
            Some(path) => Some(load_track(path)?),
            None => None,
        };

        // empty track files add nothing to the record
        let gps_track = gps_track.filter(|t: &Vec<GpsPoint>| !t.is_empty());

        // ------------------------------------------------
        // 2️⃣ INSERT (keeps the store in date order)
        // ------------------------------------------------
        let mut session = WalkSession::new(date, duration, completed);
        session.gps_track = gps_track;

        let date_label = session.date_str();
        let points = session.track_len();

        store.insert(session)?;

        // ------------------------------------------------
        // 3️⃣ OPERATIONS LOG (non-blocking)
        // ------------------------------------------------
        if cfg.log_operations {
            let msg = if completed {
                format!("Recorded completed {} walk", format_clock(duration))
            } else {
                format!(
                    "Recorded incomplete {} walk (target {})",
                    format_clock(duration),
                    format_clock(target)
                )
            };
            if let Err(e) = wlog(&Config::log_file(), "add", &date_label, &msg) {
                eprintln!("⚠️ Failed to write internal log: {}", e);
            }
        }

        if completed {
            success(format!(
                "Recorded {} walk on {}. Target reached!",
                format_clock(duration),
                date_label
            ));
        } else {
            success(format!(
                "Recorded {} walk on {} (stopped before the {} target).",
                format_clock(duration),
                date_label,
                format_clock(target)
            ));
        }

        if points > 0 {
            println!("📍 GPS track attached ({} points)", points);
        }

        Ok(())
    }
}

/// Load a GPS track from a JSON file holding an array of points.
fn load_track(path: &Path) -> AppResult<Vec<GpsPoint>> {
    let content = fs::read_to_string(path)?;
    let track: Vec<GpsPoint> = serde_json::from_str(&content)
        .map_err(|e| AppError::InvalidTrack(format!("{}: {}", path.display(), e)))?;

    let bad = track.iter().filter(|p| !p.is_valid()).count();
    if bad > 0 {
        return Err(AppError::InvalidTrack(format!(
            "{}: {} point(s) with out-of-range coordinates",
            path.display(),
            bad
        )));
    }

    Ok(track)
}
