use crate::errors::AppResult;
use crate::store::SessionStore;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_store_info(store: &SessionStore) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let path = store.path().display().to_string();
    let file_size = fs::metadata(store.path()).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL SESSIONS
    //
    let sessions = store.load()?;
    let completed = sessions.iter().filter(|s| s.completed).count();

    println!(
        "{}• Total sessions:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        sessions.len(),
        RESET
    );
    println!(
        "{}• Completed:{} {}{}{}",
        CYAN, RESET, GREEN, completed, RESET
    );

    //
    // 3) DATE RANGE
    //
    let first = sessions.first().map(|s| s.date_str());
    let last = sessions.last().map(|s| s.date_str());

    let fmt_first = first.clone().unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.clone().unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE SESSIONS/DAY
    //
    if let (Some(f), Some(l)) = (
        sessions.first().map(|s| s.local_date()),
        sessions.last().map(|s| s.local_date()),
    ) {
        let days = (l - f).num_days().max(0) + 1;
        let avg = sessions.len() as f64 / days as f64;
        println!("{}• Average sessions/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}

/// Validate the store content. Returns one message per problem found;
/// an empty list means the store is sound.
pub fn check_store(store: &SessionStore) -> AppResult<Vec<String>> {
    let sessions = store.load()?;
    let mut problems = Vec::new();

    for (i, s) in sessions.iter().enumerate() {
        if s.duration == 0 {
            problems.push(format!("session {} ({}): zero duration", i, s.date_str()));
        }

        if let Some(track) = &s.gps_track {
            let bad = track.iter().filter(|p| !p.is_valid()).count();
            if bad > 0 {
                problems.push(format!(
                    "session {} ({}): {} GPS point(s) out of range",
                    i,
                    s.date_str(),
                    bad
                ));
            }
        }
    }

    for pair in sessions.windows(2) {
        if pair[0].date > pair[1].date {
            problems.push(format!(
                "sessions out of order: {} after {}",
                pair[1].date.to_rfc3339(),
                pair[0].date.to_rfc3339()
            ));
        }
    }

    Ok(problems)
}
