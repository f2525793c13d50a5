use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::WalkSession;
use crate::store::SessionStore;
use crate::utils::colors::{colorize_completed, colorize_optional};
use crate::utils::date;
use crate::utils::duration::{format_clock, format_hm};
use crate::utils::formatting::check_mark;
use crate::utils::table::Table;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        now,
        completed,
    } = cmd
    {
        let store = SessionStore::open(&cfg.store);
        let sessions = store.load()?;

        let bounds = if *now {
            let today = date::today();
            Some((today, today))
        } else {
            resolve_period(period)?
        };

        let selected: Vec<&WalkSession> = sessions
            .iter()
            .filter(|s| within(s, &bounds))
            .filter(|s| !*completed || s.completed)
            .collect();

        if selected.is_empty() {
            println!("No sessions found for the selected period.");
            return Ok(());
        }

        print_sessions(&selected);
    }
    Ok(())
}

/// `None` means the whole history.
fn resolve_period(period: &Option<String>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match period {
        Some(p) => date::range_bounds(p),
        None => Ok(Some(date::current_month_bounds())),
    }
}

fn within(s: &WalkSession, bounds: &Option<(NaiveDate, NaiveDate)>) -> bool {
    match bounds {
        None => true,
        Some((start, end)) => {
            let d = s.local_date();
            d >= *start && d <= *end
        }
    }
}

fn print_sessions(sessions: &[&WalkSession]) {
    let mut table = Table::new(&["#", "Date", "Time", "Duration", "Done", "GPS"]);

    // "#" is the session number within its day, the one `del --index` takes
    let mut day_index = 0usize;
    let mut prev_day: Option<NaiveDate> = None;

    let mut total_secs: u64 = 0;
    let mut completed_count = 0usize;

    for s in sessions {
        let day = s.local_date();
        day_index = if prev_day == Some(day) { day_index + 1 } else { 1 };
        prev_day = Some(day);

        total_secs += u64::from(s.duration);
        if s.completed {
            completed_count += 1;
        }

        let gps = if s.track_len() > 0 {
            format!("{} pts", s.track_len())
        } else {
            colorize_optional("--")
        };

        table.add_row(vec![
            day_index.to_string(),
            s.date_str(),
            s.local_time_str(),
            format_clock(s.duration),
            colorize_completed(check_mark(s.completed), s.completed),
            gps,
        ]);
    }

    print!("{}", table.render());

    println!(
        "\n{} session(s), {} completed, total {}",
        sessions.len(),
        completed_count,
        format_hm(total_secs)
    );
}
