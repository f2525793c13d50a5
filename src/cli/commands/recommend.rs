use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Engine;
use crate::errors::AppResult;
use crate::store::SessionStore;
use crate::ui::messages::{header, suggestion};
use crate::utils::colors::{RESET, color_for_delta};
use crate::utils::duration::{format_clock, format_minutes_phrase};
use crate::utils::formatting::describe_confidence;

/// Recommend the duration for the next walk.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Recommend) {
        let store = SessionStore::open(&cfg.store);
        let sessions = store.load()?;

        let rec = Engine::new().recommend(&sessions);

        header("Recommended next walk");
        suggestion(format!(
            "{} ({})",
            format_minutes_phrase(rec.recommended_duration),
            format_clock(rec.recommended_duration)
        ));
        println!("   {}", rec.reason);

        // difference against the most recent session
        if let Some(last) = sessions.last() {
            let delta = i64::from(rec.recommended_duration) - i64::from(last.duration);
            if delta != 0 {
                let sign = if delta > 0 { "+" } else { "-" };
                println!(
                    "   {}{}{} vs your last walk{}",
                    color_for_delta(delta),
                    sign,
                    format_clock(delta.unsigned_abs() as u32),
                    RESET
                );
            }
        }

        let (label, color) = describe_confidence(rec.confidence.as_str());
        println!("   {}{} confidence{}", color, label, RESET);
    }
    Ok(())
}
