use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Engine;
use crate::errors::AppResult;
use crate::store::SessionStore;
use crate::ui::messages::{header, metric};
use crate::utils::duration::format_hm;

/// Show progress statistics over the whole history.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Stats) {
        let store = SessionStore::open(&cfg.store);
        let sessions = store.load()?;

        let stats = Engine::new().progress_stats(&sessions);

        header("Walking progress");
        metric("Total sessions:", stats.total_sessions);
        metric(
            "Completed:",
            format!(
                "{} ({:.0}%)",
                stats.completed_sessions,
                stats.completion_rate() * 100.0
            ),
        );
        metric("Total time:", format_hm(stats.total_walking_time));
        metric("Day streak:", stats.current_streak);

        let avg_minutes = (f64::from(stats.average_duration) / 60.0).round() as u32;
        metric("Average session:", format!("{} minutes", avg_minutes));
    }
    Ok(())
}
