use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::SessionStore;
use crate::store::audit::wlog;
use crate::ui::messages::info;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete sessions recorded on `date`: a single one picked by 1-based
    /// `index` within that day, or all of them.
    pub fn apply(
        store: &SessionStore,
        cfg: &Config,
        date: NaiveDate,
        index: Option<usize>,
    ) -> AppResult<()> {
        let date_str = date.format("%Y-%m-%d").to_string();
        let on_date = store.sessions_on(date)?;

        if on_date.is_empty() {
            return Err(AppError::NoSessionsForDate(date_str));
        }

        if let Some(n) = index {
            let day_idx = n.checked_sub(1).ok_or(AppError::InvalidIndex(n))?;
            let (pos, _) = on_date.get(day_idx).ok_or(AppError::InvalidIndex(n))?;

            store.remove_at(*pos)?;

            log_deletion(cfg, &date_str, &format!("Deleted session #{}", n));
            info(format!("Deleted session #{} for {}", n, date));
            return Ok(());
        }

        // Delete all sessions for this date, back to front so the
        // remaining positions stay valid.
        let mut removed = 0;
        for (pos, _) in on_date.iter().rev() {
            store.remove_at(*pos)?;
            removed += 1;
        }

        log_deletion(cfg, &date_str, &format!("Deleted {} session(s)", removed));
        info(format!("Deleted {} session(s) for {}", removed, date));
        Ok(())
    }
}

fn log_deletion(cfg: &Config, target: &str, message: &str) {
    if cfg.log_operations
        && let Err(e) = wlog(&Config::log_file(), "del", target, message)
    {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }
}
