use crate::cli::parser::Commands;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::store::SessionStore;
use crate::utils::date::parse_when;
use crate::utils::duration::parse_duration;
use chrono::Utc;
use std::path::Path;

/// Record a finished walking session.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Add {
        duration,
        target,
        date,
        track,
    } = cmd
    {
        //
        // 1. Parse walked duration (mandatory)
        //
        let duration_secs = parse_duration(duration)?;

        //
        // 2. Parse target (flag, or the configured default)
        //
        let target_raw = target.as_deref().unwrap_or(&cfg.default_target);
        let target_secs = parse_duration(target_raw)?;

        //
        // 3. Parse end timestamp (optional, defaults to now)
        //
        let when = match date {
            Some(raw) => parse_when(raw)?,
            None => Utc::now(),
        };

        //
        // 4. Open store and execute logic
        //
        let store = SessionStore::open(&cfg.store);

        AddLogic::apply(
            &store,
            cfg,
            when,
            duration_secs,
            target_secs,
            track.as_deref().map(Path::new),
        )?;
    }

    Ok(())
}
