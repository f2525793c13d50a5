use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::store::SessionStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        index,
        date: date_str,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;

        //
        // Confirmation prompt
        //
        let prompt = if let Some(n) = index {
            format!(
                "Delete session #{} for {}? This action is irreversible.",
                n, d
            )
        } else {
            format!(
                "Delete ALL sessions for {}? This action is irreversible.",
                d
            )
        };

        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let store = SessionStore::open(&cfg.store);

        match DeleteLogic::apply(&store, cfg, d, *index) {
            Ok(_) => {
                if let Some(n) = index {
                    success(format!("Session #{} for {} has been deleted.", n, d));
                } else {
                    success(format!("All sessions for {} have been deleted.", d));
                }
            }
            Err(e) => {
                return Err(e);
            }
        }
    }

    Ok(())
}
