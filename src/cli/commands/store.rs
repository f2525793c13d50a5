use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{SessionStore, stats};
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Store { check, info } = cmd {
        let store = SessionStore::open(&cfg.store);

        //
        // 1) INFO
        //
        if *info {
            stats::print_store_info(&store)?;
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{}▶ Running store check…{}", CYAN, RESET);

            let problems = stats::check_store(&store)?;

            if problems.is_empty() {
                println!("{}✔ Store check passed.{}\n", GREEN, RESET);
            } else {
                println!(
                    "{}✘ Store check found {} problem(s):{}",
                    RED,
                    problems.len(),
                    RESET
                );
                for p in &problems {
                    println!("  - {}", p);
                }
                println!();
            }
        }
    }

    Ok(())
}
