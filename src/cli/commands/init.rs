use crate::config::Config;
use crate::errors::AppResult;
use crate::store::audit;

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the session store (prod or test mode)
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ PREPARA CONFIGURAZIONE
    //
    // Config::init_all crea:
    //   ~/.walklog/
    //   ~/.walklog/walklog.conf
    // e il session store configurato.
    //
    if let Some(custom) = &cli.store {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let cfg = Config::load();
    let store_path = cfg.store.clone();

    println!("⚙️  Initializing walklog…");
    println!("📄 Config file   : {}", path.display());
    println!("🗂️  Session store : {}", &store_path);

    //
    // 2️⃣ LOG INTERNO (non bloccante)
    //
    if cfg.log_operations
        && let Err(e) = audit::wlog(
            &Config::log_file(),
            "init",
            &store_path,
            &format!("Session store initialized at {}", &store_path),
        )
    {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 walklog initialization completed!");
    Ok(())
}
