use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database with its key-value table
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    info("Initializing rTimesheet…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", cfg.database);

    // Opening the repository creates the database file and table.
    let repo = cfg.open_repository()?;
    tracing::info!(database = %cfg.database, entries = repo.len(), "database initialized");

    success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
