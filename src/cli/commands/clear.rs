use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::export::fs_utils::ask_yes_no;
use std::io;

/// Delete every entry, after confirmation unless `--yes` is given.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes && !ask_yes_no(&mut io::stdin().lock(), "Delete ALL entries? [y/N]: ")? {
            info("Nothing deleted.");
            return Ok(());
        }

        let mut repo = cfg.open_repository()?;
        let removed = repo.clear()?;
        success(format!("{removed} entries deleted."));
    }
    Ok(())
}
