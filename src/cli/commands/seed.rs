use crate::config::Config;
use crate::core::add::demo_entries;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

/// Append the demo entries, dated today.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let demo = demo_entries(date::today())?;
    let count = demo.len();

    let mut repo = cfg.open_repository()?;
    repo.add_all(demo)?;

    success(format!("{count} demo entries added."));
    Ok(())
}
