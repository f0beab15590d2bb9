use crate::cli::commands::filter_from_args;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filter,
        force,
    } = cmd
    {
        let filter = filter_from_args(filter)?;
        let repo = cfg.open_repository()?;
        let file = file.as_deref().unwrap_or(cfg.export_file.as_str());
        ExportLogic::export(&repo, &filter, *format, file, *force)?;
    }
    Ok(())
}
