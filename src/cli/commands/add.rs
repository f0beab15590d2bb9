use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::EntryForm;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::{date, minutes_to_hours_str};

/// Record a work entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        employee,
        date: d,
        start,
        end,
        break_min,
        lunch_in,
        lunch_out,
        notes,
    } = cmd
    {
        //
        // 1. Collect the raw form (date defaults to today)
        //
        let form = EntryForm {
            employee: employee.clone(),
            date: d
                .clone()
                .unwrap_or_else(|| date::today().format("%Y-%m-%d").to_string()),
            time_in: start.clone(),
            time_out: end.clone(),
            break_min: break_min.clone().unwrap_or_default(),
            lunch_in: lunch_in.clone().unwrap_or_default(),
            lunch_out: lunch_out.clone().unwrap_or_default(),
            notes: notes.clone().unwrap_or_default(),
        };

        //
        // 2. Validate + compute, before touching storage
        //
        let entry = form.build()?;

        //
        // 3. Persist
        //
        let mut repo = cfg.open_repository()?;
        repo.add(entry.clone())?;
        tracing::info!(id = %entry.id, employee = %entry.employee, date = %entry.date, "entry added");

        success(format!(
            "Entry added: {} on {} | Total: {} h | Overtime: {} h | Deficit: {} h",
            entry.employee,
            entry.date_str(),
            minutes_to_hours_str(entry.total_min),
            minutes_to_hours_str(entry.extras_min),
            minutes_to_hours_str(entry.haver_min),
        ));
    }

    Ok(())
}
