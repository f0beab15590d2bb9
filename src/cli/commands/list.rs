use crate::cli::commands::filter_from_args;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::view::{ReportSummary, headers, to_rows};
use crate::errors::AppResult;
use crate::models::Entry;
use crate::utils::formatting::bold;
use crate::utils::minutes_to_hours_str;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter, json } = cmd {
        let filter = filter_from_args(filter)?;
        let repo = cfg.open_repository()?;
        let entries = repo.query(&filter);

        if *json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
            return Ok(());
        }

        if entries.is_empty() {
            println!("No entries found.");
            return Ok(());
        }

        println!("{}", render_table(&entries));
        print_summary(&ReportSummary::from_entries(&entries));
    }
    Ok(())
}

fn render_table(entries: &[Entry]) -> String {
    // Names and notes read left-aligned, numbers right-aligned.
    let columns = headers()
        .into_iter()
        .enumerate()
        .map(|(i, h)| match i {
            0 | 7 => Column::left(h),
            _ => Column::right(h),
        })
        .collect();

    let mut table = Table::new(columns);
    for row in to_rows(entries) {
        table.add_row(row.cells());
    }
    table.render()
}

fn print_summary(summary: &ReportSummary) {
    println!(
        "{} {} | Total: {} h | Overtime: {} h | Deficit: {} h | Balance: {} h",
        bold("Entries:"),
        summary.count,
        minutes_to_hours_str(summary.total_min),
        minutes_to_hours_str(summary.extras_min),
        minutes_to_hours_str(summary.haver_min),
        minutes_to_hours_str(summary.balance_min()),
    );
}
