//! Entry → display row mapping and report totals.
//! Used by both the `list` table and the exporters.

use crate::models::Entry;
use crate::utils::minutes_to_hours_str;

/// One report line, every column already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub employee: String,
    pub date: String,
    pub time_in: String,
    pub time_out: String,
    pub break_min: String,
    pub lunch_in: String,
    pub lunch_out: String,
    pub notes: String,
    pub total: String,
    pub extras: String,
    pub haver: String,
}

impl ReportRow {
    pub fn from_entry(e: &Entry) -> Self {
        let (lunch_in, lunch_out) = match e.pause.lunch_window() {
            Some((i, o)) => (i.format("%H:%M").to_string(), o.format("%H:%M").to_string()),
            None => (String::new(), String::new()),
        };

        Self {
            employee: e.employee.clone(),
            date: e.date_display(),
            time_in: e.time_in_str(),
            time_out: e.time_out_str(),
            break_min: e.pause.break_min().map(|m| m.to_string()).unwrap_or_default(),
            lunch_in,
            lunch_out,
            notes: e.notes.clone(),
            total: minutes_to_hours_str(e.total_min),
            extras: minutes_to_hours_str(e.extras_min),
            haver: minutes_to_hours_str(e.haver_min),
        }
    }

    /// Cells in [`headers`] order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.employee.clone(),
            self.date.clone(),
            self.time_in.clone(),
            self.time_out.clone(),
            self.break_min.clone(),
            self.lunch_in.clone(),
            self.lunch_out.clone(),
            self.notes.clone(),
            self.total.clone(),
            self.extras.clone(),
            self.haver.clone(),
        ]
    }
}

/// Column titles shared by the table and the CSV export.
pub fn headers() -> Vec<&'static str> {
    vec![
        "Employee",
        "Date",
        "In",
        "Out",
        "Break (min)",
        "Lunch in",
        "Lunch out",
        "Notes",
        "Total (h)",
        "Overtime (h)",
        "Deficit (h)",
    ]
}

pub fn to_rows(entries: &[Entry]) -> Vec<ReportRow> {
    entries.iter().map(ReportRow::from_entry).collect()
}

/// Sums over a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub count: usize,
    pub total_min: i64,
    pub extras_min: i64,
    pub haver_min: i64,
}

impl ReportSummary {
    pub fn from_entries(entries: &[Entry]) -> Self {
        entries.iter().fold(Self::default(), |acc, e| Self {
            count: acc.count + 1,
            total_min: acc.total_min + e.total_min,
            extras_min: acc.extras_min + e.extras_min,
            haver_min: acc.haver_min + e.haver_min,
        })
    }

    /// Overtime minus deficit over the whole report.
    pub fn balance_min(&self) -> i64 {
        self.extras_min - self.haver_min
    }
}
