use crate::errors::AppResult;
use crate::models::Entry;
use crate::utils::date::parse_optional_date;
use chrono::NaiveDate;

/// Report filter. Every field is optional; set fields are AND-ed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    /// Case-insensitive substring of the employee name
    pub employee: Option<String>,
    /// First day included
    pub from: Option<NaiveDate>,
    /// Last day included
    pub to: Option<NaiveDate>,
}

impl ReportFilter {
    /// Build a filter from raw CLI/form strings. Blank values mean "no filter".
    pub fn from_raw(employee: Option<&str>, from: Option<&str>, to: Option<&str>) -> AppResult<Self> {
        let employee = employee
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(Self {
            employee,
            from: parse_optional_date(from)?,
            to: parse_optional_date(to)?,
        })
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(name) = &self.employee {
            let needle = name.trim().to_lowercase();
            if !needle.is_empty() && !entry.employee.to_lowercase().contains(&needle) {
                return false;
            }
        }

        // Dates carry no time of day, so `<= to` already covers the whole last day.
        if let Some(from) = self.from
            && entry.date < from
        {
            return false;
        }
        if let Some(to) = self.to
            && entry.date > to
        {
            return false;
        }

        true
    }

    pub fn is_empty(&self) -> bool {
        self.employee.is_none() && self.from.is_none() && self.to.is_none()
    }
}

/// Filter a slice of entries and sort the result by (date, employee).
///
/// The sort is stable: entries with the same date and employee keep their
/// insertion order.
pub fn query(entries: &[Entry], filter: &ReportFilter) -> Vec<Entry> {
    let mut list: Vec<Entry> = entries
        .iter()
        .filter(|e| filter.matches(e))
        .cloned()
        .collect();

    list.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.employee.cmp(&b.employee))
    });
    list
}
