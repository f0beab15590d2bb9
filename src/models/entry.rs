use super::break_spec::BreakSpec;
use crate::utils::time::hhmm;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One work-day record for one employee.
///
/// Field names follow the stored snapshot layout (camelCase), so a snapshot
/// written by an older version of the form loads unchanged, negative
/// `breakMin` values included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub employee: String,
    pub date: NaiveDate, // ⇔ "YYYY-MM-DD"
    #[serde(with = "hhmm")]
    pub time_in: NaiveTime, // ⇔ "HH:MM"
    #[serde(with = "hhmm")]
    pub time_out: NaiveTime, // ⇔ "HH:MM"
    #[serde(flatten)]
    pub pause: BreakSpec, // ⇔ breakMin | lunchIn + lunchOut
    #[serde(default)]
    pub notes: String,
    pub total_min: i64,
    #[serde(default)]
    pub extras_min: i64,
    #[serde(default)]
    pub haver_min: i64,
}

impl Entry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Date in the local display layout (DD/MM/YYYY).
    pub fn date_display(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }

    pub fn time_in_str(&self) -> String {
        self.time_in.format("%H:%M").to_string()
    }

    pub fn time_out_str(&self) -> String {
        self.time_out.format("%H:%M").to_string()
    }
}
