use crate::utils::time::hhmm;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// How the non-worked part of a day is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BreakSpec {
    /// Lunch recorded as a start/end pair
    Interval {
        #[serde(rename = "lunchIn", with = "hhmm")]
        lunch_in: NaiveTime,
        #[serde(rename = "lunchOut", with = "hhmm")]
        lunch_out: NaiveTime,
    },
    /// Break recorded as a plain number of minutes.
    /// Signed: the web form stored whatever integer was typed.
    Minutes {
        #[serde(rename = "breakMin", default)]
        break_min: i64,
    },
}

impl BreakSpec {
    /// Duration of the break in minutes.
    /// An interval that is not chronological counts as zero.
    pub fn duration_minutes(&self) -> i64 {
        match self {
            BreakSpec::Minutes { break_min } => *break_min,
            BreakSpec::Interval {
                lunch_in,
                lunch_out,
            } => (*lunch_out - *lunch_in).num_minutes().max(0),
        }
    }

    pub fn break_min(&self) -> Option<i64> {
        match self {
            BreakSpec::Minutes { break_min } => Some(*break_min),
            BreakSpec::Interval { .. } => None,
        }
    }

    pub fn lunch_window(&self) -> Option<(NaiveTime, NaiveTime)> {
        match self {
            BreakSpec::Interval {
                lunch_in,
                lunch_out,
            } => Some((*lunch_in, *lunch_out)),
            BreakSpec::Minutes { .. } => None,
        }
    }
}

impl Default for BreakSpec {
    fn default() -> Self {
        BreakSpec::Minutes { break_min: 0 }
    }
}
