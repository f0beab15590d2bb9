//! Worked-minutes calculation for a single day.
//!
//! One calculator serves both ways of recording a pause (fixed minutes or a
//! lunch interval); see [`BreakSpec`].

use crate::errors::{AppError, AppResult};
use crate::models::BreakSpec;
use crate::utils::time::minutes_of_day;
use chrono::NaiveTime;

/// Standard working day (8h).
pub const STANDARD_DAY_MINUTES: i64 = 8 * 60;

/// Derived metrics for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkDuration {
    pub total_min: i64,
    /// Minutes above the standard day
    pub extras_min: i64,
    /// Minutes missing to reach the standard day
    pub haver_min: i64,
}

impl WorkDuration {
    pub fn from_total(total_min: i64) -> Self {
        Self {
            total_min,
            extras_min: (total_min - STANDARD_DAY_MINUTES).max(0),
            haver_min: (STANDARD_DAY_MINUTES - total_min).max(0),
        }
    }
}

/// max(0, (end - start) - pause)
pub fn worked_minutes(start: i64, end: i64, pause: i64) -> i64 {
    ((end - start) - pause).max(0)
}

/// Validate the time pair(s) and compute the day's metrics.
pub fn calculate(
    time_in: NaiveTime,
    time_out: NaiveTime,
    pause: &BreakSpec,
) -> AppResult<WorkDuration> {
    let start = minutes_of_day(time_in);
    let end = minutes_of_day(time_out);

    if end <= start {
        return Err(AppError::TimeOutNotAfterTimeIn);
    }

    if let Some((lunch_in, lunch_out)) = pause.lunch_window()
        && minutes_of_day(lunch_out) <= minutes_of_day(lunch_in)
    {
        return Err(AppError::LunchOutNotAfterLunchIn);
    }

    let total = worked_minutes(start, end, pause.duration_minutes());
    Ok(WorkDuration::from_total(total))
}
