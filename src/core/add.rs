use crate::core::calculator;
use crate::errors::{AppError, AppResult};
use crate::models::{BreakSpec, Entry};
use crate::utils::{date, time};
use chrono::NaiveDate;
use uuid::Uuid;

/// Raw values as typed by the user, before any validation.
#[derive(Debug, Clone, Default)]
pub struct EntryForm {
    pub employee: String,
    pub date: String,
    pub time_in: String,
    pub time_out: String,
    pub break_min: String,
    pub lunch_in: String,
    pub lunch_out: String,
    pub notes: String,
}

impl EntryForm {
    /// Validate the form and build a new entry with a fresh id.
    ///
    /// Giving either lunch field switches the entry to the lunch-interval
    /// layout, in which case both become mandatory.
    pub fn build(&self) -> AppResult<Entry> {
        let employee = self.employee.trim();
        let uses_lunch = !self.lunch_in.trim().is_empty() || !self.lunch_out.trim().is_empty();

        //
        // 1. Required fields
        //
        let required: [(&'static str, &str); 4] = [
            ("employee", employee),
            ("date", self.date.as_str()),
            ("time in", self.time_in.as_str()),
            ("time out", self.time_out.as_str()),
        ];
        if let Some((name, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(AppError::MissingField(*name));
        }
        if uses_lunch {
            if self.lunch_in.trim().is_empty() {
                return Err(AppError::MissingField("lunch in"));
            }
            if self.lunch_out.trim().is_empty() {
                return Err(AppError::MissingField("lunch out"));
            }
        }

        //
        // 2. Parse
        //
        let d: NaiveDate =
            date::parse_date(&self.date).ok_or_else(|| AppError::InvalidDate(self.date.clone()))?;
        let time_in = parse_required_time(&self.time_in)?;
        let time_out = parse_required_time(&self.time_out)?;

        let pause = if uses_lunch {
            BreakSpec::Interval {
                lunch_in: parse_required_time(&self.lunch_in)?,
                lunch_out: parse_required_time(&self.lunch_out)?,
            }
        } else {
            BreakSpec::Minutes {
                break_min: parse_break_minutes(&self.break_min),
            }
        };

        //
        // 3. Compute
        //
        let worked = calculator::calculate(time_in, time_out, &pause)?;

        Ok(Entry {
            id: Uuid::new_v4().to_string(),
            employee: employee.to_string(),
            date: d,
            time_in,
            time_out,
            pause,
            notes: self.notes.trim().to_string(),
            total_min: worked.total_min,
            extras_min: worked.extras_min,
            haver_min: worked.haver_min,
        })
    }
}

fn parse_required_time(raw: &str) -> AppResult<chrono::NaiveTime> {
    time::parse_time(raw).ok_or_else(|| AppError::InvalidTime(raw.to_string()))
}

/// Leading integer of the input ("45min" → 45, "30.5" → 30, "-15" → -15).
/// Input without leading digits counts as no break.
pub fn parse_break_minutes(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0;
    }
    // saturate absurdly long inputs instead of failing
    digits.parse::<i64>().map(|n| sign * n).unwrap_or(sign * i64::MAX)
}

/// The two demo rows offered by the `seed` command, dated `day`:
/// one with a break in minutes, one with a lunch interval.
pub fn demo_entries(day: NaiveDate) -> AppResult<Vec<Entry>> {
    let iso = day.format("%Y-%m-%d").to_string();

    let ana = EntryForm {
        employee: "Ana Souza".to_string(),
        date: iso.clone(),
        time_in: "08:00".to_string(),
        time_out: "17:00".to_string(),
        break_min: "60".to_string(),
        notes: "Trabalho normal".to_string(),
        ..Default::default()
    };
    let bruno = EntryForm {
        employee: "Bruno Lima".to_string(),
        date: iso,
        time_in: "09:00".to_string(),
        time_out: "18:00".to_string(),
        lunch_in: "12:30".to_string(),
        lunch_out: "13:30".to_string(),
        ..Default::default()
    };

    Ok(vec![ana.build()?, bruno.build()?])
}
