//! Time utilities: parsing HH:MM, minutes since midnight, decimal-hour formatting.

use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn minutes_of_day(t: NaiveTime) -> i64 {
    i64::from(t.hour() * 60 + t.minute())
}

/// Minutes → hours with two decimals and a comma separator ("8,50").
///
/// The integer part is `floor(min / 60)` and the fraction is `|min % 60| / 60`,
/// so negative values do not mirror positive ones (-61 → "-1,98").
pub fn minutes_to_hours_str(mins: i64) -> String {
    let h = mins.div_euclid(60);
    let m = (mins % 60).abs();
    let value = h as f64 + m as f64 / 60.0;
    format!("{:.2}", value).replace('.', ",")
}

/// Serde adapter storing a `NaiveTime` as "HH:MM".
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_time(&raw).ok_or_else(|| de::Error::custom(format!("invalid time '{raw}'")))
    }
}
