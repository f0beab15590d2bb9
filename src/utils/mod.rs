pub mod date;
pub mod formatting;
pub mod table;
pub mod time;

pub use time::minutes_to_hours_str;
