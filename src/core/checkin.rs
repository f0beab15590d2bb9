//! One-shot check-in confirmation. Independent from the entry report.

use chrono::{DateTime, Local};

/// A device position, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone)]
pub struct CheckIn {
    pub employee: String,
    pub at: DateTime<Local>,
    pub location: Option<Coordinates>,
}

impl CheckIn {
    pub fn new(employee: &str, at: DateTime<Local>, location: Option<Coordinates>) -> Self {
        Self {
            employee: employee.trim().to_string(),
            at,
            location,
        }
    }

    pub fn location_label(&self) -> String {
        match self.location {
            Some(c) => format!("Latitude: {:.5}, Longitude: {:.5}", c.latitude, c.longitude),
            None => "Location not available".to_string(),
        }
    }

    pub fn message(&self) -> String {
        format!(
            "Check-in recorded!\n👤 Employee: {}\n🕒 Time:     {}\n📍 Location: {}",
            self.employee,
            self.at.format("%H:%M:%S"),
            self.location_label()
        )
    }
}
