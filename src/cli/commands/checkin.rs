use crate::cli::parser::Commands;
use crate::core::checkin::{CheckIn, Coordinates};
use crate::errors::AppResult;
use crate::ui::messages::success;
use chrono::Local;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Checkin { employee, lat, lon } = cmd {
        let location = match (lat, lon) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude: *latitude,
                longitude: *longitude,
            }),
            _ => None,
        };

        let check_in = CheckIn::new(employee, Local::now(), location);
        success(check_in.message());
    }
    Ok(())
}
