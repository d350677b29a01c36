use chrono::{DateTime, Local};

use super::constants::PACK_FILE_DATE_FORMAT;

/// Formats a timestamp, defaulting to the current time and minute granularity.
pub fn date_time_as_string(dt: Option<DateTime<Local>>, format: Option<&str>) -> String {
    dt.unwrap_or(Local::now())
        .format(format.unwrap_or(PACK_FILE_DATE_FORMAT))
        .to_string()
}
