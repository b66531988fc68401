use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::CalendarError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Parse a form-style birth date and time into a local wall-clock date-time.
pub fn parse_birth_datetime(date: &str, time: &str) -> Result<NaiveDateTime, CalendarError> {
    let date = date.trim();
    let time = time.trim();
    let day = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| CalendarError::InvalidDate(date.to_string()))?;
    let clock = NaiveTime::parse_from_str(time, TIME_FORMAT)
        .map_err(|_| CalendarError::InvalidTime(time.to_string()))?;
    Ok(day.and_time(clock))
}
