use chrono::{DateTime, NaiveDateTime, Utc};

use crate::server::error::AppError;

/// Formats accepted for a show's start time, tried in order.
const START_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];

/// Parses a record id taken from the URL path.
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::NotFound)` - The segment is not an integer, so no record can match
pub fn parse_path_id(value: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .map_err(|_| AppError::NotFound(format!("No record with id '{}'", value)))
}

/// Parses a record id submitted in a form field.
pub fn parse_form_id(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok()
}

/// Parses a submitted start time, interpreted as UTC.
///
/// # Returns
/// - `Some(DateTime<Utc>)` - The value matched one of the accepted formats
/// - `None` - The value matched none of them
pub fn parse_start_time(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}
