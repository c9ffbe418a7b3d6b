use chrono::{DateTime, Utc};

/// Display styles for show start times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateFormat {
    /// `Monday May, 21, 2035 at 9:30PM`
    Full,
    /// `Mon 05, 21, 2035 9:30PM`
    Medium,
}

pub fn format_datetime(value: DateTime<Utc>, format: DateFormat) -> String {
    let pattern = match format {
        DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
        DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
    };

    value.format(pattern).to_string()
}
