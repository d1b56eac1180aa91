use chrono::{DateTime, Utc};

/// Human-readable bucket caption, e.g. "Thu. 6 August".
pub fn bucket_caption(start: DateTime<Utc>) -> String {
    start.format("%a. %-d %B").to_string()
}

/// ISO date for a bucket start.
pub fn iso_day(start: DateTime<Utc>) -> String {
    start.format("%Y-%m-%d").to_string()
}
