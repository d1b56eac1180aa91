use chrono::{DateTime, Datelike, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized interval: {0}")]
pub struct InvalidIntervalError(pub String);

/// Bucket granularity for trend series.
///
/// All boundary math is UTC end to end.
// TODO: localize bucket boundaries to the requester's timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Minute,
    Hour,
    Day,
    Week,
    Month,
}

impl Interval {
    /// Resolve a granularity name. A missing name defaults to `Day`.
    pub fn parse(name: Option<&str>) -> Result<Self, InvalidIntervalError> {
        match name {
            None => Ok(Interval::Day),
            Some("minute") => Ok(Interval::Minute),
            Some("hour") => Ok(Interval::Hour),
            Some("day") => Ok(Interval::Day),
            Some("week") => Ok(Interval::Week),
            Some("month") => Ok(Interval::Month),
            Some(other) => Err(InvalidIntervalError(other.to_string())),
        }
    }

    /// Fixed bucket width in seconds. Month is a nominal 30 days, not a
    /// calendar month; grid stepping relies on this staying constant.
    pub fn seconds(&self) -> u64 {
        match self {
            Interval::Minute => 60,
            Interval::Hour => 3_600,
            Interval::Day => 86_400,
            Interval::Week => 604_800,
            Interval::Month => 2_592_000,
        }
    }

    /// Store-side truncation function for this granularity.
    pub fn bucket_expr(&self) -> &'static str {
        match self {
            Interval::Minute => "toStartOfMinute",
            Interval::Hour => "toStartOfHour",
            Interval::Day => "toStartOfDay",
            Interval::Week => "toStartOfWeek",
            Interval::Month => "toStartOfMonth",
        }
    }

    /// Truncate a timestamp to the start of the bucket containing it.
    pub fn truncate(&self, ts: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Interval::Minute => ts
                .date_naive()
                .and_hms_opt(ts.hour(), ts.minute(), 0)
                .unwrap()
                .and_utc(),
            Interval::Hour => ts
                .date_naive()
                .and_hms_opt(ts.hour(), 0, 0)
                .unwrap()
                .and_utc(),
            Interval::Day => ts.date_naive().and_hms_opt(0, 0, 0).unwrap().and_utc(),
            Interval::Week => {
                // Weeks start on Sunday, matching the store's toStartOfWeek.
                let days_into_week = ts.weekday().num_days_from_sunday() as i64;
                (ts.date_naive() - Duration::days(days_into_week))
                    .and_hms_opt(0, 0, 0)
                    .unwrap()
                    .and_utc()
            }
            Interval::Month => ts
                .date_naive()
                .with_day(1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
                .and_utc(),
        }
    }
}
