use chrono::{DateTime, Duration, Utc};

use crate::shared::datetime::interval::Interval;

/// Trailing window applied when a request leaves its range open.
const DEFAULT_TRAILING_DAYS: i64 = 14;

/// A request range resolved onto the bucket grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRange {
    pub interval: Interval,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub bucket_count: u64,
}

impl ResolvedRange {
    /// Resolve the raw request range against `now`.
    ///
    /// The caller captures `now` once per run so every entity resolves
    /// against identical bounds.
    pub fn resolve(
        interval: Interval,
        date_from: Option<DateTime<Utc>>,
        date_to: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        let date_from = date_from.unwrap_or_else(|| now - Duration::days(DEFAULT_TRAILING_DAYS));
        let date_to = date_to.unwrap_or(now);

        // An inverted range is an empty series, not an error.
        let span = (date_to - date_from).num_seconds().max(0) as u64;
        let bucket_count = span / interval.seconds();

        Self {
            interval,
            date_from,
            date_to,
            bucket_count,
        }
    }
}
