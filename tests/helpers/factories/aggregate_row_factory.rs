use chrono::{DateTime, TimeZone, Utc};

use crate::trends::source::AggregateRow;

pub struct AggregateRowFactory {
    inner: AggregateRow,
}

impl AggregateRowFactory {
    pub fn new() -> Self {
        Self {
            inner: AggregateRow {
                total: 1,
                bucket_start: Utc.with_ymd_and_hms(2020, 8, 10, 0, 0, 0).unwrap(),
            },
        }
    }

    pub fn with_total(mut self, value: u64) -> Self {
        self.inner.total = value;
        self
    }

    pub fn at(mut self, value: DateTime<Utc>) -> Self {
        self.inner.bucket_start = value;
        self
    }

    pub fn create(self) -> AggregateRow {
        self.inner
    }
}
