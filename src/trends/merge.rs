use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::trends::source::AggregateRow;
use crate::trends::types::Bucket;

/// Merge the sparse store result into the dense zero grid.
///
/// Both inputs are keyed by bucket start and summed, so additional sparse
/// sources compose by the same rule. The store already truncated every
/// sparse start onto the grid; no re-truncation happens here.
pub fn merge_series(sparse: &[AggregateRow], dense: Vec<Bucket>) -> Vec<Bucket> {
    let mut by_start: BTreeMap<DateTime<Utc>, u64> = dense
        .into_iter()
        .map(|bucket| (bucket.start, bucket.count))
        .collect();

    for row in sparse {
        *by_start.entry(row.bucket_start).or_insert(0) += row.total;
    }

    by_start
        .into_iter()
        .map(|(start, count)| Bucket { start, count })
        .collect()
}
