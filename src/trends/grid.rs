use chrono::Duration;

use crate::trends::range::ResolvedRange;
use crate::trends::types::Bucket;

/// Produce the dense zero-filled series: one bucket per grid slot, stepping
/// back one bucket width at a time from the resolved end of the range.
///
/// Output order is not part of the contract; the merge step sorts by key.
pub fn zero_grid(range: &ResolvedRange) -> Vec<Bucket> {
    let step = range.interval.seconds() as i64;

    (0..range.bucket_count)
        .map(|slot| Bucket {
            start: range
                .interval
                .truncate(range.date_to - Duration::seconds(slot as i64 * step)),
            count: 0,
        })
        .collect()
}
