/// Running-total post-pass for cumulative display mode.
///
/// Kept separate from fetch and merge so other display transforms can slot
/// in beside it without touching the grid logic.
pub fn running_total(data: &[u64]) -> Vec<u64> {
    let mut sum = 0u64;
    data.iter()
        .map(|count| {
            sum += count;
            sum
        })
        .collect()
}
