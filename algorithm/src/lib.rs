use tracing::{debug, trace};

pub mod bits;

use bits::ReachableSums;

/// Minimum absolute difference between the sums of two partitions of
/// `stones`.
///
/// Classic 0/1 subset-sum: mark every sum up to `total / 2` reachable by
/// some subset, then balance against the largest marked sum. Weights are
/// `u32` and the total is accumulated in `u64`, so the sum itself cannot
/// overflow for any input that fits in memory.
pub fn min_difference(stones: &[u32]) -> u64 {
    let total: u64 = stones.iter().map(|&w| u64::from(w)).sum();
    let target = (total / 2) as usize;

    debug!(count = stones.len(), total, target, "folding stones into reachability set");

    let mut reachable = ReachableSums::new(target);
    for (i, &weight) in stones.iter().enumerate() {
        trace!(i, weight, "fold");
        reachable.insert_shifted(weight as usize);
    }

    let first_sum = reachable.max_reachable() as u64;
    let second_sum = total - first_sum;
    debug!(first_sum, second_sum, "best split found");

    // first_sum <= target <= second_sum, so no abs needed.
    second_sum - first_sum
}
