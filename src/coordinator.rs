//! Partitions a candidate list's index range across a worker pool.

use std::ops::Range;

/// Split `[0, n)` into `workers` contiguous, half-open, non-overlapping
/// ranges covering the whole span. The first `n % workers` ranges get one
/// extra element. If `workers == 0`, returns an empty vector.
pub fn partition(n: usize, workers: usize) -> Vec<Range<usize>> {
    if workers == 0 {
        return Vec::new();
    }
    partition_range(0, n, workers)
}

/// Split `[lo, hi)` into `k` contiguous, half-open ranges as evenly as
/// possible, the first `(hi - lo) % k` ranges getting one extra element.
/// `k` is clamped to at least 1 and at most `hi - lo` (an empty range with
/// `k > 0` degenerates to a single empty range).
pub fn partition_range(lo: usize, hi: usize, k: usize) -> Vec<Range<usize>> {
    let span = hi.saturating_sub(lo);
    if k == 0 {
        return Vec::new();
    }
    if span == 0 {
        return vec![lo..lo; k];
    }
    let k = k.min(span).max(1);
    let base = span / k;
    let extra = span % k;

    let mut ranges = Vec::with_capacity(k);
    let mut start = lo;
    for i in 0..k {
        let size = base + if i < extra { 1 } else { 0 };
        let end = start + size;
        ranges.push(start..end);
        start = end;
    }
    ranges
}

/// Default worker count: `min(16, available_parallelism)`. Overridable by
/// callers (the CLI exposes `--workers`).
pub fn default_worker_count() -> usize {
    16.min(num_cpus::get())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_cover_exactly_and_distribute_remainder() {
        for n in [0usize, 1, 7, 16, 100] {
            for k in [1usize, 3, 8, 16] {
                let ranges = partition(n, k);
                assert_eq!(ranges.len(), k);
                let total: usize = ranges.iter().map(|r| r.end - r.start).sum();
                assert_eq!(total, n);
                // contiguous and non-overlapping
                let mut expected_start = 0;
                for r in &ranges {
                    assert_eq!(r.start, expected_start);
                    expected_start = r.end;
                }
                assert_eq!(expected_start, n);
                // sizes differ by at most 1
                let sizes: Vec<usize> = ranges.iter().map(|r| r.end - r.start).collect();
                let max = *sizes.iter().max().unwrap();
                let min = *sizes.iter().min().unwrap();
                assert!(max - min <= 1);
            }
        }
    }

    #[test]
    fn zero_workers_yields_empty_partition() {
        assert!(partition(10, 0).is_empty());
    }

    #[test]
    fn default_worker_count_is_bounded() {
        let n = default_worker_count();
        assert!(n >= 1 && n <= 16);
    }
}
