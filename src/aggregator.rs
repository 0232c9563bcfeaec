//! Collects per-worker, per-chunk emissions into five word-count buckets
//! for the currently active request, discarding anything from a
//! superseded request.

use crate::solver::SolutionChunk;

/// A published view of the aggregator's state after ingesting one chunk.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub request_id: u64,
    pub buckets: [Vec<String>; 5],
    pub is_final_overall: bool,
}

pub struct SolutionAggregator {
    active_request: u64,
    buckets: [Vec<String>; 5],
    pending: usize,
}

impl SolutionAggregator {
    pub fn new() -> Self {
        SolutionAggregator {
            active_request: 0,
            buckets: Default::default(),
            pending: 0,
        }
    }

    /// Start tracking a new request, superseding whatever was active. Any
    /// chunk tagged with an older request id ingested after this call is
    /// discarded.
    pub fn start_request(&mut self, request_id: u64, worker_count: usize) {
        if self.pending > 0 {
            log::warn!(
                "request {} superseded by {} with {} workers still pending",
                self.active_request,
                request_id,
                self.pending
            );
        }
        self.active_request = request_id;
        self.buckets = Default::default();
        self.pending = worker_count;
    }

    pub fn active_request(&self) -> u64 {
        self.active_request
    }

    /// Ingest one chunk. Returns `None` if it belongs to a request that has
    /// since been superseded by a newer `start_request` call (the chunk is
    /// silently discarded); otherwise returns the published snapshot after
    /// folding it in.
    pub fn ingest(&mut self, chunk: SolutionChunk) -> Option<Snapshot> {
        if chunk.request_id != self.active_request {
            log::debug!(
                "discarding chunk for superseded request {} (active is {})",
                chunk.request_id,
                self.active_request
            );
            return None;
        }

        for (bucket, mut solutions) in self.buckets.iter_mut().zip(chunk.buckets) {
            bucket.append(&mut solutions);
        }
        if chunk.is_final {
            self.pending = self.pending.saturating_sub(1);
        }

        let is_final_overall = self.pending == 0;
        if is_final_overall {
            log::info!(
                "request {} complete: {} total solutions",
                self.active_request,
                self.buckets.iter().map(Vec::len).sum::<usize>()
            );
        }

        Some(Snapshot {
            request_id: self.active_request,
            buckets: self.buckets.clone(),
            is_final_overall,
        })
    }
}

impl Default for SolutionAggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(request_id: u64, is_final: bool, one_word: &[&str]) -> SolutionChunk {
        let mut buckets: [Vec<String>; 5] = Default::default();
        buckets[0] = one_word.iter().map(|s| s.to_string()).collect();
        SolutionChunk {
            request_id,
            is_final,
            buckets,
        }
    }

    #[test]
    fn appends_and_tracks_pending() {
        let mut agg = SolutionAggregator::new();
        agg.start_request(1, 2);

        let snap = agg.ingest(chunk(1, false, &["A B"])).unwrap();
        assert!(!snap.is_final_overall);
        assert_eq!(snap.buckets[0], vec!["A B".to_string()]);

        let snap = agg.ingest(chunk(1, true, &["C D"])).unwrap();
        assert!(!snap.is_final_overall); // one worker still pending
        assert_eq!(snap.buckets[0], vec!["A B".to_string(), "C D".to_string()]);

        let snap = agg.ingest(chunk(1, true, &[])).unwrap();
        assert!(snap.is_final_overall);
    }

    #[test]
    fn discards_superseded_request() {
        let mut agg = SolutionAggregator::new();
        agg.start_request(1, 1);
        agg.start_request(2, 1);

        // A late chunk for request 1 must be dropped.
        assert!(agg.ingest(chunk(1, true, &["STALE"])).is_none());

        let snap = agg.ingest(chunk(2, true, &["FRESH"])).unwrap();
        assert_eq!(snap.request_id, 2);
        assert_eq!(snap.buckets[0], vec!["FRESH".to_string()]);
        assert!(snap.is_final_overall);
    }

    #[test]
    fn monotonic_cumulative_count_under_interleaving() {
        let mut agg = SolutionAggregator::new();
        agg.start_request(5, 3);
        let mut last_count = 0;
        for c in [
            chunk(5, false, &["A"]),
            chunk(5, false, &["B", "C"]),
            chunk(5, true, &[]),
            chunk(5, true, &["D"]),
            chunk(5, true, &[]),
        ] {
            let snap = agg.ingest(c).unwrap();
            let count: usize = snap.buckets.iter().map(Vec::len).sum();
            assert!(count >= last_count);
            last_count = count;
        }
        assert!(agg.pending == 0);
    }
}
