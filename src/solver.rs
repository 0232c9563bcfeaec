//! Bounded-depth search enumerating every 1-to-5-word Letter Boxed solution
//! whose first word falls in an assigned index range, emitted in
//! progress-friendly chunks.

use crate::board::PuzzleBoard;
use crate::coordinator::partition_range;
use crate::letter_sequence::LetterSequence;

const MAX_DEPTH: usize = 5;

/// A partial or final batch of solutions produced by one sub-range of a
/// worker's assigned index range.
#[derive(Debug, Clone)]
pub struct SolutionChunk {
    pub request_id: u64,
    pub is_final: bool,
    /// `buckets[k-1]` holds the solutions with `k` words, as `"WORD WORD"` strings.
    pub buckets: [Vec<String>; 5],
}

/// Precomputed per-candidate data and the first-letter bucket index, reused
/// across every sub-range search a worker performs for a single request.
pub struct Solver<'a> {
    board: &'a PuzzleBoard,
    candidates: &'a [LetterSequence],
    masks: Vec<u32>,
    firsts: Vec<u8>,
    lasts: Vec<u8>,
    by_first: [Vec<u32>; 26],
}

impl<'a> Solver<'a> {
    pub fn new(board: &'a PuzzleBoard, candidates: &'a [LetterSequence]) -> Self {
        let masks: Vec<u32> = candidates.iter().map(|c| c.to_mask()).collect();
        let firsts: Vec<u8> = candidates.iter().map(|c| c.first()).collect();
        let lasts: Vec<u8> = candidates.iter().map(|c| c.last()).collect();

        let mut by_first: [Vec<u32>; 26] = Default::default();
        for (idx, &f) in firsts.iter().enumerate() {
            by_first[f as usize].push(idx as u32);
        }

        Solver {
            board,
            candidates,
            masks,
            firsts,
            lasts,
            by_first,
        }
    }

    /// Enumerate solutions whose first word's index lies in `[lo, hi)`,
    /// grouped by word count (`result[k-1]` = paths of `k` candidate
    /// indices).
    pub fn solve_range(&self, lo: usize, hi: usize) -> [Vec<Vec<u32>>; 5] {
        let mut buckets: [Vec<Vec<u32>>; 5] = Default::default();
        let full_mask = self.board.full_mask();
        let hi = hi.min(self.candidates.len());
        for i in lo..hi {
            let mut path = vec![i as u32];
            self.extend(&mut path, self.masks[i], self.lasts[i], full_mask, &mut buckets);
        }
        buckets
    }

    fn extend(
        &self,
        path: &mut Vec<u32>,
        acc_mask: u32,
        need: u8,
        full_mask: u32,
        buckets: &mut [Vec<Vec<u32>>; 5],
    ) {
        if acc_mask == full_mask {
            buckets[path.len() - 1].push(path.clone());
        }
        if path.len() == MAX_DEPTH {
            return;
        }
        let need_bit = 1u32 << need;
        for &j in &self.by_first[need as usize] {
            let j = j as usize;
            let overlap = self.masks[j] & acc_mask;
            if overlap != need_bit {
                continue;
            }
            path.push(j as u32);
            self.extend(
                path,
                acc_mask | self.masks[j],
                self.lasts[j],
                full_mask,
                buckets,
            );
            path.pop();
        }
    }

    fn render(&self, path: &[u32]) -> String {
        path.iter()
            .map(|&idx| self.candidates[idx as usize].to_ascii())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the search over `[lo, hi)`, splitting it into up to
    /// `min(hi - lo, 4)` equal-sized sub-ranges and invoking `on_chunk`
    /// once per sub-range, so a caller streaming results to a channel gets
    /// partial progress instead of waiting for the whole range to finish.
    /// The last invocation has `is_final = true`; an empty range still
    /// produces exactly one invocation, with `is_final = true` and empty
    /// buckets, so callers waiting on a fixed number of workers can count
    /// acknowledgements rather than guess at silence.
    pub fn run_chunked(
        &self,
        request_id: u64,
        lo: usize,
        hi: usize,
        mut on_chunk: impl FnMut(SolutionChunk),
    ) {
        let n = self.candidates.len();
        let lo = lo.min(n);
        let hi = hi.min(n);

        if lo >= hi {
            on_chunk(SolutionChunk {
                request_id,
                is_final: true,
                buckets: Default::default(),
            });
            return;
        }

        let num_chunks = (hi - lo).min(4);
        let sub_ranges = partition_range(lo, hi, num_chunks);
        let last = sub_ranges.len() - 1;
        for (idx, sub) in sub_ranges.into_iter().enumerate() {
            let word_buckets = self.solve_range(sub.start, sub.end);
            let mut buckets: [Vec<String>; 5] = Default::default();
            for (b, paths) in word_buckets.iter().enumerate() {
                buckets[b] = paths.iter().map(|p| self.render(p)).collect();
            }
            on_chunk(SolutionChunk {
                request_id,
                is_final: idx == last,
                buckets,
            });
        }
    }
}
