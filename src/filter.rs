//! Dictionary filtering: turns an iterable of raw dictionary words into the
//! ordered, deduplicated list of candidate [`LetterSequence`]s a board
//! accepts.

use crate::board::PuzzleBoard;
use crate::letter_sequence::LetterSequence;

/// Build the candidate word list for `board` from an iterable of dictionary
/// words. Malformed entries (too short, off-board letters, same-side
/// adjacency, internal repeats, non-letter characters) are silently
/// skipped rather than erroring out, since a raw dictionary is expected to
/// contain plenty of words that don't fit any given board. The result is
/// sorted by packed 64-bit value and deduplicated, so it is deterministic
/// regardless of dictionary iteration order.
pub fn filter_words<'a, I, S>(board: &PuzzleBoard, words: I) -> Vec<LetterSequence>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str> + 'a,
{
    let mut candidates = Vec::new();

    'words: for word in words {
        let word = word.as_ref();
        if word.len() < 3 {
            continue;
        }

        let mut codes: Vec<u8> = Vec::with_capacity(word.len());
        for ch in word.chars() {
            if !ch.is_ascii_alphabetic() {
                continue 'words;
            }
            let code = ch.to_ascii_uppercase() as u8 - b'A';
            if board.side_of(code).is_none() {
                continue 'words;
            }
            codes.push(code);
        }

        let mut mask = 0u32;
        for &code in &codes {
            mask |= 1 << code;
        }
        if mask.count_ones() as usize != codes.len() {
            continue; // internal repeat
        }

        for pair in codes.windows(2) {
            if board.same_side(pair[0], pair[1]) {
                continue 'words;
            }
        }

        let mut seq = LetterSequence::empty();
        for &code in &codes {
            seq = seq.push(code);
        }
        candidates.push(seq);
    }

    candidates.sort_unstable_by_key(LetterSequence::to_raw);
    candidates.dedup();

    log::debug!(
        "word filter accepted {} candidates from {} letters of board mask {:#x}",
        candidates.len(),
        board.full_mask().count_ones(),
        board.full_mask()
    );

    candidates
}
