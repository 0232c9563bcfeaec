use thiserror::Error;

/// Errors constructing a [`crate::board::PuzzleBoard`] from raw input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board must be exactly 12 letters, got {len}")]
    WrongLength { len: usize },
    #[error("board character '{ch}' is not an ASCII letter")]
    NotAsciiLetter { ch: char },
    #[error("board letter '{ch}' appears more than once")]
    DuplicateLetter { ch: char },
}

/// Errors constructing a [`crate::letter_sequence::LetterSequence`] from ASCII text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LetterSequenceError {
    #[error("sequence would exceed 12 letters")]
    TooLong,
    #[error("character '{ch}' is not an ASCII letter")]
    BadChar { ch: char },
}

/// Errors decoding a [`crate::serialize`] byte buffer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SerializeError {
    #[error("buffer is truncated")]
    Truncated,
    #[error("declared count {declared} exceeds available data ({available} values)")]
    OversizedCount { declared: u32, available: usize },
    #[error("value {raw:#018x} has no valid sentinel bit")]
    InvalidSentinel { raw: u64 },
    #[error("value {raw:#018x} contains a reserved letter code")]
    ReservedLetterCode { raw: u64 },
}
