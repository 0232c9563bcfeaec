//! A solver for the New York Times "Letter Boxed" puzzle.
//!
//! The puzzle is set up as a square, with letters on each side. A word is
//! valid if consecutive letters never come from the same side of the
//! square; a solution is a chain of words (each starting where the last
//! one ended) that together use every letter on the board at least once.
//!
//! For example:
//!
//! ```text
//!   E L Z
//! I       C
//! V       T
//! A       H
//!   R Y U
//! ```
//!
//! has a valid solution of "VEHICULAR" followed by "RITZILY".
//!
//! This crate is organized around a small pipeline:
//!
//! - [`letter_sequence`] — a bit-packed representation of a single word
//! - [`board`] — the 12-letter board and its side-adjacency rules
//! - [`filter`] — turning a raw word list into board-legal candidates
//! - [`solver`] — bounded-depth search over a range of candidates
//! - [`coordinator`] — splitting that search across a worker pool
//! - [`aggregator`] — folding workers' results back into one view
//! - [`serialize`] — a compact wire format for candidate lists
//! - [`words`] — a small built-in word list for demos and tests
//! - [`error`] — the error types used throughout

pub mod aggregator;
pub mod board;
pub mod coordinator;
pub mod error;
pub mod filter;
pub mod letter_sequence;
pub mod serialize;
pub mod solver;
pub mod words;

pub use aggregator::{Snapshot, SolutionAggregator};
pub use board::PuzzleBoard;
pub use coordinator::{default_worker_count, partition, partition_range};
pub use error::{BoardError, LetterSequenceError, SerializeError};
pub use filter::filter_words;
pub use letter_sequence::LetterSequence;
pub use solver::{Solver, SolutionChunk};
