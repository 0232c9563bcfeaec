use std::io::Write as _;

use letter_boxed_solver::{filter_words, PuzzleBoard, Solver};

mod utils;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
extern "C" {
    fn alert(s: &str);
}

/// Solve a board against a whitespace-separated dictionary, synchronously
/// and in a single pass (no chunking, no worker threads — not meaningful
/// inside one browser tab).
///
/// `board` is the 12-letter, side-major board string (see
/// `PuzzleBoard::parse`). Returns one line per solution, `"WORD WORD"`,
/// grouped by ascending word count, or an empty string if the board is
/// invalid or no solutions exist.
#[wasm_bindgen]
pub fn solve(board: &str, dictionary: &str) -> String {
    utils::set_panic_hook();

    let board = match PuzzleBoard::parse(board) {
        Ok(b) => b,
        Err(e) => {
            log::error!("invalid board: {}", e);
            return String::new();
        }
    };

    let words = dictionary.split_ascii_whitespace();
    let candidates = filter_words(&board, words);
    let solver = Solver::new(&board, &candidates);
    let buckets = solver.solve_range(0, candidates.len());

    let mut out = Vec::new();
    for bucket in &buckets {
        for path in bucket {
            let rendered: Vec<String> = path
                .iter()
                .map(|&idx| candidates[idx as usize].to_ascii())
                .collect();
            writeln!(&mut out, "{}", rendered.join(" ")).unwrap();
        }
    }
    String::from_utf8_lossy(&out).to_string()
}
