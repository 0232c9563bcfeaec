use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;

use clap::Parser;
use letter_boxed_solver::{
    coordinator, filter_words, serialize, BoardError, PuzzleBoard, Solver, SolutionAggregator,
    SolutionChunk,
};
use thiserror::Error;

/// Enumerate every Letter Boxed solution for a board against a dictionary.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// The 12-letter board, side-major (e.g. "ELZIVARYUCTH" for sides
    /// ELZ/IVA/RYU/CTH).
    board: String,

    /// Path to a newline-delimited dictionary file. Defaults to the
    /// crate's small built-in word list.
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Number of worker threads. Defaults to `min(16, available_parallelism)`.
    #[arg(short, long)]
    workers: Option<usize>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
    #[error("failed to read dictionary {path}: {source}")]
    Dictionary {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn run(args: Args) -> Result<(), CliError> {
    let board = PuzzleBoard::parse(&args.board)?;

    let dictionary_text;
    let words: Vec<&str> = match &args.dictionary {
        Some(path) => {
            dictionary_text = fs::read_to_string(path).map_err(|source| CliError::Dictionary {
                path: path.clone(),
                source,
            })?;
            dictionary_text.split_whitespace().collect()
        }
        None => letter_boxed_solver::words::builtin_word_list().to_vec(),
    };

    let candidates = filter_words(&board, words);
    log::info!("{} candidate words after filtering", candidates.len());

    let worker_count = args.workers.unwrap_or_else(coordinator::default_worker_count).max(1);
    let ranges = coordinator::partition(candidates.len(), worker_count);

    // Round-trip the candidate list through the wire format once; each
    // worker decodes its own copy, exercising the same path a
    // cross-process worker would use.
    let encoded = serialize::encode(&candidates);

    let (tx, rx) = crossbeam_channel::unbounded();
    let request_id = 1;

    thread::scope(|scope| {
        for range in &ranges {
            let tx = tx.clone();
            let encoded = &encoded;
            let board = &board;
            let (lo, hi) = (range.start, range.end);
            scope.spawn(move || match serialize::decode(encoded) {
                Ok(decoded) => {
                    let solver = Solver::new(board, &decoded);
                    solver.run_chunked(request_id, lo, hi, |chunk| {
                        tx.send(chunk).expect("aggregator channel closed early");
                    });
                }
                Err(e) => {
                    log::error!("worker for range {}..{} could not decode candidates: {}", lo, hi, e);
                    tx.send(SolutionChunk {
                        request_id,
                        is_final: true,
                        buckets: Default::default(),
                    })
                    .expect("aggregator channel closed early");
                }
            });
        }
        drop(tx);

        let mut aggregator = SolutionAggregator::new();
        aggregator.start_request(request_id, ranges.len());

        let mut snapshot = None;
        for chunk in rx {
            if let Some(s) = aggregator.ingest(chunk) {
                let done = s.is_final_overall;
                snapshot = Some(s);
                if done {
                    break;
                }
            }
        }

        if let Some(snapshot) = snapshot {
            for (count, bucket) in snapshot.buckets.iter().enumerate() {
                for solution in bucket {
                    println!("{}\t{}", count + 1, solution);
                }
            }
        }
    });

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
