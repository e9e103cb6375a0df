//! Prefix solving command
//!
//! Runs a single query against the lexicon and reports the classification.

use crate::core::Lexicon;
use crate::solver::{GameQuery, Solution, SolveError, Solver};
use std::time::{Duration, Instant};

/// Result of solving a prefix
pub struct SolveReport {
    pub solution: Solution,
    pub reachable_words: usize,
    pub duration: Duration,
}

/// Solve a single query
///
/// # Errors
///
/// Returns an error if the query is invalid or the lexicon cannot be loaded.
pub fn solve_prefix(lexicon: &Lexicon, query: &GameQuery) -> Result<SolveReport, SolveError> {
    let start = Instant::now();
    let solution = Solver::new(lexicon).solve(query)?;
    let reachable_words = lexicon
        .trie()?
        .get_all_words(&query.prefix, query.min_word_length)
        .len();

    Ok(SolveReport {
        solution,
        reachable_words,
        duration: start.elapsed(),
    })
}
