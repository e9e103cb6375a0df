//! Player-count sweep
//!
//! Solves one prefix for every player count from 1 to N. Queries run in
//! parallel over the shared, already-built lexicon.

use crate::core::Lexicon;
use crate::solver::{GameQuery, Solution, Solver};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;

/// Solution for one player count
pub struct SweepRow {
    pub num_players: usize,
    pub solution: Solution,
}

/// All rows of a sweep, ordered by player count
pub struct SweepResult {
    pub prefix: String,
    pub rows: Vec<SweepRow>,
    pub duration: Duration,
}

impl SweepResult {
    /// Player counts for which the mover has at least one certain win
    #[must_use]
    pub fn winning_player_counts(&self) -> Vec<usize> {
        self.rows
            .iter()
            .filter(|row| !row.solution.certain_win_letters().is_empty())
            .map(|row| row.num_players)
            .collect()
    }
}

/// Solve `prefix` for 1..=`max_players` players
///
/// # Errors
///
/// Returns an error if `max_players` is zero, the lexicon cannot be loaded, or
/// the progress bar template is invalid.
pub fn run_sweep(
    lexicon: &Lexicon,
    prefix: &str,
    max_players: usize,
    min_word_length: usize,
) -> Result<SweepResult> {
    anyhow::ensure!(max_players >= 1, "max players must be at least 1");

    // Build the trie up front so parallel queries only read it
    lexicon.trie()?;
    let solver = Solver::new(lexicon);
    let start = Instant::now();

    let pb = ProgressBar::new(max_players as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("prefix {prefix:?}"));

    let mut rows = (1..=max_players)
        .into_par_iter()
        .map(|num_players| -> Result<SweepRow> {
            let query = GameQuery::new(prefix)
                .with_players(num_players)
                .with_min_word_length(min_word_length);
            let solution = solver.solve(&query)?;
            pb.inc(1);
            Ok(SweepRow {
                num_players,
                solution,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_with_message("Complete!");
    rows.sort_by_key(|row| row.num_players);

    let duration = start.elapsed();
    info!(prefix, max_players, ?duration, "sweep finished");

    Ok(SweepResult {
        prefix: prefix.to_string(),
        rows,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_matches_individual_solves() {
        let lexicon = Lexicon::from_words(["abcdefghijklmnopqrstuvwx"]);
        let result = run_sweep(&lexicon, "a", 24, 4).unwrap();

        assert_eq!(result.rows.len(), 24);
        assert!(
            result
                .rows
                .iter()
                .enumerate()
                .all(|(i, row)| row.num_players == i + 1)
        );
        assert_eq!(result.winning_player_counts(), vec![1, 2, 11, 22]);
    }

    #[test]
    fn sweep_rows_agree_with_solver() {
        let lexicon = Lexicon::from_words(["abcdfr", "abcdftg", "abcdf"]);
        let result = run_sweep(&lexicon, "", 4, 4).unwrap();
        let solver = Solver::new(&lexicon);

        for row in &result.rows {
            let expected = solver
                .solve(&GameQuery::new("").with_players(row.num_players))
                .unwrap();
            assert_eq!(row.solution, expected);
        }
    }

    #[test]
    fn sweep_rejects_zero_players() {
        let lexicon = Lexicon::from_words(["apple"]);
        assert!(run_sweep(&lexicon, "", 0, 4).is_err());
    }
}
