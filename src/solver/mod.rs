//! Word Train game-tree solver
//!
//! Classifies every next letter from a prefix as a certain win, a possible
//! win, or a loss for the player about to move.

mod engine;
mod query;
mod solution;

pub use engine::{Outcome, Solver};
pub use query::{DEFAULT_MIN_WORD_LENGTH, DEFAULT_NUM_PLAYERS, GameQuery, SolveError};
pub use solution::Solution;
