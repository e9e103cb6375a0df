//! Command implementations

pub mod play;
pub mod solve;
pub mod sweep;

pub use play::{GameState, MoveResult, Player, choose_letter, run_play};
pub use solve::{SolveReport, solve_prefix};
pub use sweep::{SweepResult, SweepRow, run_sweep};
