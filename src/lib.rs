//! Word Train Solver
//!
//! Players take turns appending one letter to a shared string. Completing a
//! word of the minimum length wins; a letter that leads to no word loses. The
//! solver classifies every next letter as a certain win, a possible win, or a
//! loss for the player about to move.
//!
//! # Quick Start
//!
//! ```rust
//! use word_train::core::Lexicon;
//! use word_train::solver::{GameQuery, Solver};
//!
//! let lexicon = Lexicon::from_words(["apple", "apply", "applesauce"]);
//! let solver = Solver::new(&lexicon);
//!
//! let solution = solver.solve(&GameQuery::new("appl")).unwrap();
//! assert_eq!(solution.certain_win_letters(), &['e', 'y']);
//! ```

// Lexicon and prefix tree
pub mod core;

// Game-tree solver
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
