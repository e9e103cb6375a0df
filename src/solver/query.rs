//! Query configuration and validation

use crate::core::LexiconError;
use thiserror::Error;

/// Default minimum length for a word to end the game
pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;

/// Default number of players
pub const DEFAULT_NUM_PLAYERS: usize = 2;

/// Error type for solver queries
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}

/// One solver question: who wins from `prefix`?
///
/// Letters placed after the prefix are numbered 1, 2, 3, ... and the querying
/// player places positions 1, `num_players + 1`, `2 * num_players + 1`, and so on.
///
/// # Examples
/// ```
/// use word_train::solver::GameQuery;
///
/// let query = GameQuery::new("appl").with_players(3).with_min_word_length(5);
/// assert!(query.validate().is_ok());
/// assert!(query.is_players_turn(1));
/// assert!(!query.is_players_turn(2));
/// assert!(query.is_players_turn(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameQuery {
    pub prefix: String,
    pub num_players: usize,
    pub min_word_length: usize,
}

impl GameQuery {
    /// Create a query with the default player count and minimum length
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            num_players: DEFAULT_NUM_PLAYERS,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
        }
    }

    #[must_use]
    pub fn with_players(mut self, num_players: usize) -> Self {
        self.num_players = num_players;
        self
    }

    #[must_use]
    pub fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }

    /// Reject configurations the solver cannot evaluate
    ///
    /// # Errors
    /// Returns [`SolveError::InvalidConfiguration`] if `num_players` or
    /// `min_word_length` is zero.
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.num_players < 1 {
            return Err(SolveError::InvalidConfiguration(format!(
                "num_players must be at least 1, got {}",
                self.num_players
            )));
        }
        if self.min_word_length < 1 {
            return Err(SolveError::InvalidConfiguration(format!(
                "min_word_length must be at least 1, got {}",
                self.min_word_length
            )));
        }
        Ok(())
    }

    /// Length of the prefix in characters
    #[must_use]
    pub fn prefix_len(&self) -> usize {
        self.prefix.chars().count()
    }

    /// Whether the querying player picks the letter after `depth` letters have
    /// been added to the prefix
    ///
    /// # Panics
    /// Panics if `num_players` is zero. [`GameQuery::validate`] rejects such
    /// a query, and the solver validates before evaluating any position.
    #[inline]
    #[must_use]
    pub const fn player_chooses_next(&self, depth: usize) -> bool {
        depth % self.num_players == 0
    }

    /// Whether the letter at position `position` (1-based, relative to the
    /// prefix) is placed by the querying player
    ///
    /// Position 0 is the prefix itself and belongs to nobody.
    ///
    /// # Panics
    /// Panics if `num_players` is zero and `position` is non-zero.
    #[inline]
    #[must_use]
    pub const fn is_players_turn(&self, position: usize) -> bool {
        position > 0 && self.player_chooses_next(position - 1)
    }
}
