//! Game-tree evaluation over the lexicon trie
//!
//! The subtree below the prefix is evaluated recursively. Turn ownership is a
//! pure function of depth modulo the player count, so no turn counter is
//! threaded through the recursion.

use super::query::{GameQuery, SolveError};
use super::solution::Solution;
use crate::core::{Lexicon, TrieNode};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Word-level classification of a subtree under perfect play
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Wins the querying player can force
    pub certain_wins: FxHashSet<String>,
    /// Wins an opponent could steer away from
    pub possible_wins: FxHashSet<String>,
    /// Words completed on another player's turn that survive propagation
    pub losses: FxHashSet<String>,
}

impl Outcome {
    fn merge(&mut self, other: Self) {
        self.certain_wins.extend(other.certain_wins);
        self.possible_wins.extend(other.possible_wins);
        self.losses.extend(other.losses);
    }

    /// Apply the choice made at an internal node
    ///
    /// When the querying player picks the next letter, any reachable certain
    /// win lets them avoid every loss. When an opponent picks, any reachable
    /// loss turns every certain win into a possible one.
    fn propagate(&mut self, player_chooses: bool) {
        if player_chooses {
            if !self.certain_wins.is_empty() {
                self.losses.clear();
            }
        } else if !self.losses.is_empty() {
            self.possible_wins.extend(self.certain_wins.drain());
        }
    }
}

/// Word Train solver over a shared, read-only lexicon
///
/// # Examples
/// ```
/// use word_train::core::Lexicon;
/// use word_train::solver::{GameQuery, Solver};
///
/// let lexicon = Lexicon::from_words(["abcdfr", "abcdftg"]);
/// let solver = Solver::new(&lexicon);
///
/// let solution = solver.solve(&GameQuery::new("").with_players(3)).unwrap();
/// assert!(solution.certain_win_letters().is_empty());
/// assert_eq!(solution.possible_win_letters(), &['a']);
///
/// let solution = solver.solve(&GameQuery::new("abcdft").with_players(3)).unwrap();
/// assert_eq!(solution.certain_win_letters(), &['g']);
/// ```
pub struct Solver<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Classify every next letter from the query's prefix
    ///
    /// An unreachable prefix is not an error: it yields empty word sets and
    /// every alphabet letter as losing.
    ///
    /// # Errors
    /// Returns [`SolveError::InvalidConfiguration`] before any traversal if the
    /// query is invalid, or [`SolveError::Lexicon`] if the lexicon cannot load.
    pub fn solve(&self, query: &GameQuery) -> Result<Solution, SolveError> {
        let outcome = self.solve_words(query)?;
        let losing_words = self.losing_words(query)?;
        let alphabet = self.lexicon.characters()?;

        let solution = Solution::assemble(query.clone(), outcome, losing_words, &alphabet);
        debug!(
            prefix = %query.prefix,
            certain = ?solution.certain_win_letters(),
            possible = ?solution.possible_win_letters(),
            "solved query"
        );
        Ok(solution)
    }

    /// Perfect-play classification of every word reachable from the prefix
    ///
    /// # Errors
    /// Same as [`Solver::solve`].
    pub fn solve_words(&self, query: &GameQuery) -> Result<Outcome, SolveError> {
        query.validate()?;
        let trie = self.lexicon.trie()?;

        let Some(node) = trie.get_prefix_node(&query.prefix) else {
            debug!(prefix = %query.prefix, "prefix not in lexicon");
            return Ok(Outcome::default());
        };

        let mut word = query.prefix.clone();
        let outcome = evaluate(node, &mut word, 0, query.prefix_len(), query);
        debug!(
            prefix = %query.prefix,
            players = query.num_players,
            min_length = query.min_word_length,
            certain = outcome.certain_wins.len(),
            possible = outcome.possible_wins.len(),
            losses = outcome.losses.len(),
            "evaluated game tree"
        );
        Ok(outcome)
    }

    /// Every word below the prefix completed on another player's turn,
    /// regardless of whether perfect play would ever reach it
    ///
    /// # Errors
    /// Same as [`Solver::solve`].
    pub fn losing_words(&self, query: &GameQuery) -> Result<FxHashSet<String>, SolveError> {
        query.validate()?;
        let prefix_len = query.prefix_len();

        Ok(self
            .lexicon
            .trie()?
            .get_all_words(&query.prefix, query.min_word_length)
            .into_iter()
            .filter(|word| {
                let position = word.chars().count() - prefix_len;
                position > 0 && !query.is_players_turn(position)
            })
            .collect())
    }
}

/// Evaluate the subtree at `node`, which sits `depth` letters past the prefix
///
/// A counting word ends the game, so its descendants are never reached.
fn evaluate(
    node: &TrieNode,
    word: &mut String,
    depth: usize,
    prefix_len: usize,
    query: &GameQuery,
) -> Outcome {
    let mut outcome = Outcome::default();

    if depth > 0 && node.terminates_word() && prefix_len + depth >= query.min_word_length {
        if query.is_players_turn(depth) {
            outcome.certain_wins.insert(word.clone());
        } else {
            outcome.losses.insert(word.clone());
        }
        return outcome;
    }

    // Short words without children fall through here and stay inert
    if !node.has_children() {
        return outcome;
    }

    for (letter, child) in node.children() {
        word.push(letter);
        outcome.merge(evaluate(child, word, depth + 1, prefix_len, query));
        word.pop();
    }

    outcome.propagate(query.player_chooses_next(depth));
    outcome
}
