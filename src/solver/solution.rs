//! Result record for a single solver query

use super::engine::Outcome;
use super::query::GameQuery;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;

/// Word-level and letter-level classification for one query
///
/// Created fresh per query and immutable afterwards. Letter sequences are
/// sorted and duplicate-free; the three letter sets partition the lexicon's
/// alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    query: GameQuery,
    certain_win_words: BTreeSet<String>,
    possible_win_words: BTreeSet<String>,
    losing_words: BTreeSet<String>,
    certain_win_letters: Vec<char>,
    possible_win_letters: Vec<char>,
    losing_letters: Vec<char>,
}

impl Solution {
    /// Build the record from the perfect-play outcome and the independently
    /// filtered losing words
    pub(crate) fn assemble(
        query: GameQuery,
        outcome: Outcome,
        losing_words: FxHashSet<String>,
        alphabet: &BTreeSet<char>,
    ) -> Self {
        let prefix_len = query.prefix_len();

        let certain: BTreeSet<char> = first_letters(&outcome.certain_wins, prefix_len);
        let possible: BTreeSet<char> = first_letters(&outcome.possible_wins, prefix_len)
            .difference(&certain)
            .copied()
            .collect();
        let losing_letters = alphabet
            .iter()
            .filter(|&&letter| !certain.contains(&letter) && !possible.contains(&letter))
            .copied()
            .collect();

        Self {
            query,
            certain_win_words: outcome.certain_wins.into_iter().collect(),
            possible_win_words: outcome.possible_wins.into_iter().collect(),
            losing_words: losing_words.into_iter().collect(),
            certain_win_letters: certain.into_iter().collect(),
            possible_win_letters: possible.into_iter().collect(),
            losing_letters,
        }
    }

    #[must_use]
    pub const fn query(&self) -> &GameQuery {
        &self.query
    }

    /// Words the querying player is guaranteed to reach under perfect play
    #[must_use]
    pub const fn certain_win_words(&self) -> &BTreeSet<String> {
        &self.certain_win_words
    }

    /// Winning words whose reachability depends on the other players
    #[must_use]
    pub const fn possible_win_words(&self) -> &BTreeSet<String> {
        &self.possible_win_words
    }

    /// Every reachable word completed on another player's turn, ignoring
    /// perfect play
    #[must_use]
    pub const fn losing_words(&self) -> &BTreeSet<String> {
        &self.losing_words
    }

    #[must_use]
    pub fn certain_win_letters(&self) -> &[char] {
        &self.certain_win_letters
    }

    #[must_use]
    pub fn possible_win_letters(&self) -> &[char] {
        &self.possible_win_letters
    }

    /// Alphabet letters with no demonstrated path to a win
    #[must_use]
    pub fn losing_letters(&self) -> &[char] {
        &self.losing_letters
    }

    /// Whether the querying player has any winning move at all
    #[must_use]
    pub fn has_winning_move(&self) -> bool {
        !self.certain_win_letters.is_empty() || !self.possible_win_letters.is_empty()
    }

    /// Example words starting with `prefix + letter` from the given word set
    pub fn words_for_letter<'a>(
        &'a self,
        words: &'a BTreeSet<String>,
        letter: char,
    ) -> impl Iterator<Item = &'a str> + 'a {
        let prefix_len = self.query.prefix_len();
        words
            .iter()
            .filter(move |word| word.chars().nth(prefix_len) == Some(letter))
            .map(String::as_str)
    }
}

/// Project words onto the letter played right after the prefix
fn first_letters<'a, I>(words: I, prefix_len: usize) -> BTreeSet<char>
where
    I: IntoIterator<Item = &'a String>,
{
    words
        .into_iter()
        .filter_map(|word| word.chars().nth(prefix_len))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> FxHashSet<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn possible_letters_exclude_certain_letters() {
        let outcome = Outcome {
            certain_wins: set(&["apple"]),
            possible_wins: set(&["apricot", "banana"]),
            losses: FxHashSet::default(),
        };
        let alphabet: BTreeSet<char> = "abcilnoprt".chars().collect();
        let solution = Solution::assemble(GameQuery::new(""), outcome, set(&[]), &alphabet);

        assert_eq!(solution.certain_win_letters(), &['a']);
        assert_eq!(solution.possible_win_letters(), &['b']);
        assert_eq!(
            solution.losing_letters(),
            &['c', 'i', 'l', 'n', 'o', 'p', 'r', 't']
        );
    }

    #[test]
    fn letters_taken_after_prefix() {
        let outcome = Outcome {
            certain_wins: set(&["apple", "apply"]),
            possible_wins: FxHashSet::default(),
            losses: FxHashSet::default(),
        };
        let alphabet: BTreeSet<char> = "aelpy".chars().collect();
        let solution = Solution::assemble(
            GameQuery::new("appl"),
            outcome,
            set(&["applesauce"]),
            &alphabet,
        );

        assert_eq!(solution.certain_win_letters(), &['e', 'y']);
        assert!(solution.possible_win_letters().is_empty());
        assert_eq!(solution.losing_letters(), &['a', 'l', 'p']);
        assert_eq!(solution.losing_words().len(), 1);
        assert!(solution.has_winning_move());

        let words: Vec<&str> = solution
            .words_for_letter(solution.certain_win_words(), 'y')
            .collect();
        assert_eq!(words, vec!["apply"]);
    }

    #[test]
    fn empty_outcome_loses_every_letter() {
        let alphabet: BTreeSet<char> = "ab".chars().collect();
        let solution = Solution::assemble(
            GameQuery::new("zz"),
            Outcome::default(),
            FxHashSet::default(),
            &alphabet,
        );
        assert!(!solution.has_winning_move());
        assert_eq!(solution.losing_letters(), &['a', 'b']);
    }
}
