//! Prefix tree over characters
//!
//! Each node owns its children outright, so the structure is a strict tree.
//! Child order is never significant: only the set of reachable words matters.

use rustc_hash::{FxHashMap, FxHashSet};

/// A single node of the prefix tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    children: FxHashMap<char, TrieNode>,
    terminates_word: bool,
}

impl TrieNode {
    /// Whether the path from the root to this node spells a complete word
    #[inline]
    #[must_use]
    pub const fn terminates_word(&self) -> bool {
        self.terminates_word
    }

    /// Get the child reached by `letter`, if any
    #[inline]
    #[must_use]
    pub fn child(&self, letter: char) -> Option<&Self> {
        self.children.get(&letter)
    }

    /// Iterate over `(letter, child)` pairs in no particular order
    pub fn children(&self) -> impl Iterator<Item = (char, &Self)> {
        self.children.iter().map(|(&letter, node)| (letter, node))
    }

    #[inline]
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Letters that continue from this node, sorted
    #[must_use]
    pub fn letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.children.keys().copied().collect();
        letters.sort_unstable();
        letters
    }
}

/// Prefix tree holding a word set
///
/// A word is present iff following its characters from the root lands on a
/// node that terminates a word. Repeated inserts of the same word are idempotent.
///
/// # Examples
/// ```
/// use word_train::core::Trie;
///
/// let trie: Trie = ["apple", "apply"].into_iter().collect();
/// assert!(trie.contains("apple"));
/// assert!(trie.get_prefix_node("appl").is_some());
/// assert!(trie.get_prefix_node("apq").is_none());
/// assert_eq!(trie.get_all_words("app", 0).len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, creating nodes along its path as needed
    pub fn insert(&mut self, word: &str) {
        let mut current = &mut self.root;
        for letter in word.chars() {
            current = current.children.entry(letter).or_default();
        }
        if !current.terminates_word {
            current.terminates_word = true;
            self.word_count += 1;
        }
    }

    #[inline]
    #[must_use]
    pub const fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Descend to the node for `prefix`
    ///
    /// Returns `None` as soon as a character has no matching child. Absence
    /// means "no words below this prefix", not a fault.
    #[must_use]
    pub fn get_prefix_node(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, letter| node.child(letter))
    }

    /// Check whether `word` is a complete word in the tree
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.get_prefix_node(word)
            .is_some_and(TrieNode::terminates_word)
    }

    /// Collect every word that extends `prefix` (including `prefix` itself)
    /// with at least `min_length` characters
    ///
    /// Each node below the prefix is visited exactly once.
    #[must_use]
    pub fn get_all_words(&self, prefix: &str, min_length: usize) -> FxHashSet<String> {
        let mut words = FxHashSet::default();
        let Some(start) = self.get_prefix_node(prefix) else {
            return words;
        };

        let mut stack = vec![(start, prefix.to_string(), prefix.chars().count())];
        while let Some((node, text, length)) = stack.pop() {
            if node.terminates_word && length >= min_length {
                words.insert(text.clone());
            }
            for (letter, child) in node.children() {
                let mut extended = text.clone();
                extended.push(letter);
                stack.push((child, extended, length + 1));
            }
        }

        words
    }

    /// Number of distinct words stored
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.word_count
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        for word in iter {
            trie.insert(word.as_ref());
        }
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 4] = ["apple", "applesauce", "application", "apply"];

    fn sorted(words: FxHashSet<String>) -> Vec<String> {
        let mut words: Vec<String> = words.into_iter().collect();
        words.sort();
        words
    }

    #[test]
    fn prefix_node_children_and_termination() {
        let trie: Trie = WORDS.into_iter().collect();

        let node = trie.get_prefix_node("appl").unwrap();
        assert_eq!(node.letters(), vec!['e', 'i', 'y']);
        assert!(!node.terminates_word());

        let node = trie.get_prefix_node("apple").unwrap();
        assert!(node.terminates_word());
        assert_eq!(node.letters(), vec!['s']);

        let node = trie.get_prefix_node("apples").unwrap();
        assert!(!node.terminates_word());
        assert_eq!(node.letters(), vec!['a']);
    }

    #[test]
    fn prefix_node_absent() {
        let trie: Trie = WORDS.into_iter().collect();
        assert!(trie.get_prefix_node("b").is_none());
        assert!(trie.get_prefix_node("applez").is_none());
        assert!(trie.get_prefix_node("applesauces").is_none());
    }

    #[test]
    fn empty_prefix_is_root() {
        let trie: Trie = WORDS.into_iter().collect();
        assert_eq!(trie.get_prefix_node(""), Some(trie.root()));
    }

    #[test]
    fn all_words_below_prefix() {
        let trie: Trie = WORDS.into_iter().collect();
        let mut expected: Vec<String> = WORDS.iter().map(ToString::to_string).collect();
        expected.sort();

        for prefix in ["", "a", "ap", "app", "appl"] {
            assert_eq!(sorted(trie.get_all_words(prefix, 0)), expected);
        }
        assert_eq!(sorted(trie.get_all_words("apply", 0)), vec!["apply"]);
        assert_eq!(
            sorted(trie.get_all_words("apple", 0)),
            vec!["apple", "applesauce"]
        );
        assert_eq!(sorted(trie.get_all_words("appli", 0)), vec!["application"]);
        assert!(trie.get_all_words("zzz", 0).is_empty());
    }

    #[test]
    fn all_words_min_length_filter() {
        let trie: Trie = ["a", "ab", "abc", "abcd"].into_iter().collect();
        assert_eq!(sorted(trie.get_all_words("", 3)), vec!["abc", "abcd"]);
        assert_eq!(sorted(trie.get_all_words("ab", 4)), vec!["abcd"]);
        assert!(trie.get_all_words("", 5).is_empty());
    }

    #[test]
    fn insert_is_idempotent() {
        let mut trie = Trie::new();
        trie.insert("apple");
        trie.insert("apple");
        assert_eq!(trie.len(), 1);
        assert!(trie.contains("apple"));
        assert!(!trie.contains("appl"));
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let forward: Trie = WORDS.into_iter().collect();
        let backward: Trie = WORDS.into_iter().rev().collect();
        assert_eq!(forward, backward);

        for trie in [&forward, &backward] {
            assert_eq!(trie.len(), WORDS.len());
            let mut expected: Vec<String> = WORDS.iter().map(ToString::to_string).collect();
            expected.sort();
            assert_eq!(sorted(trie.get_all_words("", 0)), expected);
        }
    }

    #[test]
    fn empty_trie() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert!(!trie.root().has_children());
        assert!(trie.get_all_words("", 0).is_empty());
    }

    #[test]
    fn non_ascii_letters() {
        let trie: Trie = ["über", "übel"].into_iter().collect();
        assert_eq!(trie.get_prefix_node("üb").unwrap().letters(), vec!['e']);
        assert_eq!(trie.get_all_words("", 4).len(), 2);
    }
}
