//! Core lexicon types for Word Train
//!
//! The prefix tree and the lexicon that owns it. Both are pure data
//! structures with no game semantics.

mod lexicon;
mod trie;

pub use lexicon::{Lexicon, LexiconError, Stage, WordSource};
pub use trie::{Trie, TrieNode};
