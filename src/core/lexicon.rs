//! Word set with a lazily built prefix tree
//!
//! Initialization is a one-time phase: the word set and the trie are each
//! built at most once, even when several threads ask for them at the same
//! time. An explicit second build fails with
//! [`LexiconError::AlreadyInitialized`]. Once built, both are read-only, so a
//! `&Lexicon` can be shared across threads for concurrent queries.

use super::trie::Trie;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use std::fmt;
use std::io;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use thiserror::Error;
use tracing::debug;

/// Initialization phase of a lexicon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Words,
    Trie,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Words => write!(f, "word set"),
            Self::Trie => write!(f, "trie"),
        }
    }
}

/// Error type for lexicon initialization
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("lexicon {0} already initialized")]
    AlreadyInitialized(Stage),
    #[error("failed to read words: {0}")]
    Source(#[from] io::Error),
}

/// External supplier of already-normalized words
///
/// Reading is deferred until the lexicon first needs its words.
pub trait WordSource: Send + Sync {
    /// Produce the raw word sequence
    ///
    /// # Errors
    /// Returns an I/O error if the underlying storage cannot be read.
    fn read_words(&self) -> io::Result<Vec<String>>;

    /// Short human-readable description used in log messages
    fn describe(&self) -> String {
        "external source".to_string()
    }
}

/// A word set and the trie derived from it
///
/// # Examples
/// ```
/// use word_train::core::Lexicon;
///
/// let lexicon = Lexicon::from_words(["apple", "apply"]);
/// assert_eq!(lexicon.words().unwrap().len(), 2);
/// assert!(lexicon.trie().unwrap().contains("apply"));
/// assert_eq!(lexicon.characters().unwrap().len(), 5);
/// ```
pub struct Lexicon {
    source: Option<Box<dyn WordSource>>,
    words: OnceLock<FxHashSet<String>>,
    trie: OnceLock<Trie>,
    words_init: Mutex<()>,
    trie_init: Mutex<()>,
}

impl Lexicon {
    /// Create a lexicon from an in-memory word collection
    ///
    /// The word set is materialized immediately; the trie is still built lazily.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: FxHashSet<String> = words.into_iter().map(Into::into).collect();
        Self {
            source: None,
            words: OnceLock::from(words),
            trie: OnceLock::new(),
            words_init: Mutex::new(()),
            trie_init: Mutex::new(()),
        }
    }

    /// Create a lexicon whose words are read from `source` on first use
    #[must_use]
    pub fn from_source(source: Box<dyn WordSource>) -> Self {
        Self {
            source: Some(source),
            words: OnceLock::new(),
            trie: OnceLock::new(),
            words_init: Mutex::new(()),
            trie_init: Mutex::new(()),
        }
    }

    /// Explicitly load the word set from the source
    ///
    /// # Errors
    /// Returns [`LexiconError::AlreadyInitialized`] if the word set already
    /// exists, or [`LexiconError::Source`] if the source cannot be read.
    pub fn load_words(&self) -> Result<&FxHashSet<String>, LexiconError> {
        let _guard = lock(&self.words_init);
        if self.words.get().is_some() {
            return Err(LexiconError::AlreadyInitialized(Stage::Words));
        }
        let words = self.read_source()?;
        Ok(self.words.get_or_init(|| words))
    }

    /// Explicitly build the trie from the word set
    ///
    /// # Errors
    /// Returns [`LexiconError::AlreadyInitialized`] if the trie already exists,
    /// or any error from loading the word set.
    pub fn load_trie(&self) -> Result<&Trie, LexiconError> {
        let _guard = lock(&self.trie_init);
        if self.trie.get().is_some() {
            return Err(LexiconError::AlreadyInitialized(Stage::Trie));
        }
        let trie = Self::build_trie(self.words()?);
        Ok(self.trie.get_or_init(|| trie))
    }

    /// All words in the lexicon, loading them on first call
    ///
    /// Concurrent first calls wait for a single load.
    ///
    /// # Errors
    /// Returns [`LexiconError::Source`] if the deferred source cannot be read.
    pub fn words(&self) -> Result<&FxHashSet<String>, LexiconError> {
        if let Some(words) = self.words.get() {
            return Ok(words);
        }
        let _guard = lock(&self.words_init);
        if let Some(words) = self.words.get() {
            return Ok(words);
        }
        let words = self.read_source()?;
        Ok(self.words.get_or_init(|| words))
    }

    /// The lexicon as a prefix tree, building it on first call
    ///
    /// # Errors
    /// Returns [`LexiconError::Source`] if the deferred source cannot be read.
    pub fn trie(&self) -> Result<&Trie, LexiconError> {
        if let Some(trie) = self.trie.get() {
            return Ok(trie);
        }
        // Lock order is always trie_init then words_init
        let _guard = lock(&self.trie_init);
        if let Some(trie) = self.trie.get() {
            return Ok(trie);
        }
        let trie = Self::build_trie(self.words()?);
        Ok(self.trie.get_or_init(|| trie))
    }

    /// Every distinct character used by any word
    ///
    /// # Errors
    /// Returns [`LexiconError::Source`] if the deferred source cannot be read.
    pub fn characters(&self) -> Result<BTreeSet<char>, LexiconError> {
        Ok(self.words()?.iter().flat_map(|word| word.chars()).collect())
    }

    fn read_source(&self) -> Result<FxHashSet<String>, LexiconError> {
        let Some(source) = &self.source else {
            return Ok(FxHashSet::default());
        };
        let words: FxHashSet<String> = source.read_words()?.into_iter().collect();
        debug!(source = %source.describe(), count = words.len(), "loaded words");
        Ok(words)
    }

    fn build_trie(words: &FxHashSet<String>) -> Trie {
        let trie: Trie = words.iter().collect();
        debug!(words = trie.len(), "built trie");
        trie
    }
}

/// Take an init guard; a panic in another initializer leaves nothing half-set
fn lock(guard: &Mutex<()>) -> MutexGuard<'_, ()> {
    guard.lock().unwrap_or_else(PoisonError::into_inner)
}

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.words.get()) {
            (Some(source), None) => write!(f, "lexicon for {} (not loaded)", source.describe()),
            (Some(source), Some(words)) => {
                write!(f, "lexicon for {} with {} words", source.describe(), words.len())
            }
            (None, words) => write!(
                f,
                "ad hoc lexicon with {} words",
                words.map_or(0, |words| words.len())
            ),
        }
    }
}

impl fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexicon")
            .field("words", &self.words.get().map(|words| words.len()))
            .field("trie_built", &self.trie.get().is_some())
            .finish_non_exhaustive()
    }
}
