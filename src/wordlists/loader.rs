//! Word list loading utilities
//!
//! Reads line-delimited word lists and normalizes them (trimmed, lowercased,
//! blank lines dropped) before they reach the lexicon.

use crate::core::{Lexicon, WordSource};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_train::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/lexicon.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(normalize_words(content.lines()))
}

/// Trim and lowercase words, dropping blank entries
///
/// # Examples
/// ```
/// use word_train::wordlists::loader::normalize_words;
///
/// let words = normalize_words(["  Apple", "", "APPLY\r"]);
/// assert_eq!(words, vec!["apple", "apply"]);
/// ```
#[must_use]
pub fn normalize_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .filter_map(|word| {
            let trimmed = word.as_ref().trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}

/// Build a lexicon from an in-memory slice such as [`crate::wordlists::EMBEDDED`]
#[must_use]
pub fn lexicon_from_slice(slice: &[&str]) -> Lexicon {
    Lexicon::from_words(normalize_words(slice))
}

/// Word file read lazily on the lexicon's first access
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Wrap the file in a deferred-loading lexicon
    #[must_use]
    pub fn into_lexicon(self) -> Lexicon {
        Lexicon::from_source(Box::new(self))
    }
}

impl WordSource for FileSource {
    fn read_words(&self) -> io::Result<Vec<String>> {
        load_from_file(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LexiconError;
    use std::io::Write;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "word_train_{}_{name}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        let words = normalize_words([" Apple ", "APPLY", "", "   ", "apple"]);
        assert_eq!(words, vec!["apple", "apply", "apple"]);
    }

    #[test]
    fn normalize_empty() {
        let words = normalize_words(Vec::<String>::new());
        assert!(words.is_empty());
    }

    #[test]
    fn load_from_file_normalizes_lines() {
        let path = temp_file("load", "Apple\napply\n\n  APPLE  \n");
        let words = load_from_file(&path).unwrap();
        assert_eq!(words, vec!["apple", "apply", "apple"]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn load_from_missing_file_fails() {
        let result = load_from_file("./definitely/not/here.txt");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn file_source_matches_in_memory_lexicon() {
        let path = temp_file("source", "apple\napply\n");
        let from_file = FileSource::new(&path).into_lexicon();
        let in_memory = Lexicon::from_words(["apple", "apply"]);

        assert_eq!(from_file.words().unwrap(), in_memory.words().unwrap());
        assert!(from_file.to_string().contains("with 2 words"));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn file_source_missing_file_is_deferred() {
        let lexicon = FileSource::new("./definitely/not/here.txt").into_lexicon();
        assert!(lexicon.to_string().contains("not loaded"));
        assert!(matches!(lexicon.words(), Err(LexiconError::Source(_))));
    }

    #[test]
    fn lexicon_from_embedded_slice() {
        use crate::wordlists::EMBEDDED;

        let lexicon = lexicon_from_slice(EMBEDDED);
        assert_eq!(lexicon.words().unwrap().len(), EMBEDDED.len());
        assert!(lexicon.trie().unwrap().contains("apple"));
    }
}
