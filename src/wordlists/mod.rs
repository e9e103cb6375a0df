//! Word lists for Word Train
//!
//! Provides an embedded default lexicon and loaders for custom word files.

mod embedded;
pub mod loader;

pub use embedded::{EMBEDDED, EMBEDDED_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(EMBEDDED.len(), EMBEDDED_COUNT);
    }

    #[test]
    fn embedded_words_are_normalized() {
        for &word in EMBEDDED {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_contains_known_words() {
        for word in ["apple", "apply", "jupiter", "understand"] {
            assert!(EMBEDDED.contains(&word), "missing {word}");
        }
    }
}
