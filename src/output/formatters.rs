//! Formatting utilities for terminal output

/// Format letters as a comma-separated list, or "none"
#[must_use]
pub fn letter_list(letters: &[char]) -> String {
    if letters.is_empty() {
        return "none".to_string();
    }
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format up to `limit` words, noting how many were left out
#[must_use]
pub fn word_sample<'a, I>(words: I, limit: usize) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let words: Vec<&str> = words.into_iter().collect();
    if words.is_empty() {
        return "-".to_string();
    }

    let mut shown = words[..words.len().min(limit)].join(", ");
    if words.len() > limit {
        shown.push_str(&format!(" (+{} more)", words.len() - limit));
    }
    shown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_list_empty() {
        assert_eq!(letter_list(&[]), "none");
    }

    #[test]
    fn letter_list_joins() {
        assert_eq!(letter_list(&['e', 'y']), "e, y");
    }

    #[test]
    fn word_sample_truncates() {
        let words = ["apple", "apply", "applied"];
        assert_eq!(word_sample(words, 2), "apple, apply (+1 more)");
        assert_eq!(word_sample(words, 5), "apple, apply, applied");
    }

    #[test]
    fn word_sample_empty() {
        assert_eq!(word_sample(Vec::<&str>::new(), 3), "-");
    }
}
