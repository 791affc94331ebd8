//! Case-insensitive name ordering and prefix matching
//!
//! Lowercasing is Unicode-aware (`char::to_lowercase`), so a single source
//! character may fold to several characters. Comparisons walk both strings
//! lazily and never index past either end.

use core::cmp::Ordering;

/// Compare two characters ignoring case
pub fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Lexicographic comparison of two names ignoring case
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// True iff `word` begins with `prefix`, ignoring case
///
/// A `word` shorter than `prefix` never matches. The empty prefix matches
/// every word.
pub fn is_prefix(prefix: &str, word: &str) -> bool {
    let mut word_chars = word.chars();
    for p in prefix.chars() {
        match word_chars.next() {
            Some(w) if chars_eq_ignore_case(p, w) => {}
            _ => return false,
        }
    }
    true
}

/// Grouping key for a name: its first character, lowercased
///
/// Returns `None` for the empty name.
pub fn first_letter_key(name: &str) -> Option<char> {
    name.chars().next().map(fold_char)
}

/// Lowercase a single character, keeping the first char of a multi-char fold
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_ignores_case() {
        assert_eq!(cmp_ignore_case("Batman", "batman"), Ordering::Equal);
        assert_eq!(cmp_ignore_case("alpha", "Beta"), Ordering::Less);
        assert_eq!(cmp_ignore_case("Zoom", "abomination"), Ordering::Greater);
        assert_eq!(cmp_ignore_case("Ant", "Ant-Man"), Ordering::Less);
    }

    #[test]
    fn prefix_matches_case_insensitively() {
        assert!(is_prefix("ant", "Ant-Man"));
        assert!(is_prefix("ANT", "antman2"));
        assert!(is_prefix("", "anything"));
        assert!(!is_prefix("bat", "Ant-Man"));
    }

    #[test]
    fn prefix_longer_than_word_fails() {
        assert!(!is_prefix("Batman Beyond", "Batman"));
        assert!(!is_prefix("a", ""));
    }

    #[test]
    fn first_letter_lowercases() {
        assert_eq!(first_letter_key("Batman"), Some('b'));
        assert_eq!(first_letter_key("ÉTOILE"), Some('é'));
        assert_eq!(first_letter_key("3-D Man"), Some('3'));
        assert_eq!(first_letter_key(""), None);
    }
}
