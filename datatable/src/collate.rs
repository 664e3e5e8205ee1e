//! Locale-aware string comparison used for column sorting.
//!
//! Strings are compared on case-folded characters first. Strings that are
//! equal after folding are ordered lower case before upper case at the first
//! differing character, then by raw text so the ordering stays total.

use std::cmp::Ordering;

/// Compare two field values the way a human-facing sort expects.
pub fn compare(a: &str, b: &str) -> Ordering {
    primary(a, b)
        .then_with(|| tertiary(a, b))
        .then_with(|| a.cmp(b))
}

fn primary(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn tertiary(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(compare("apple", "Banana"), Ordering::Less);
        assert_eq!(compare("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_lower_case_first_on_tie() {
        assert_eq!(compare("abba", "Abba"), Ordering::Less);
        assert_eq!(compare("Abba", "abba"), Ordering::Greater);
    }

    #[test]
    fn test_equal_strings() {
        assert_eq!(compare("Queen", "Queen"), Ordering::Equal);
        assert_eq!(compare("", ""), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare("Love", "Love Shack"), Ordering::Less);
        assert_eq!(compare("", "a"), Ordering::Less);
    }

    #[test]
    fn test_non_ascii_folding() {
        assert_eq!(compare("Édith", "édith"), Ordering::Greater);
        assert_eq!(compare("ÅSA", "åsa"), Ordering::Greater);
    }
}
