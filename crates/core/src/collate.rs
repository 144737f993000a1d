//! Locale-aware string comparison

use feruca::{Collator, Locale, Tailoring};
use std::cell::RefCell;
use std::cmp::Ordering;

thread_local! {
    // Non-ignorable punctuation, code point tiebreak for canonically equal text
    static COLLATOR: RefCell<Collator> =
        RefCell::new(Collator::new(Tailoring::Cldr(Locale::Root), false, true));
}

/// Compare two strings with the Unicode Collation Algorithm (CLDR root
/// locale), the order a browser's default `localeCompare` gives table text.
///
/// Accents and case only break ties between otherwise equal letters
/// (`"Émile" < "Zeta"`, `"apple" < "Apple"`), and punctuation sorts before
/// digits and letters. Digits are compared as characters, not numbers.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| collator.borrow_mut().collate(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(locale_compare("Apple", "banana"), Ordering::Less);
        assert_eq!(locale_compare("banana", "Apple"), Ordering::Greater);
        assert_eq!(locale_compare("banana", "cherry"), Ordering::Less);
        assert_eq!(locale_compare("GENIE3", "grnboost2"), Ordering::Less);
    }

    #[test]
    fn test_accented_letters_sort_with_their_base_letter() {
        assert_eq!(locale_compare("Émile", "Zeta"), Ordering::Less);
        assert_eq!(locale_compare("émile", "fable"), Ordering::Less);
        assert_eq!(locale_compare("eclair", "éclair"), Ordering::Less);
        assert_eq!(locale_compare("Ökologie", "Paris"), Ordering::Less);
    }

    #[test]
    fn test_punctuation_before_letters() {
        assert_eq!(locale_compare("~tilde", "alpha"), Ordering::Less);
        assert_eq!(locale_compare("{brace}", "alpha"), Ordering::Less);
        assert_eq!(locale_compare("|pipe", "zeta"), Ordering::Less);
        assert_eq!(locale_compare("_private", "9lives"), Ordering::Less);
    }

    #[test]
    fn test_lowercase_first_on_tie() {
        assert_eq!(locale_compare("apple", "Apple"), Ordering::Less);
        assert_eq!(locale_compare("Apple", "apple"), Ordering::Greater);
        assert_eq!(locale_compare("PPCOR", "PPCOR"), Ordering::Equal);
    }

    #[test]
    fn test_digits_are_not_numeric() {
        // "10" < "2" as text
        assert_eq!(locale_compare("10", "2"), Ordering::Less);
        assert_eq!(locale_compare("", "a"), Ordering::Less);
    }

    #[test]
    fn test_sorts_mixed_names() {
        let mut names = vec!["zeta", "Émile", "~tilde", "apple", "Apple", "10", "2", "éclair"];
        names.sort_by(|a, b| locale_compare(a, b));

        assert_eq!(
            names,
            vec!["~tilde", "10", "2", "apple", "Apple", "éclair", "Émile", "zeta"]
        );
    }
}
