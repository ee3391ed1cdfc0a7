//! Name collation used for list ordering.
//!
//! Comparison runs in three levels, like a default-strength collator:
//! 1. base letters, ignoring accents and case (`Éclair < Fred`);
//! 2. accents, unaccented first (`Eclair < Éclair`);
//! 3. case, lower case first (`rick < Rick`).
//!
//! Names equal at every level are reported as `Equal` so stable sorts keep
//! input order.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Locale-style comparison of two display names.
pub fn compare_names(left: &str, right: &str) -> Ordering {
    base_letters(left)
        .cmp(base_letters(right))
        .then_with(|| accented_letters(left).cmp(accented_letters(right)))
        .then_with(|| compare_case(left, right))
}

fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().flat_map(char::to_lowercase)
}

fn compare_case(left: &str, right: &str) -> Ordering {
    for (l, r) in left.nfd().zip(right.nfd()) {
        if l == r {
            continue;
        }
        match (l.is_lowercase(), r.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::compare_names;
    use std::cmp::Ordering;

    #[test]
    fn case_is_ignored_at_first_level() {
        assert_eq!(compare_names("alpha", "Beta"), Ordering::Less);
        assert_eq!(compare_names("Beta", "Gamma"), Ordering::Less);
        assert_eq!(compare_names("gamma", "Beta"), Ordering::Greater);
    }

    #[test]
    fn lower_case_wins_case_only_ties() {
        assert_eq!(compare_names("rick", "Rick"), Ordering::Less);
        assert_eq!(compare_names("Rick", "rick"), Ordering::Greater);
        assert_eq!(compare_names("Rick", "Rick"), Ordering::Equal);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(compare_names("Rick", "Rick Sanchez"), Ordering::Less);
    }

    #[test]
    fn accents_only_break_ties_between_base_letters() {
        assert_eq!(compare_names("Éclair", "Fred"), Ordering::Less);
        assert_eq!(compare_names("Zed", "Éclair"), Ordering::Greater);
        assert_eq!(compare_names("Eclair", "Éclair"), Ordering::Less);
        assert_eq!(compare_names("éclair", "Éclair"), Ordering::Less);
    }

    #[test]
    fn composed_and_decomposed_forms_are_equal() {
        assert_eq!(compare_names("Ren\u{e9}", "Rene\u{301}"), Ordering::Equal);
    }
}
