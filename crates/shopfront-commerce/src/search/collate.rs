//! Locale-aware title comparison.
//!
//! Approximates the root-locale collation a browser applies when sorting
//! product names, level by level:
//! 1. base letters, ignoring accents and case (`é` and `E` both count as `e`)
//! 2. accents (`e` before `é`)
//! 3. case (lowercase before its uppercase twin)
//!
//! Raw code point order breaks any remaining tie, so the result is a total
//! order, as a sort requires.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two titles for display ordering.
pub fn collate(a: &str, b: &str) -> Ordering {
    primary(a, b)
        .then_with(|| secondary(a, b))
        .then_with(|| tertiary(a, b))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn primary(a: &str, b: &str) -> Ordering {
    base_letters(a).cmp(base_letters(b))
}

fn secondary(a: &str, b: &str) -> Ordering {
    a.nfd()
        .flat_map(char::to_lowercase)
        .cmp(b.nfd().flat_map(char::to_lowercase))
}

fn tertiary(a: &str, b: &str) -> Ordering {
    let uppers = |s: &str| s.nfd().map(|c| !c.is_lowercase()).collect::<Vec<_>>();
    uppers(a).cmp(&uppers(b))
}
