//! Locale-aware ordering and searching of country names.
//!
//! Names are compared the way a human-facing list expects: "Åland Islands"
//! sorts next to "Albania", not after "Zimbabwe". Comparison is done in
//! three passes:
//!
//! 1. base letters only (case folded, diacritics stripped)
//! 2. accents (unaccented before accented)
//! 3. case (lowercase before uppercase), then raw code points

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::state::CountryOption;

/// Base-letter key: NFD-decomposed, combining marks dropped, lowercased.
pub fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn accent_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

pub fn compare(a: &str, b: &str) -> Ordering {
    fold(a)
        .cmp(&fold(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Sorts options ascending by label. Stable, so equal labels keep input order.
pub fn sort_options(options: &mut [CountryOption]) {
    options.sort_by(|a, b| compare(&a.label, &b.label));
}

/// Whether `option` matches a search query.
///
/// Empty queries match everything. Otherwise the folded label must contain
/// the folded query, or the code must equal the query ignoring case.
pub fn matches(option: &CountryOption, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    option.value.eq_ignore_ascii_case(query) || fold(&option.label).contains(&fold(query))
}

pub fn filter<'a>(options: &'a [CountryOption], query: &str) -> Vec<&'a CountryOption> {
    options.iter().filter(|o| matches(o, query)).collect()
}
