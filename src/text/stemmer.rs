//! Tokenizer and single-pass suffix stripper for Turkish text.
//!
//! The stemmer is a heuristic, not a morphological analyzer: it removes at
//! most one suffix per word, taking the first entry of [`SUFFIXES`] that
//! fits. Words carrying several suffixes are only partially reduced.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::text::normalizer;

/// Words at or below this length are treated as roots.
const MIN_STEMMABLE_CHARS: usize = 3;

/// Tokens shorter than this are dropped by [`tokenize`].
pub const MIN_TOKEN_CHARS: usize = 3;

/// Ordered suffix list, most specific first. Order matters.
#[rustfmt::skip]
const SUFFIXES: &[&str] = &[
    // present continuous, formal
    "mektedir", "maktadır",
    // plural followed by case or possessive
    "lerinden", "larından", "lerinde", "larında", "leriyle", "larıyla",
    "lerini", "larını", "lerine", "larına", "lerin", "ların",
    // present continuous
    "iyor", "ıyor", "uyor", "üyor",
    // future
    "ecek", "acak",
    // necessity
    "meli", "malı",
    // relative locative
    "deki", "daki",
    // reported past
    "miş", "mış", "muş", "müş",
    // nominalizing and privative
    "lik", "lık", "luk", "lük", "siz", "sız",
    // plural
    "ler", "lar",
    // ablative
    "den", "dan", "ten", "tan",
    // genitive
    "nin", "nın",
    // locative
    "de", "da",
    // possessive and accusative
    "im", "ım", "in", "ın",
];

static NON_TURKISH_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-zçğıöşü]+").expect("static pattern is valid"));

/// Strip at most one suffix from `word`.
///
/// A suffix is removed only when the remainder is at least two characters
/// longer than the suffix itself.
pub fn stem(word: &str) -> String {
    if word.chars().count() <= MIN_STEMMABLE_CHARS {
        return word.to_string();
    }

    SUFFIXES
        .iter()
        .find_map(|suffix| {
            word.strip_suffix(suffix)
                .filter(|remainder| remainder.chars().count() >= suffix.chars().count() + 2)
        })
        .unwrap_or(word)
        .to_string()
}

/// Replace every character outside the lowercase Turkish alphabet with a
/// space. Expects already lowercased input.
pub(crate) fn letters_only(normalized: &str) -> String {
    NON_TURKISH_LETTER.replace_all(normalized, " ").into_owned()
}

/// Lowercase, strip non-letters, split and stem.
///
/// Tokens shorter than [`MIN_TOKEN_CHARS`] are dropped. Duplicates and input
/// order are preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = normalizer::lower(text);
    letters_only(&normalized)
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(stem)
        .collect()
}

/// Lenient overlap between two stem collections.
///
/// A pair counts as shared when the stems are equal or one contains the
/// other. The pair count is divided by the number of distinct stems across
/// both sides, so the result may exceed `1.0` for heavily overlapping input.
pub fn similarity<A, B>(tokens_a: &[A], tokens_b: &[B]) -> f64
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let set_a: BTreeSet<&str> = tokens_a.iter().map(AsRef::as_ref).collect();
    let set_b: BTreeSet<&str> = tokens_b.iter().map(AsRef::as_ref).collect();

    let shared = set_a
        .iter()
        .flat_map(|a| set_b.iter().map(move |b| (*a, *b)))
        .filter(|(a, b)| a == b || a.contains(b) || b.contains(a))
        .count();
    let union = set_a.union(&set_b).count();

    shared as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::{letters_only, similarity, stem, tokenize};

    #[test]
    fn short_words_are_roots() {
        for word in ["", "a", "ev", "dan", "lar", "ağ"] {
            assert_eq!(stem(word), word);
        }
    }

    #[test]
    fn strips_a_single_suffix() {
        assert_eq!(stem("yazıcılar"), "yazıcı");
        assert_eq!(stem("bilgisayarlarında"), "bilgisayar");
        assert_eq!(stem("sunucudan"), "sunucu");
    }

    #[test]
    fn never_strips_more_than_once() {
        // "dan" wins first; the plural underneath is left alone.
        assert_eq!(stem("kitaplardan"), "kitaplar");
        assert_eq!(stem("evlerinde"), "evlerin");
    }

    #[test]
    fn keeps_suffix_when_remainder_is_too_short() {
        // "iyor" would leave "gel", which is not two longer than the suffix.
        assert_eq!(stem("geliyor"), "geliyor");
        assert_eq!(stem("evde"), "evde");
    }

    #[test]
    fn letters_only_blanks_punctuation_and_digits() {
        assert_eq!(letters_only("yazıcı-2, hata!"), "yazıcı hata ");
    }

    #[test]
    fn tokenize_lowercases_filters_and_keeps_duplicates() {
        let tokens = tokenize("Yazıcılar, yazıcılar ve AĞ!");
        assert_eq!(tokens, vec!["yazıcı", "yazıcı"]);
    }

    #[test]
    fn tokenize_of_blank_text_is_empty() {
        assert!(tokenize("  \t ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn similarity_is_zero_for_empty_sides() {
        let some = vec!["ağ".to_string(), "sunucu".to_string()];
        let none: Vec<String> = Vec::new();
        assert_eq!(similarity(&none, &some), 0.0);
        assert_eq!(similarity(&some, &none), 0.0);
    }

    #[test]
    fn similarity_counts_containment() {
        let a = ["yazıcı", "kağıt"];
        let b = ["yazıc", "toner"];
        // "yazıcı" contains "yazıc"; union has four distinct stems.
        assert!((similarity(&a, &b) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn similarity_of_identical_sets() {
        let a = ["bilgi", "işlem"];
        assert!((similarity(&a, &a) - 1.0).abs() < f64::EPSILON);
    }
}
