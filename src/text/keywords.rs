//! Keyword sets and exact-token Jaccard scoring.

use std::collections::BTreeSet;

use crate::text::normalizer;
use crate::text::stemmer::letters_only;

/// Deduplicated keyword set of `text`.
///
/// Text is lowercased, non-letters become separators and tokens of two
/// characters or fewer are dropped. Tokens are not stemmed.
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    let normalized = normalizer::lower(text);
    letters_only(&normalized)
        .split_whitespace()
        .filter(|token| token.chars().count() > 2)
        .map(str::to_string)
        .collect()
}

/// `|a ∩ b| / |a ∪ b|` over exact tokens. Zero when both sets are empty.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{extract_keywords, jaccard};

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|word| word.to_string()).collect()
    }

    #[test]
    fn extracts_unique_lowercase_words() {
        let keywords = extract_keywords("Yazıcı yazıcı, ve KAĞIT sıkışması!");
        assert_eq!(keywords, set(&["kağıt", "sıkışması", "yazıcı"]));
    }

    #[test]
    fn jaccard_is_exact_not_lenient() {
        let a = set(&["yazıcı", "kağıt"]);
        let b = set(&["yazıc", "kağıt"]);
        assert!((jaccard(&a, &b) - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn jaccard_of_empty_sets_is_zero() {
        assert_eq!(jaccard(&BTreeSet::new(), &BTreeSet::new()), 0.0);
    }
}
