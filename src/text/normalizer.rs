//! Turkish-aware case folding and diacritic stripping.
//!
//! Generic Unicode casing gets the dotted/dotless I pair wrong for Turkish
//! (`'I'.to_lowercase()` is `i`, and `'İ'.to_lowercase()` is `i` followed by
//! a combining dot), so the letter pairs are mapped explicitly before the
//! generic conversion runs.

/// Lowercase `text` using Turkish letter pairs first.
///
/// Idempotent: `lower(&lower(x)) == lower(x)`.
pub fn lower(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            'İ' => out.push('i'),
            'I' => out.push('ı'),
            'Ğ' => out.push('ğ'),
            'Ü' => out.push('ü'),
            'Ş' => out.push('ş'),
            'Ö' => out.push('ö'),
            'Ç' => out.push('ç'),
            other => out.extend(other.to_lowercase()),
        }
    }
    out
}

/// Uppercase `text` using Turkish letter pairs first.
pub fn upper(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            'i' => out.push('İ'),
            'ı' => out.push('I'),
            'ğ' => out.push('Ğ'),
            'ü' => out.push('Ü'),
            'ş' => out.push('Ş'),
            'ö' => out.push('Ö'),
            'ç' => out.push('Ç'),
            other => out.extend(other.to_uppercase()),
        }
    }
    out
}

/// Fold Turkish letters to their nearest ASCII counterpart. Case is kept.
pub fn to_ascii(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            'ğ' => 'g',
            'ü' => 'u',
            'ş' => 's',
            'ö' => 'o',
            'ç' => 'c',
            'ı' => 'i',
            'Ğ' => 'G',
            'Ü' => 'U',
            'Ş' => 'S',
            'Ö' => 'O',
            'Ç' => 'C',
            'İ' => 'I',
            other => other,
        })
        .collect()
}

/// Lowercase and strip diacritics in one go.
pub fn fold(text: &str) -> String {
    to_ascii(&lower(text))
}
