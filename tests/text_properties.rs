use helpdesk_classifier::text::normalizer::lower;
use helpdesk_classifier::text::stemmer::{similarity, stem, tokenize};

const SAMPLES: &[&str] = &[
    "ev",
    "ağ",
    "kod",
    "yazıcılar",
    "bilgisayarlarında",
    "kitaplardan",
    "sunucudaki",
    "güncellenmiş",
    "gelecek",
    "Bilgi İşlem",
    "İNSAN KAYNAKLARI",
    "Işık",
];

#[test]
fn words_up_to_three_chars_are_unchanged() {
    for word in SAMPLES.iter().filter(|word| word.chars().count() <= 3) {
        assert_eq!(stem(word), *word);
    }
}

#[test]
fn stemming_only_shortens() {
    for word in SAMPLES {
        let word = lower(word);
        let stemmed = stem(&word);
        assert!(
            word.starts_with(&stemmed),
            "{stemmed} is not a prefix of {word}"
        );
    }
}

#[test]
fn lower_is_idempotent_on_samples() {
    for sample in SAMPLES {
        let once = lower(sample);
        assert_eq!(lower(&once), once);
    }
}

#[test]
fn similarity_with_an_empty_side_is_zero() {
    let empty: Vec<String> = Vec::new();
    for sample in SAMPLES {
        let tokens = tokenize(sample);
        assert_eq!(similarity(&empty, &tokens), 0.0);
        assert_eq!(similarity(&tokens, &empty), 0.0);
    }
}

#[test]
fn tokens_are_at_least_three_chars() {
    let tokens = tokenize("Ağ, VPN ve e-posta sunucusu 3 gündür kapalı");
    assert!(tokens.iter().all(|token| token.chars().count() >= 3));
    assert_eq!(tokens.first().map(String::as_str), Some("vpn"));
}
