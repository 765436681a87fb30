//! Fixed technical vocabulary used for direct term matching.
//!
//! Terms are stored lowercase and diacritic-free; input must go through
//! [`crate::text::normalizer::fold`] before it is compared against them.

use serde::Serialize;

/// Topic buckets of the full technical lexicon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TechnicalTopic {
    Hardware,
    Software,
    Network,
    Email,
    Security,
}

impl TechnicalTopic {
    /// Folded fragment expected in the display name of the category that
    /// handles this topic, e.g. `"donanim"` for a category named "Donanım".
    pub fn category_keyword(self) -> &'static str {
        match self {
            Self::Hardware => "donanim",
            Self::Software => "yazilim",
            Self::Network => "ag",
            Self::Email => "e-posta",
            Self::Security => "guvenlik",
        }
    }

    pub fn terms(self) -> &'static [&'static str] {
        match self {
            Self::Hardware => HARDWARE_TERMS,
            Self::Software => SOFTWARE_TERMS,
            Self::Network => NETWORK_TERMS,
            Self::Email => EMAIL_TERMS,
            Self::Security => SECURITY_TERMS,
        }
    }
}

/// Bucket scan order; ties in hit count keep this order.
pub const TECHNICAL_TOPICS: [TechnicalTopic; 5] = [
    TechnicalTopic::Hardware,
    TechnicalTopic::Software,
    TechnicalTopic::Network,
    TechnicalTopic::Email,
    TechnicalTopic::Security,
];

#[rustfmt::skip]
const HARDWARE_TERMS: &[&str] = &[
    "yazici", "bilgisayar", "monitor", "ekran", "klavye", "fare", "mouse", "kasa", "anakart",
    "bellek", "harddisk", "sabit disk", "toner", "kartus", "kagit", "tarayici", "projektor",
    "kablo", "laptop", "dizustu", "batarya", "sarj",
];

#[rustfmt::skip]
const SOFTWARE_TERMS: &[&str] = &[
    "yazilim", "program", "uygulama", "windows", "office", "excel", "lisans", "guncelleme",
    "kurulum", "surum", "driver", "surucu",
];

#[rustfmt::skip]
const NETWORK_TERMS: &[&str] = &[
    "internet", "wifi", "wi-fi", "kablosuz", "modem", "router", "vpn", "ip adresi", "baglanti",
    "ethernet", "dns", "switch", "sebeke",
];

#[rustfmt::skip]
const EMAIL_TERMS: &[&str] = &[
    "e-posta", "eposta", "mail", "outlook", "gelen kutusu", "spam", "ek dosya",
];

#[rustfmt::skip]
const SECURITY_TERMS: &[&str] = &[
    "guvenlik", "sifre", "parola", "password", "virus", "yetki", "erisim", "firewall",
    "oltalama", "phishing",
];

/// Buckets of the reduced lexicon used when no keyword table is available.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimpleTopic {
    Hardware,
    Software,
    Network,
    System,
}

impl SimpleTopic {
    /// Lowercase Turkish fragment looked up in category display names.
    pub fn display_fragment(self) -> &'static str {
        match self {
            Self::Hardware => "donanım",
            Self::Software => "yazılım",
            Self::Network => "ağ",
            Self::System => "sistem",
        }
    }

    pub fn terms(self) -> &'static [&'static str] {
        match self {
            Self::Hardware => SIMPLE_HARDWARE_TERMS,
            Self::Software => SIMPLE_SOFTWARE_TERMS,
            Self::Network => SIMPLE_NETWORK_TERMS,
            Self::System => SIMPLE_SYSTEM_TERMS,
        }
    }
}

pub const SIMPLE_TOPICS: [SimpleTopic; 4] = [
    SimpleTopic::Hardware,
    SimpleTopic::Software,
    SimpleTopic::Network,
    SimpleTopic::System,
];

#[rustfmt::skip]
const SIMPLE_HARDWARE_TERMS: &[&str] = &[
    "yazici", "bilgisayar", "monitor", "ekran", "klavye", "fare", "mouse", "toner", "kagit",
];

#[rustfmt::skip]
const SIMPLE_SOFTWARE_TERMS: &[&str] = &[
    "program", "uygulama", "yazilim", "office", "excel", "lisans", "guncelleme",
];

#[rustfmt::skip]
const SIMPLE_NETWORK_TERMS: &[&str] = &[
    "internet", "wifi", "baglanti", "modem", "vpn", "kablosuz",
];

#[rustfmt::skip]
const SIMPLE_SYSTEM_TERMS: &[&str] = &[
    "sistem", "sunucu", "server", "oturum", "hesap", "yedekleme", "erisim",
];

/// Number of `terms` that occur in `folded` as substrings.
pub(crate) fn count_hits(folded: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|term| folded.contains(*term)).count()
}
