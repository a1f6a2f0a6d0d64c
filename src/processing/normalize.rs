//! Accent-insensitive text normalization.
//!
//! Strips diacritics from any Latin-script language (French, German,
//! Portuguese, Spanish...) while keeping the Spanish `ñ` intact, then
//! lower-cases. Both complaint text and dictionary terms go through
//! [`normalize`] so they always compare in the same form.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Private-use stand-ins for `ñ` / `Ñ` while the text is decomposed.
const LOWER_ENYE_SENTINEL: char = '\u{E000}';
const UPPER_ENYE_SENTINEL: char = '\u{E001}';

/// Normalize text for keyword comparison.
///
/// `normalize(normalize(x)) == normalize(x)` for every input.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(protect)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(restore)
        .collect::<String>()
        .to_lowercase()
}

fn protect(c: char) -> char {
    match c {
        'ñ' => LOWER_ENYE_SENTINEL,
        'Ñ' => UPPER_ENYE_SENTINEL,
        other => other,
    }
}

fn restore(c: char) -> char {
    match c {
        LOWER_ENYE_SENTINEL | UPPER_ENYE_SENTINEL => 'ñ',
        other => other,
    }
}
