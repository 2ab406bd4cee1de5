//! Text normalization onto the cipher alphabet

use crate::alphabet::Alphabet;

/// Map arbitrary text onto canonical text over `alphabet`
///
/// Letters are lowered and folded onto the alphabet. Every other character
/// is deleted; each run of deleted characters becomes a single space, and
/// leading and trailing spaces are trimmed.
pub fn normalize(text: &str, alphabet: &Alphabet) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        match alphabet.canonical(c) {
            Some(letter) => {
                if pending_space && !normalized.is_empty() {
                    normalized.push(' ');
                }
                pending_space = false;
                normalized.push(letter);
            }
            None => pending_space = true,
        }
    }

    normalized
}

/// Drop the word separators of canonical text
pub fn strip_spaces(text: &str) -> String {
    text.chars().filter(|&c| c != ' ').collect()
}
