// src/stemmer/normalize.rs

use super::tables::{ALEF, ALEF_HAMZA_ABOVE, ALEF_HAMZA_BELOW, ALEF_MADDA};

/// Which normalizations `norm` applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormMode {
    /// Remove short-vowel diacritics only.
    Diacritics,
    /// Fold a hamza-bearing alif at word start to bare alif only.
    InitialHamza,
    Both,
}

/// Short vowels, tanween, shadda and sukun (U+064B..=U+0652).
pub fn is_short_vowel(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{0652}')
}

pub fn is_hamza_alif(c: char) -> bool {
    matches!(c, ALEF_MADDA | ALEF_HAMZA_ABOVE | ALEF_HAMZA_BELOW)
}

pub fn strip_diacritics(word: &str) -> String {
    word.chars().filter(|&c| !is_short_vowel(c)).collect()
}

pub fn fold_initial_hamza(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if is_hamza_alif(first) => {
            let mut folded = String::with_capacity(word.len());
            folded.push(ALEF);
            folded.extend(chars);
            folded
        }
        _ => word.to_string(),
    }
}

/// Token-level variant of `fold_initial_hamza` used inside the pipeline.
pub(crate) fn fold_initial_hamza_token(token: &[char]) -> Vec<char> {
    let mut folded = token.to_vec();
    if let Some(first) = folded.first_mut() {
        if is_hamza_alif(*first) {
            *first = ALEF;
        }
    }
    folded
}

pub fn norm(word: &str, mode: NormMode) -> String {
    match mode {
        NormMode::Diacritics => strip_diacritics(word),
        NormMode::InitialHamza => fold_initial_hamza(word),
        NormMode::Both => fold_initial_hamza(&strip_diacritics(word)),
    }
}
