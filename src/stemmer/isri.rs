// src/stemmer/isri.rs

use lazy_static::lazy_static;
use log::trace;

use super::affix::{reduce_waw, strip_prefix, strip_suffix};
use super::normalize::{fold_initial_hamza_token, strip_diacritics};
use super::patterns;
use super::tables::StemmerTables;
use super::Stemmer;

lazy_static! {
    static ref ISRI_TABLES: StemmerTables = StemmerTables::new();
}

/// Root extraction after the ISRI algorithm ("Arabic stemming without a root
/// dictionary"): normalization, stop words, affix stripping and length
/// based pattern reduction.
///
/// The stemmer holds nothing but a reference to tables that are built once
/// per process, so it is cheap to copy and safe to share between threads.
#[derive(Debug, Clone, Copy)]
pub struct IsriStemmer {
    tables: &'static StemmerTables,
}

impl IsriStemmer {
    pub fn new() -> Self {
        Self { tables: &ISRI_TABLES }
    }

    pub fn tables(&self) -> &'static StemmerTables {
        self.tables
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.tables.is_stop_word(&strip_diacritics(token))
    }

    fn reduce(&self, token: &str) -> String {
        let token: Vec<char> = token.chars().collect();
        let token = strip_prefix(self.tables, &token);
        let token = strip_suffix(self.tables, &token);
        let token = reduce_waw(&token);
        let token = fold_initial_hamza_token(&token);
        patterns::reduce(self.tables, &token).into_iter().collect()
    }
}

impl Default for IsriStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for IsriStemmer {
    fn stem(&self, token: &str) -> String {
        let token = strip_diacritics(token);
        if self.tables.is_stop_word(&token) {
            trace!("{} is a stop word", token);
            return token;
        }
        let stemmed = self.reduce(&token);
        trace!("{} -> {}", token, stemmed);
        stemmed
    }

    fn name(&self) -> &'static str {
        "isri"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics_then_affixes() {
        let stemmer = IsriStemmer::new();
        assert_eq!(stemmer.stem("مُعَلِّمُون"), "علم");
    }

    #[test]
    fn stop_words_bypass_every_stage() {
        let stemmer = IsriStemmer::new();
        assert_eq!(stemmer.stem("الذي"), "الذي");
        assert_eq!(stemmer.stem("الَّذِي"), "الذي");
        // would otherwise lose its alif and yeh
        assert_eq!(stemmer.stem("يكون"), "يكون");
        assert!(stemmer.is_stop_word("وَكَانَ"));
    }

    #[test]
    fn hamza_is_folded_before_pattern_reduction() {
        let stemmer = IsriStemmer::new();
        // أعمال -> اعمال -> افعال pattern
        assert_eq!(stemmer.stem("أعمال"), "عمل");
        // folding also applies to short tokens
        assert_eq!(stemmer.stem("أن"), "ان");
    }

    #[test]
    fn doubled_waw_is_collapsed() {
        let stemmer = IsriStemmer::new();
        assert_eq!(stemmer.stem("ووضع"), "وضع");
    }

    #[test]
    fn seven_letter_token() {
        let stemmer = IsriStemmer::new();
        assert_eq!(stemmer.stem("استخراج"), "خرج");
    }

    #[test]
    fn short_tokens_are_untouched() {
        let stemmer = IsriStemmer::new();
        assert_eq!(stemmer.stem("له"), "له");
        assert_eq!(stemmer.stem("من"), "من");
        assert_eq!(stemmer.stem(""), "");
    }

    #[test]
    fn non_arabic_input_only_loses_diacritics() {
        let stemmer = IsriStemmer::new();
        assert_eq!(stemmer.stem("hello"), "hello");
        assert_eq!(stemmer.stem("stemming"), "stemming");
    }

    #[test]
    fn copies_share_tables() {
        let a = IsriStemmer::new();
        let b = IsriStemmer::default();
        assert!(std::ptr::eq(a.tables(), b.tables()));
        assert_eq!(a.name(), "isri");
    }
}
