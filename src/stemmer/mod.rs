pub mod affix;
pub mod isri;
pub mod normalize;
pub mod patterns;
pub mod tables;

use lazy_static::lazy_static;

pub use self::isri::IsriStemmer;
pub use self::normalize::{fold_initial_hamza, norm, strip_diacritics, NormMode};
pub use self::tables::StemmerTables;

/// Reduces a single word token to its stem.
pub trait Stemmer: Send + Sync {
    /// Stem one token. Never fails and never returns more code points than it
    /// was given.
    fn stem(&self, token: &str) -> String;

    fn name(&self) -> &'static str;
}

/// Passes tokens through untouched. Used when stemming is switched off in the
/// configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem(&self, token: &str) -> String {
        token.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

lazy_static! {
    static ref DEFAULT_STEMMER: IsriStemmer = IsriStemmer::new();
}

/// Stem a token with the process-wide ISRI stemmer.
pub fn stem(token: &str) -> String {
    DEFAULT_STEMMER.stem(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_function_uses_isri() {
        assert_eq!(stem("مكتوب"), "كتب");
    }

    #[test]
    fn identity_stemmer_keeps_tokens() {
        assert_eq!(IdentityStemmer.stem("مُعَلِّمُون"), "مُعَلِّمُون");
        assert_eq!(IdentityStemmer.name(), "identity");
    }

    #[test]
    fn stemmers_are_usable_as_trait_objects() {
        let stemmers: Vec<Box<dyn Stemmer>> = vec![Box::new(IsriStemmer::new()), Box::new(IdentityStemmer)];
        let out: Vec<String> = stemmers.iter().map(|s| s.stem("كتاب")).collect();
        assert_eq!(out, vec!["كتب".to_string(), "كتاب".to_string()]);
    }
}
