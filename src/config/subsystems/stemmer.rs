// src/config/subsystems/stemmer.rs

use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::config::FromIni;
use crate::stemmer::{IdentityStemmer, IsriStemmer, Stemmer};

/// Runtime switches around the stemmer. The rule tables themselves are fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StemmerConfig {
    pub enabled: bool,
    // Drop stop words from batch output instead of echoing them
    pub skip_stop_words: bool,
}

impl Default for StemmerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            skip_stop_words: false,
        }
    }
}

impl FromIni for StemmerConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "stemmer" {
            return None;
        }

        let target = match key {
            "enabled" => &mut self.enabled,
            "skip_stop_words" => &mut self.skip_stop_words,
            _ => return None,
        };
        match value.parse() {
            Ok(flag) => {
                *target = flag;
                Some(Ok(()))
            },
            Err(_) => Some(Err(Error::Config(
                format!("Invalid {} value (must be true/false): {}", key, value)
            ))),
        }
    }
}

impl StemmerConfig {
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// The stemmer this configuration asks for.
    pub fn build(&self) -> Box<dyn Stemmer> {
        if self.enabled {
            Box::new(IsriStemmer::new())
        } else {
            Box::new(IdentityStemmer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_requested_stemmer() {
        let mut config = StemmerConfig::default();
        assert_eq!(config.build().name(), "isri");
        assert!(config.from_ini_section("stemmer", "enabled", "false").unwrap().is_ok());
        assert_eq!(config.build().name(), "identity");
    }

    #[test]
    fn rejects_non_boolean() {
        let mut config = StemmerConfig::default();
        assert!(config.from_ini_section("stemmer", "skip_stop_words", "1").unwrap().is_err());
        assert!(config.from_ini_section("stemmer", "tables", "x").is_none());
    }
}
