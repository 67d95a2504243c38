// src/config/subsystems/parser.rs

use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::config::FromIni;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    // Text cleaning settings
    pub remove_numbers: bool,
    pub remove_tatweel: bool,
    // Diacritics are kept by default; the stemmer removes them itself
    pub preserve_diacritics: bool,
    pub min_token_length: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            remove_numbers: true,
            remove_tatweel: true,
            preserve_diacritics: true,
            min_token_length: 1,
        }
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    value.parse().map_err(|_| Error::Config(
        format!("Invalid {} value (must be true/false): {}", key, value)
    ))
}

impl FromIni for ParserConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "text_processing" {
            return None;
        }

        match key {
            "remove_numbers" => Some(parse_flag(key, value).map(|flag| self.remove_numbers = flag)),
            "remove_tatweel" => Some(parse_flag(key, value).map(|flag| self.remove_tatweel = flag)),
            "preserve_diacritics" => {
                Some(parse_flag(key, value).map(|flag| self.preserve_diacritics = flag))
            },
            "min_token_length" => {
                match value.parse() {
                    Ok(length) if length > 0 => {
                        self.min_token_length = length;
                        Some(Ok(()))
                    },
                    _ => Some(Err(Error::Config(
                        format!("Invalid min_token_length (must be > 0): {}", value)
                    ))),
                }
            },
            _ => None,
        }
    }
}

impl ParserConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_token_length == 0 {
            return Err(Error::Config("min_token_length must be greater than 0".to_string()));
        }
        Ok(())
    }

    /// Returns a description of the current text processing configuration
    pub fn describe(&self) -> String {
        let mut description = Vec::new();

        if self.remove_numbers {
            description.push("removing numeric characters".to_string());
        }
        if self.remove_tatweel {
            description.push("removing tatweel".to_string());
        }
        if !self.preserve_diacritics {
            description.push("removing diacritical marks".to_string());
        }
        if self.min_token_length > 1 {
            description.push(format!("skipping tokens shorter than {}", self.min_token_length));
        }

        if description.is_empty() {
            "no text processing applied".to_string()
        } else {
            description.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_text_processing_keys() {
        let mut config = ParserConfig::default();
        assert!(config.from_ini_section("text_processing", "remove_numbers", "false").unwrap().is_ok());
        assert!(config.from_ini_section("text_processing", "min_token_length", "2").unwrap().is_ok());
        assert!(!config.remove_numbers);
        assert_eq!(config.min_token_length, 2);
    }

    #[test]
    fn rejects_bad_values_and_ignores_other_sections() {
        let mut config = ParserConfig::default();
        assert!(config.from_ini_section("text_processing", "remove_tatweel", "yes").unwrap().is_err());
        assert!(config.from_ini_section("text_processing", "min_token_length", "0").unwrap().is_err());
        assert!(config.from_ini_section("stemmer", "remove_tatweel", "true").is_none());
        assert!(config.from_ini_section("text_processing", "unknown", "1").is_none());
    }

    #[test]
    fn describe_lists_active_rules() {
        assert_eq!(ParserConfig::default().describe(), "removing numeric characters, removing tatweel");
    }
}
