pub mod file;
pub mod subsystems;

use serde::{Serialize, Deserialize};
use std::path::Path;
use std::fs;
use crate::error::Result;
use log::{warn, trace};

pub trait FromIni {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JidhrConfig {
    // File paths
    pub files: file::FileConfig,

    // Subsystem configs
    pub parser: subsystems::ParserConfig,
    pub stemmer: subsystems::StemmerConfig,
    pub processor: subsystems::ProcessorConfig,
}

impl JidhrConfig {
    pub fn validate(&self) -> Result<()> {
        self.files.validate()?;
        self.parser.validate()?;
        self.stemmer.validate()?;
        self.processor.validate()?;
        Ok(())
    }

    pub fn from_ini<P: AsRef<Path>>(path: P) -> Result<Self> {
        trace!("Loading configuration from: {:?}", path.as_ref());
        let content = fs::read_to_string(&path)?;
        Self::from_ini_str(&content)
    }

    pub fn from_ini_str(content: &str) -> Result<Self> {
        let mut config = Self::default();
        let mut current_section = String::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                current_section = line[1..line.len()-1].trim().to_string();
                trace!("  Line {}: Found section: [{}]", line_num + 1, current_section);
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();

                // Delegate to appropriate subsystem config
                let handled = match current_section.as_str() {
                    "file" => config.files.from_ini_section(&current_section, key, value),
                    "text_processing" => config.parser.from_ini_section(&current_section, key, value),
                    "stemmer" => config.stemmer.from_ini_section(&current_section, key, value),
                    "processor" => config.processor.from_ini_section(&current_section, key, value),
                    _ => None,
                };
                match handled {
                    Some(result) => result?,
                    None => warn!("Unrecognized config key: {}={} in section [{}]", key, value, current_section),
                }
            } else {
                warn!("Ignoring malformed config line {}: {}", line_num + 1, line);
            }
        }

        config.validate()?;
        Ok(config)
    }
}
