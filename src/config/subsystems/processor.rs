// src/config/subsystems/processor.rs

use serde::{Serialize, Deserialize};
use log::LevelFilter;
use crate::error::{Error, Result};
use crate::config::FromIni;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorConfig {
    // Stem files (and tokens within a file) on the rayon pool
    pub parallel: bool,
    pub batch_size: usize,
    pub log_level: String,
    pub log_to_file: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            batch_size: 10_000,
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

impl FromIni for ProcessorConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "processor" {
            return None;
        }

        match key {
            "parallel" | "log_to_file" => {
                match value.parse() {
                    Ok(flag) => {
                        if key == "parallel" {
                            self.parallel = flag;
                        } else {
                            self.log_to_file = flag;
                        }
                        Some(Ok(()))
                    },
                    Err(_) => Some(Err(Error::Config(
                        format!("Invalid {} value (must be true/false): {}", key, value)
                    ))),
                }
            },
            "batch_size" => {
                match value.parse() {
                    Ok(size) if size > 0 => {
                        self.batch_size = size;
                        Some(Ok(()))
                    },
                    _ => Some(Err(Error::Config(
                        format!("Invalid batch_size (must be > 0): {}", value)
                    ))),
                }
            },
            "log_level" => {
                let level = value.trim_matches('"').to_lowercase();
                match level.as_str() {
                    "error" | "warn" | "info" | "debug" | "trace" | "none" => {
                        self.log_level = level;
                        Some(Ok(()))
                    },
                    _ => Some(Err(Error::Config(
                        format!("Invalid log_level (error, warn, info, debug, trace or none): {}", value)
                    ))),
                }
            },
            _ => None,
        }
    }
}

impl ProcessorConfig {
    pub fn get_log_level(&self) -> LevelFilter {
        match self.log_level.trim().to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            "none" => LevelFilter::Off,
            _ => LevelFilter::Info, // Default to Info if invalid
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::Config("batch_size must be greater than 0".to_string()));
        }
        Ok(())
    }
}
