// src/config/file.rs

use serde::{Serialize, Deserialize};
use std::path::PathBuf;
use crate::error::Result;
use super::FromIni;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    // Only files with this extension are picked up from input_dir
    pub extension: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("data/input"),
            output_dir: PathBuf::from("data/stems"),
            extension: "txt".to_string(),
        }
    }
}

impl FromIni for FileConfig {
    fn from_ini_section(&mut self, _section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        match key {
            "input_dir" => {
                self.input_dir = PathBuf::from(value.trim_matches('"'));
                Some(Ok(()))
            },
            "output_dir" => {
                self.output_dir = PathBuf::from(value.trim_matches('"'));
                Some(Ok(()))
            },
            "extension" => {
                self.extension = value.trim_matches('"').trim_start_matches('.').to_string();
                Some(Ok(()))
            },
            _ => None,
        }
    }
}

impl FileConfig {
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            return Err(crate::error::Error::Config(
                "File extension must not be empty".to_string()
            ));
        }
        Ok(())
    }

    /// Checks the input directory and creates the output directory. Only
    /// needed by directory processing, so it is not part of `validate`.
    pub fn prepare_directories(&self) -> Result<()> {
        if !self.input_dir.is_dir() {
            return Err(crate::error::Error::Config(
                format!("Input directory does not exist: {:?}", self.input_dir)
            ));
        }
        std::fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_normalized() {
        let mut config = FileConfig::default();
        assert!(config.from_ini_section("file", "extension", "\".xml\"").unwrap().is_ok());
        assert_eq!(config.extension, "xml");
    }

    #[test]
    fn prepare_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileConfig {
            input_dir: dir.path().to_path_buf(),
            output_dir: dir.path().join("out"),
            extension: "txt".to_string(),
        };
        config.prepare_directories().unwrap();
        assert!(dir.path().join("out").is_dir());

        let missing = FileConfig {
            input_dir: dir.path().join("missing"),
            ..config
        };
        assert!(missing.prepare_directories().is_err());
    }
}
