//! jidhr extracts approximate Arabic roots without a root dictionary, using
//! the ISRI affix and pattern rules. Besides the stemmer itself it provides a
//! tokenizer for raw Arabic text and batch processing of files.

// Module declarations
pub mod error;
pub mod parser;
pub mod stemmer;
pub mod utils;
pub mod config;

// Re-exports
pub use error::{Error, Result};
pub use stemmer::{stem, IsriStemmer, Stemmer};
pub use utils::processing::ProcessingManager;

// Re-export the config from config module
pub use config::JidhrConfig;
