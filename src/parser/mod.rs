pub mod arabic;

use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
   #[error("IO error: {0}")]
   IoError(#[from] std::io::Error),

   #[error("Invalid text: {0}")]
   InvalidText(String),
}

pub type Result<T> = std::result::Result<T, ParserError>;

/// A word cut out of raw text, ready to be stemmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextToken {
   pub original_text: String,    // Slice of the input the word was read from
   pub cleaned_text: String,     // Word after cleaning rules were applied
   pub start_byte: usize,
   pub end_byte: usize,
   pub line_number: usize,       // 1-based
}

pub trait TextParser: Sync + Send {
    /// Clean text, keeping only the words, separated by single spaces
    fn clean_text(&self, text: &str) -> Result<String>;

    /// Count valid characters in text
    fn count_valid_chars(&self, text: &str) -> usize;

    /// Determine if a character is countable (Arabic letter)
    fn is_countable_char(&self, c: char) -> bool;

    /// Tokenize text into words
    fn tokenize_text(&self, text: &str) -> Result<Vec<TextToken>>;

    /// Read a UTF-8 file and tokenize its contents
    fn tokenize_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<TextToken>>;
}

pub use self::arabic::ArabicParser;
