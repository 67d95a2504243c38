use thiserror::Error;
use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Text processing error: {0}")]
    TextProcessing(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Type alias for Result
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    pub fn text<S: Into<String>>(msg: S) -> Self {
        Error::TextProcessing(msg.into())
    }
}

impl From<crate::parser::ParserError> for Error {
    fn from(err: crate::parser::ParserError) -> Self {
        Error::TextProcessing(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParserError;

    #[test]
    fn parser_errors_become_text_processing_errors() {
        let err: Error = ParserError::InvalidText("empty".to_string()).into();
        assert!(matches!(err, Error::TextProcessing(_)));
        assert_eq!(err.to_string(), "Text processing error: Invalid text: empty");
    }

    #[test]
    fn helper_constructors() {
        assert_eq!(Error::config("bad").to_string(), "Configuration error: bad");
        assert!(matches!(Error::text("x"), Error::TextProcessing(_)));
    }
}
