// ArabicParser: splits raw (possibly XML-tagged) Arabic text into word tokens

use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;
use std::fs;
use std::path::Path;
use crate::config::subsystems::ParserConfig;

use super::{TextParser, ParserError, Result, TextToken};

lazy_static! {
    static ref DIACRITICS: Regex = Regex::new(r"[\u{064B}-\u{065F}\u{0670}]").unwrap();
    static ref TATWEEL: Regex = Regex::new(r"\u{0640}").unwrap();
    static ref NUMBERS: Regex = Regex::new(r"[\p{Nd}٠-٩]").unwrap();
}

#[derive(Debug, Clone)]
pub struct ArabicParser {
    settings: ParserConfig,
}

// Word being collected while scanning
struct PendingWord {
    start_byte: usize,
    end_byte: usize,
    line_number: usize,
    cleaned: String,
}

impl ArabicParser {
    pub fn new(settings: ParserConfig) -> Self {
        Self { settings }
    }

    pub fn new_with_defaults() -> Self {
        Self::new(ParserConfig::default())
    }

    pub fn settings(&self) -> &ParserConfig {
        &self.settings
    }

    fn is_diacritic(&self, c: char) -> bool {
        DIACRITICS.is_match(c.encode_utf8(&mut [0; 4]))
    }

    fn is_tatweel(&self, c: char) -> bool {
        TATWEEL.is_match(c.encode_utf8(&mut [0; 4]))
    }

    fn is_number(&self, c: char) -> bool {
        NUMBERS.is_match(c.encode_utf8(&mut [0; 4]))
    }

    /// Characters that continue a word. Anything else is a boundary.
    fn is_word_char(&self, c: char) -> bool {
        self.is_countable_char(c)
            || self.is_diacritic(c)
            || self.is_tatweel(c)
            || (!self.settings.remove_numbers && self.is_number(c))
    }

    /// What a word character contributes to the cleaned token.
    fn clean_char(&self, c: char) -> Option<char> {
        if self.is_diacritic(c) {
            return self.settings.preserve_diacritics.then_some(c);
        }
        if self.is_tatweel(c) {
            return (!self.settings.remove_tatweel).then_some(c);
        }
        Some(c)
    }

    fn finish_word(&self, text: &str, word: PendingWord, tokens: &mut Vec<TextToken>) {
        let length = word.cleaned.chars().count();
        if length == 0 || length < self.settings.min_token_length {
            return;
        }
        tokens.push(TextToken {
            original_text: text[word.start_byte..word.end_byte].to_string(),
            cleaned_text: word.cleaned,
            start_byte: word.start_byte,
            end_byte: word.end_byte,
            line_number: word.line_number,
        });
    }
}

impl TextParser for ArabicParser {
    fn is_countable_char(&self, c: char) -> bool {
        // Basic Arabic alphabet range (ا through ي)
        matches!(c, '\u{0621}'..='\u{063A}' | '\u{0641}'..='\u{064A}')
    }

    fn clean_text(&self, text: &str) -> Result<String> {
        let words: Vec<String> = self
            .tokenize_text(text)?
            .into_iter()
            .map(|token| token.cleaned_text)
            .collect();
        Ok(words.join(" "))
    }

    fn count_valid_chars(&self, text: &str) -> usize {
        text.chars()
            .filter(|&c| self.is_countable_char(c))
            .count()
    }

    fn tokenize_text(&self, text: &str) -> Result<Vec<TextToken>> {
        let mut tokens = Vec::new();
        let mut pending: Option<PendingWord> = None;
        let mut current_line = 1;
        let mut tag_depth = 0usize;

        let chars: Vec<(usize, char)> = text.char_indices().collect();
        for (i, &(pos, c)) in chars.iter().enumerate() {
            if c == '\n' {
                if let Some(word) = pending.take() {
                    self.finish_word(text, word, &mut tokens);
                }
                current_line += 1;
                continue;
            }

            // Skip markup; most XML tags start with a letter, '/', '!' or '?'
            if c == '<' {
                let looks_like_tag = chars.get(i + 1).map_or(false, |&(_, next)| {
                    next.is_alphanumeric() || next == '/' || next == '!' || next == '?'
                });
                if looks_like_tag {
                    tag_depth += 1;
                    if let Some(word) = pending.take() {
                        self.finish_word(text, word, &mut tokens);
                    }
                    continue;
                }
            } else if c == '>' && tag_depth > 0 {
                tag_depth -= 1;
                continue;
            }
            if tag_depth > 0 {
                continue;
            }

            if self.is_word_char(c) {
                let word = pending.get_or_insert_with(|| PendingWord {
                    start_byte: pos,
                    end_byte: pos,
                    line_number: current_line,
                    cleaned: String::new(),
                });
                word.end_byte = pos + c.len_utf8();
                if let Some(cleaned) = self.clean_char(c) {
                    word.cleaned.push(cleaned);
                }
            } else if let Some(word) = pending.take() {
                self.finish_word(text, word, &mut tokens);
            }
        }
        if let Some(word) = pending.take() {
            self.finish_word(text, word, &mut tokens);
        }

        debug!("Tokenized {} bytes into {} tokens", text.len(), tokens.len());
        Ok(tokens)
    }

    fn tokenize_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<TextToken>> {
        let path = path.as_ref();
        info!("Tokenizing file: {:?}", path);
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|e| {
            ParserError::InvalidText(format!("{:?} is not valid UTF-8: {}", path, e))
        })?;
        self.tokenize_text(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn words(parser: &ArabicParser, text: &str) -> Vec<String> {
        parser
            .tokenize_text(text)
            .unwrap()
            .into_iter()
            .map(|t| t.cleaned_text)
            .collect()
    }

    #[test]
    fn splits_on_whitespace_and_punctuation() {
        let parser = ArabicParser::new_with_defaults();
        assert_eq!(words(&parser, "ذهب الولد، إلى المدرسة."), vec!["ذهب", "الولد", "إلى", "المدرسة"]);
    }

    #[test]
    fn keeps_diacritics_for_the_stemmer_by_default() {
        let parser = ArabicParser::new_with_defaults();
        assert_eq!(words(&parser, "مُعَلِّمُون"), vec!["مُعَلِّمُون"]);

        let mut config = ParserConfig::default();
        config.preserve_diacritics = false;
        let parser = ArabicParser::new(config);
        assert_eq!(words(&parser, "مُعَلِّمُون"), vec!["معلمون"]);
    }

    #[test]
    fn tatweel_and_numbers() {
        let parser = ArabicParser::new_with_defaults();
        assert_eq!(words(&parser, "كتـــاب 123 ٤٥"), vec!["كتاب"]);

        let mut config = ParserConfig::default();
        config.remove_numbers = false;
        config.remove_tatweel = false;
        let parser = ArabicParser::new(config);
        assert_eq!(words(&parser, "كتـاب ٤٥"), vec!["كتـاب", "٤٥"]);
    }

    #[test]
    fn skips_markup_and_latin() {
        let parser = ArabicParser::new_with_defaults();
        assert_eq!(words(&parser, "<p id=\"x\">قال</p> hello كتب"), vec!["قال", "كتب"]);
    }

    #[test]
    fn records_offsets_and_lines() {
        let parser = ArabicParser::new_with_defaults();
        let text = "قال\nكتب الدرس";
        let tokens = parser.tokenize_text(text).unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].line_number, 1);
        assert_eq!(tokens[1].line_number, 2);
        assert_eq!(tokens[2].line_number, 2);
        for token in &tokens {
            assert_eq!(&text[token.start_byte..token.end_byte], token.original_text);
        }
    }

    #[test]
    fn min_token_length_filters_short_words() {
        let mut config = ParserConfig::default();
        config.min_token_length = 3;
        let parser = ArabicParser::new(config);
        assert_eq!(words(&parser, "في البيت له"), vec!["البيت"]);
    }

    #[test]
    fn clean_text_joins_words() {
        let parser = ArabicParser::new_with_defaults();
        assert_eq!(parser.clean_text("  قال:  كتب!  ").unwrap(), "قال كتب");
        assert_eq!(parser.count_valid_chars("قال abc"), 3);
    }

    #[test]
    fn tokenize_file_rejects_invalid_utf8() {
        let parser = ArabicParser::new_with_defaults();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00]).unwrap();
        let err = parser.tokenize_file(file.path()).unwrap_err();
        assert!(matches!(err, ParserError::InvalidText(_)));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("كتب الدرس".as_bytes()).unwrap();
        assert_eq!(parser.tokenize_file(file.path()).unwrap().len(), 2);
    }
}
