use std::collections::HashSet;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use indicatif::ProgressBar;
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    JidhrConfig,
    error::{Error, Result},
    parser::{ArabicParser, TextParser, TextToken},
    stemmer::{IsriStemmer, Stemmer},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProcessingMode {
    Sequential,
    Parallel,
}

/// One token of the input together with its stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemmedToken {
    pub original: String,
    pub cleaned: String,
    pub stem: String,
    pub start_byte: usize,
    pub end_byte: usize,
    pub line_number: usize,
    pub stop_word: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemSummary {
    pub tokens: usize,
    pub distinct_stems: usize,
    pub stop_words: usize,
}

impl StemSummary {
    pub fn from_tokens(tokens: &[StemmedToken]) -> Self {
        let distinct: HashSet<&str> = tokens.iter().map(|t| t.stem.as_str()).collect();
        Self {
            tokens: tokens.len(),
            distinct_stems: distinct.len(),
            stop_words: tokens.iter().filter(|t| t.stop_word).count(),
        }
    }
}

/// Written next to every processed file as `<name>.stems.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub source: PathBuf,
    pub output: PathBuf,
    pub summary: StemSummary,
    pub tokens: Vec<StemmedToken>,
}

/// Runs text through the parser and the configured stemmer.
pub struct ProcessingManager {
    mode: ProcessingMode,
    batch_size: usize,
    skip_stop_words: bool,
    extension: String,
    parser: ArabicParser,
    stemmer: Box<dyn Stemmer>,
    stop_word_filter: IsriStemmer,
}

impl ProcessingManager {
    pub fn new(config: &JidhrConfig) -> Self {
        let mode = if config.processor.parallel {
            ProcessingMode::Parallel
        } else {
            ProcessingMode::Sequential
        };
        let stemmer = config.stemmer.build();
        debug!("Processing with the {} stemmer in {:?} mode", stemmer.name(), mode);

        Self {
            mode,
            batch_size: config.processor.batch_size.max(1),
            skip_stop_words: config.stemmer.skip_stop_words,
            extension: config.files.extension.clone(),
            parser: ArabicParser::new(config.parser.clone()),
            stemmer,
            stop_word_filter: IsriStemmer::new(),
        }
    }

    pub fn mode(&self) -> ProcessingMode {
        self.mode
    }

    pub fn stemmer_name(&self) -> &'static str {
        self.stemmer.name()
    }

    fn stem_token(&self, token: TextToken) -> Option<StemmedToken> {
        let stop_word = self.stop_word_filter.is_stop_word(&token.cleaned_text);
        if stop_word && self.skip_stop_words {
            return None;
        }
        Some(StemmedToken {
            stem: self.stemmer.stem(&token.cleaned_text),
            original: token.original_text,
            cleaned: token.cleaned_text,
            start_byte: token.start_byte,
            end_byte: token.end_byte,
            line_number: token.line_number,
            stop_word,
        })
    }

    /// Stem tokens, keeping their input order. In parallel mode the tokens
    /// are split into `batch_size` chunks spread over the rayon pool.
    pub fn stem_tokens(&self, tokens: Vec<TextToken>) -> Vec<StemmedToken> {
        match self.mode {
            ProcessingMode::Parallel if tokens.len() > self.batch_size => tokens
                .par_chunks(self.batch_size)
                .flat_map_iter(|chunk| chunk.iter().cloned().filter_map(|t| self.stem_token(t)))
                .collect(),
            _ => tokens.into_iter().filter_map(|t| self.stem_token(t)).collect(),
        }
    }

    pub fn process_text(&self, text: &str) -> Result<Vec<StemmedToken>> {
        let tokens = self.parser.tokenize_text(text)?;
        Ok(self.stem_tokens(tokens))
    }

    pub fn process_file(&self, path: &Path) -> Result<Vec<StemmedToken>> {
        let start_time = Instant::now();
        let tokens = self.parser.tokenize_file(path)?;
        let stemmed = self.stem_tokens(tokens);
        info!("Stemmed {} tokens from {:?} in {:?}", stemmed.len(), path, start_time.elapsed());
        Ok(stemmed)
    }

    /// Files in `input_dir` carrying the configured extension, sorted by name.
    pub fn collect_files(&self, input_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = fs::read_dir(input_dir)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file())
            .filter(|p| p.extension().and_then(|s| s.to_str()) == Some(self.extension.as_str()))
            .collect::<Vec<_>>();
        files.sort();
        Ok(files)
    }

    fn report_path(source: &Path, output_dir: &Path) -> Result<PathBuf> {
        let stem = source.file_stem().ok_or_else(|| {
            Error::text(format!("Cannot derive an output name from {:?}", source))
        })?;
        Ok(output_dir.join(format!("{}.stems.json", stem.to_string_lossy())))
    }

    fn process_into(&self, source: &Path, output_dir: &Path) -> Result<FileReport> {
        let tokens = self.process_file(source)?;
        let output = Self::report_path(source, output_dir)?;
        let report = FileReport {
            source: source.to_path_buf(),
            output: output.clone(),
            summary: StemSummary::from_tokens(&tokens),
            tokens,
        };
        let writer = BufWriter::new(File::create(&output)?);
        serde_json::to_writer_pretty(writer, &report)?;
        debug!("Wrote {:?}", output);
        Ok(report)
    }

    /// Stem every matching file of `input_dir`, writing one JSON report per
    /// file into `output_dir`.
    pub fn process_directory(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        progress: Option<&ProgressBar>,
    ) -> Result<Vec<FileReport>> {
        let files = self.collect_files(input_dir)?;
        info!("Found {} files to process in {:?}", files.len(), input_dir);
        if files.is_empty() {
            warn!("No .{} files in {:?}", self.extension, input_dir);
        }
        fs::create_dir_all(output_dir)?;
        if let Some(bar) = progress {
            bar.set_length(files.len() as u64);
        }

        let run = |path: &PathBuf| {
            let report = self.process_into(path, output_dir);
            if let Some(bar) = progress {
                bar.inc(1);
            }
            report
        };
        let reports = match self.mode {
            ProcessingMode::Parallel => files.par_iter().map(run).collect::<Result<Vec<_>>>()?,
            ProcessingMode::Sequential => files.iter().map(run).collect::<Result<Vec<_>>>()?,
        };

        if let Some(bar) = progress {
            bar.finish_with_message("done");
        }
        Ok(reports)
    }
}
