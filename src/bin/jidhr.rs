use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Local;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use jidhr::{
    config::FromIni,
    utils::StemSummary,
    JidhrConfig,
    ProcessingManager,
    Result,
};

const DEFAULT_CONFIG: &str = "jidhr.ini";

#[derive(Parser)]
#[command(name = "jidhr", version, about = "Extract Arabic roots with the ISRI stemmer")]
struct Cli {
    /// INI configuration file (defaults to ./jidhr.ini when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured log level (error, warn, info, debug, trace, none)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Stem the given words and print one "word<TAB>stem" line each
    Stem {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Stem every word of a UTF-8 text file
    File {
        path: PathBuf,
        /// Print the stemmed tokens as JSON
        #[arg(long)]
        json: bool,
    },
    /// Stem every file of the input directory into JSON reports
    Dir {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn load_config(cli: &Cli) -> Result<JidhrConfig> {
    let mut config = match &cli.config {
        Some(path) => JidhrConfig::from_ini(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => JidhrConfig::from_ini(DEFAULT_CONFIG)?,
        None => JidhrConfig::default(),
    };
    if let Some(level) = &cli.log_level {
        if let Some(result) = config.processor.from_ini_section("processor", "log_level", level) {
            result?;
        }
    }
    Ok(config)
}

fn init_logging(config: &JidhrConfig) -> Result<()> {
    let target = if config.processor.log_to_file {
        fs::create_dir_all("logs")?;
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(format!("logs/jidhr_{}.log", timestamp))?;
        env_logger::Target::Pipe(Box::new(log_file))
    } else {
        env_logger::Target::Stderr
    };

    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, config.processor.get_log_level())
        .target(target)
        .init();
    Ok(())
}

fn run_stem(config: &JidhrConfig, words: &[String]) -> Result<()> {
    let stemmer = config.stemmer.build();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for word in words {
        writeln!(out, "{}\t{}", word, stemmer.stem(word))?;
    }
    Ok(())
}

fn run_file(manager: &ProcessingManager, path: &Path, json: bool) -> Result<()> {
    let tokens = manager.process_file(path)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &tokens)?;
        writeln!(out)?;
    } else {
        for token in &tokens {
            writeln!(out, "{}:{}\t{}", token.line_number, token.original, token.stem)?;
        }
    }
    let summary = StemSummary::from_tokens(&tokens);
    info!("{} tokens, {} distinct stems, {} stop words",
        summary.tokens, summary.distinct_stems, summary.stop_words);
    Ok(())
}

fn run_dir(manager: &ProcessingManager, config: &mut JidhrConfig, input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    if let Some(input) = input {
        config.files.input_dir = input;
    }
    if let Some(output) = output {
        config.files.output_dir = output;
    }
    config.files.prepare_directories()?;

    let progress = ProgressBar::new(0);
    match ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}")
    {
        Ok(style) => progress.set_style(style),
        Err(e) => warn!("Falling back to the default progress style: {}", e),
    }

    let start_time = Instant::now();
    let reports = manager.process_directory(&config.files.input_dir, &config.files.output_dir, Some(&progress))?;
    let total_tokens: usize = reports.iter().map(|r| r.summary.tokens).sum();
    println!("Stemmed {} tokens in {} files into {:?} ({:.2?})",
        total_tokens, reports.len(), config.files.output_dir, start_time.elapsed());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = load_config(&cli)?;
    init_logging(&config)?;

    info!("Starting jidhr with log level: {:?}", config.processor.get_log_level());
    info!("Text processing: {}", config.parser.describe());

    let manager = ProcessingManager::new(&config);
    match cli.command {
        Command::Stem { words } => run_stem(&config, &words),
        Command::File { path, json } => run_file(&manager, &path, json),
        Command::Dir { input, output } => run_dir(&manager, &mut config, input, output),
    }
}
