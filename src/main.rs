// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;

use doctran::app_config::{BackendConfig, BackendKind};
use doctran::app_controller::Controller;
use doctran::file_utils::FileManager;

/// Directory scanned when no input path is given
const DEFAULT_SOURCE_DIR: &str = "sourceFile";

/// CLI wrapper for BackendKind to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliBackend {
    #[value(name = "openai")]
    OpenAi,
    #[value(name = "ollama")]
    Ollama,
}

impl From<CliBackend> for BackendKind {
    fn from(cli_backend: CliBackend) -> Self {
        match cli_backend {
            CliBackend::OpenAi => BackendKind::OpenAi,
            CliBackend::Ollama => BackendKind::Ollama,
        }
    }
}

/// doctran - AI-powered document translation tool
///
/// Translates English text files and Word documents into Simplified Chinese
/// using an OpenAI-compatible API or a local Ollama server.
#[derive(Parser, Debug)]
#[command(name = "doctran")]
#[command(version = "1.0.0")]
#[command(about = "AI-powered English-to-Chinese document translation")]
#[command(long_about = "doctran translates English documents into Simplified Chinese by chunking \
their content and routing each chunk through an LLM chat API.

EXAMPLES:
    doctran report.txt                  # Translate a single file
    doctran ./documents/                # Translate every .txt/.docx in a directory
    doctran --service ollama notes.txt  # Use a local Ollama server
    doctran --chunk_size 4000 book.txt  # Larger chunks per request
    doctran                             # Process the ./sourceFile directory

OUTPUT:
    Translations: ./translateFile/<timestamp>_<name>_译文.txt
    Logs:         ./logs/<timestamp>/translate_<timestamp>.log

CONFIGURATION (.env or environment):
    openai: OPENAI_API_KEY, OPENAI_API_BASE, OPENAI_MODEL required,
            OPENAI_PROXY optional
    ollama: OLLAMA_API_BASE, OLLAMA_MODEL optional (defaults to
            http://localhost:11434 and qwen2.5:7b)")]
struct CommandLineOptions {
    /// File or directory to translate; defaults to ./sourceFile
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Maximum characters per translation request
    #[arg(long = "chunk_size", default_value_t = 2000)]
    chunk_size: usize,

    /// Translation backend to use
    #[arg(long, value_enum, default_value = "openai")]
    service: CliBackend,
}

// @struct: Logger writing to stderr and the per-run log file
struct RunLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl RunLogger {
    // @initializes: Global logger teeing into the run's log file
    fn init(level: LevelFilter, log_path: &Path) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

        let logger = Box::new(RunLogger {
            level,
            file: Mutex::new(file),
        });
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for RunLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let now = Local::now();

        {
            let mut file = self.file.lock();
            let _ = writeln!(
                file,
                "{} - {} - {}",
                now.format("%Y-%m-%d %H:%M:%S,%3f"),
                record.level(),
                record.args()
            );
        }

        let mut stderr = std::io::stderr();
        let _ = writeln!(
            stderr,
            "{}{} {}\x1B[0m",
            Self::color_for_level(record.level()),
            now.format("%H:%M:%S%.3f"),
            record.args()
        );
    }

    fn flush(&self) {
        self.file.lock().flush().ok();
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Environment variables are resolved once at startup; .env is optional.
    dotenvy::dotenv().ok();

    let cli = CommandLineOptions::parse();

    let run_timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let log_dir = PathBuf::from("logs").join(&run_timestamp);
    FileManager::ensure_dir(&log_dir)?;
    let log_path = log_dir.join(format!("translate_{}.log", run_timestamp));
    RunLogger::init(LevelFilter::Info, &log_path)?;

    let backend_kind = BackendKind::from(cli.service);
    let config = match BackendConfig::from_env(backend_kind) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("⚠️ {} configuration error", backend_kind.display_name());
            eprintln!("{}", "=".repeat(50));
            eprintln!("{}", e);
            eprintln!();
            eprintln!("Please check your .env file and ensure all required variables are set.");
            eprintln!("If you do not have a .env file, copy .env.example as a template.");
            eprintln!("{}", "=".repeat(50));
            std::process::exit(1);
        }
    };

    let input_path = match cli.path {
        Some(path) => path,
        None => {
            let source_dir = PathBuf::from(DEFAULT_SOURCE_DIR);
            if !FileManager::dir_exists(&source_dir) {
                FileManager::ensure_dir(&source_dir)?;
                println!("Created source directory: {}", source_dir.display());
                println!("Please put your files in the {} directory and run again.", DEFAULT_SOURCE_DIR);
                return Ok(());
            }
            source_dir
        }
    };

    let controller = Controller::new(&config, cli.chunk_size, run_timestamp)?;
    controller.run(&input_path).await
}
