use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::info;

use crate::app_config::BackendConfig;
use crate::document_processor::DocumentFormat;
use crate::file_utils::FileManager;
use crate::providers::BackendClient;
use crate::translation::TranslationService;

// @module: Application controller for document translation

/// Directory translated documents are written to
pub const DEFAULT_OUTPUT_DIR: &str = "translateFile";

/// Main application controller for document translation
pub struct Controller {
    // @field: Translation pipeline for the selected backend
    service: TranslationService,
    // @field: Character budget per translation request
    max_chunk_size: usize,
    // @field: Timestamp identifying this run, used for output naming
    run_timestamp: String,
    // @field: Where translated files are written
    output_dir: PathBuf,
}

impl Controller {
    /// Create a controller for a resolved backend configuration.
    pub fn new(
        config: &BackendConfig,
        max_chunk_size: usize,
        run_timestamp: String,
    ) -> Result<Self> {
        let backend = BackendClient::from_config(config)?;
        Ok(Self {
            service: TranslationService::new(backend),
            max_chunk_size,
            run_timestamp,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        })
    }

    /// Redirect output files to a different directory.
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Resolve an input path to the list of files to translate.
    ///
    /// A file path yields that single file (its format is checked up
    /// front); a directory is scanned non-recursively for translatable
    /// files, excluding this run's own output artifacts.
    pub fn collect_input_files(&self, input_path: &Path) -> Result<Vec<PathBuf>> {
        if FileManager::file_exists(input_path) {
            DocumentFormat::from_path(input_path)?;
            return Ok(vec![input_path.to_path_buf()]);
        }

        if FileManager::dir_exists(input_path) {
            return FileManager::find_translatable_files(input_path, &self.run_timestamp);
        }

        Err(anyhow!("Input path does not exist: {}", input_path.display()))
    }

    /// The output path a given input file will be written to.
    pub fn generate_output_path<P: AsRef<Path>>(&self, input_file: P) -> PathBuf {
        self.output_dir
            .join(FileManager::generate_output_filename(&self.run_timestamp, input_file))
    }

    /// Translate every file the input path resolves to, writing one output
    /// file per input.
    ///
    /// A file whose translation fails aborts the run; outputs already
    /// written for earlier files stay on disk.
    pub async fn run(&self, input_path: &Path) -> Result<()> {
        let files = self.collect_input_files(input_path)?;
        if files.is_empty() {
            info!("No translatable files found in {}", input_path.display());
            return Ok(());
        }

        FileManager::ensure_dir(&self.output_dir)?;

        info!(
            "doctran: {} - {}",
            self.service.backend().kind().display_name(),
            self.service.backend().default_model()
        );

        let multi_progress = MultiProgress::new();
        let files_bar = multi_progress.add(ProgressBar::new(files.len() as u64));
        files_bar.set_style(Self::bar_style("files"));
        files_bar.set_message("Processing files");

        for file in &files {
            let file_name = file
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| file.display().to_string());

            let chunks_bar = multi_progress.add(ProgressBar::new(0));
            chunks_bar.set_style(Self::bar_style("chunks"));
            chunks_bar.set_message(format!("Translating {}", file_name));

            let translated = self
                .service
                .translate_file_with(file, self.max_chunk_size, |done, total| {
                    chunks_bar.set_length(total);
                    chunks_bar.set_position(done);
                })
                .await
                .with_context(|| format!("Failed to translate {}", file.display()))?;

            let output_path = self.generate_output_path(file);
            FileManager::write_to_file(&output_path, &translated)?;
            info!("✅ {} -> {}", file.display(), output_path.display());

            chunks_bar.finish_and_clear();
            files_bar.inc(1);
        }

        files_bar.finish_with_message(format!("Translated {} file(s)", files.len()));
        Ok(())
    }

    fn bar_style(unit: &str) -> ProgressStyle {
        let template = format!(
            "{{spinner:.green}} [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {} ({{percent}}%) {{msg}}",
            unit
        );
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░")
    }
}
