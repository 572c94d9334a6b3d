use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

// @module: File and directory utilities

/// File extensions the pipeline accepts as input
const TRANSLATABLE_EXTENSIONS: [&str; 2] = ["txt", "docx"];

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Write a string to a file, creating parent directories as needed
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Generate the standardized output filename for a translated document:
    /// `<run_timestamp>_<original-basename>_译文.txt`
    pub fn generate_output_filename<P: AsRef<Path>>(run_timestamp: &str, input_file: P) -> String {
        let stem = input_file
            .as_ref()
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy();
        format!("{}_{}_译文.txt", run_timestamp, stem)
    }

    /// Whether a path carries one of the translatable extensions.
    pub fn is_translatable<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref()
            .extension()
            .map(|ext| {
                let ext = ext.to_string_lossy().to_lowercase();
                TRANSLATABLE_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false)
    }

    /// Find translatable files directly inside a directory (non-recursive),
    /// skipping filenames that start with `exclude_prefix` so a run never
    /// picks up its own output artifacts.
    pub fn find_translatable_files<P: AsRef<Path>>(
        dir: P,
        exclude_prefix: &str,
    ) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).max_depth(1).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if !path.is_file() || !Self::is_translatable(path) {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if !exclude_prefix.is_empty() && file_name.starts_with(exclude_prefix) {
                continue;
            }

            result.push(path.to_path_buf());
        }

        result.sort();
        Ok(result)
    }
}
