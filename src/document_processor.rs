/*!
 * Text extraction from source documents.
 *
 * Plain-text files are read verbatim as UTF-8. Word documents are parsed
 * with docx-rs and reduced to their paragraph texts, joined with newlines
 * and with empty paragraphs skipped, so the downstream pipeline only ever
 * sees a single flat string.
 */

use std::fs;
use std::path::Path;

use docx_rs::{DocumentChild, ParagraphChild, RunChild, read_docx};

use crate::errors::AppError;

/// Source document format, inferred from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// UTF-8 plain text (.txt)
    PlainText,
    /// Word document (.docx)
    WordDocument,
}

impl DocumentFormat {
    /// Infer the format from a path, case-insensitively.
    ///
    /// Any extension other than `txt` or `docx` is rejected up front so an
    /// unsupported file never reaches a backend.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => Ok(Self::PlainText),
            "docx" => Ok(Self::WordDocument),
            _ => Err(AppError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Extract the raw text content of a source document.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String, AppError> {
    let path = path.as_ref();
    match DocumentFormat::from_path(path)? {
        DocumentFormat::PlainText => {
            fs::read_to_string(path).map_err(|e| AppError::File(format!("{}: {}", path.display(), e)))
        }
        DocumentFormat::WordDocument => extract_docx_text(path),
    }
}

/// Read a .docx file and join its non-empty paragraph texts with newlines.
fn extract_docx_text(path: &Path) -> Result<String, AppError> {
    let bytes =
        fs::read(path).map_err(|e| AppError::File(format!("{}: {}", path.display(), e)))?;

    let docx = read_docx(&bytes)
        .map_err(|e| AppError::Document(format!("{}: {:?}", path.display(), e)))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => {
                let text = paragraph_text(&paragraph.children);
                if text.is_empty() { None } else { Some(text) }
            }
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

/// Concatenate the text runs of one paragraph.
fn paragraph_text(children: &[ParagraphChild]) -> String {
    let mut text = String::new();
    for child in children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}
