/*!
 * Tests for file utility functions
 */

use std::fs;

use anyhow::Result;
use doctran::file_utils::FileManager;

use crate::common;

/// Test that ensure_dir creates directories as needed
#[test]
fn test_ensureDir_withNonExistentDir_shouldCreateDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_subdir = temp_dir.path().join("nested").join("deeper");

    FileManager::ensure_dir(&test_subdir)?;

    assert!(test_subdir.is_dir());
    Ok(())
}

/// Test that write_to_file creates parent directories and content
#[test]
fn test_writeToFile_withMissingParent_shouldCreateFileWithContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("out").join("result.txt");

    FileManager::write_to_file(&target, "翻译结果")?;

    assert_eq!(fs::read_to_string(&target)?, "翻译结果");
    Ok(())
}

/// Test the standardized output filename shape
#[test]
fn test_generateOutputFilename_withDocxInput_shouldUseTimestampAndSuffix() {
    let name = FileManager::generate_output_filename("20240101_120000", "docs/whitepaper.docx");
    assert_eq!(name, "20240101_120000_whitepaper_译文.txt");
}

/// Test that translatable detection covers both supported extensions
#[test]
fn test_isTranslatable_withSupportedAndUnsupported_shouldFilterCorrectly() {
    assert!(FileManager::is_translatable("a.txt"));
    assert!(FileManager::is_translatable("b.DOCX"));
    assert!(!FileManager::is_translatable("c.pdf"));
    assert!(!FileManager::is_translatable("no_extension"));
}

/// Test directory scanning: eligible files only, output artifacts excluded
#[test]
fn test_findTranslatableFiles_withMixedDirectory_shouldReturnEligibleSorted() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_file(&dir, "beta.txt", "b")?;
    common::create_test_file(&dir, "alpha.txt", "a")?;
    common::create_test_file(&dir, "report.pdf", "binary")?;
    common::create_test_file(&dir, "20240101_120000_alpha_译文.txt", "output artifact")?;
    fs::create_dir(dir.join("nested"))?;
    common::create_test_file(&dir.join("nested"), "inner.txt", "too deep")?;

    let files = FileManager::find_translatable_files(&dir, "20240101_120000")?;
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();

    assert_eq!(names, vec!["alpha.txt", "beta.txt"]);
    Ok(())
}

/// Test that an empty exclusion prefix excludes nothing
#[test]
fn test_findTranslatableFiles_withEmptyPrefix_shouldReturnEverythingEligible() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "20240101_120000_old_译文.txt", "previous run")?;

    let files = FileManager::find_translatable_files(&dir, "")?;
    assert_eq!(files.len(), 1);
    Ok(())
}
