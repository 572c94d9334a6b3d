/*!
 * Tests for controller input resolution and output naming
 */

use anyhow::Result;
use doctran::app_config::{BackendConfig, OllamaConfig};
use doctran::app_controller::Controller;

use crate::common;

const RUN_TIMESTAMP: &str = "20240101_120000";

fn test_controller() -> Controller {
    // The Ollama backend needs no credentials, so construction is always
    // possible without touching the network.
    let config = BackendConfig::Ollama(OllamaConfig::default());
    Controller::new(&config, 2000, RUN_TIMESTAMP.to_string()).unwrap()
}

/// Test that a single-file input resolves to exactly that file
#[test]
fn test_collectInputFiles_withSingleTxtFile_shouldReturnThatFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(&temp_dir.path().to_path_buf(), "input.txt", "hello")?;

    let controller = test_controller();
    let files = controller.collect_input_files(&file)?;

    assert_eq!(files, vec![file]);
    Ok(())
}

/// Test that an explicitly named unsupported file is rejected up front
#[test]
fn test_collectInputFiles_withPdfFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(&temp_dir.path().to_path_buf(), "report.pdf", "%PDF")?;

    let controller = test_controller();
    assert!(controller.collect_input_files(&file).is_err());
    Ok(())
}

/// Test that a directory input is scanned for eligible files only
#[test]
fn test_collectInputFiles_withDirectory_shouldReturnEligibleFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "keep.txt", "a")?;
    common::create_test_file(&dir, "skip.pdf", "b")?;
    common::create_test_file(&dir, &format!("{}_old_译文.txt", RUN_TIMESTAMP), "c")?;

    let controller = test_controller();
    let files = controller.collect_input_files(temp_dir.path())?;

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("keep.txt"));
    Ok(())
}

/// Test that a missing input path is an error
#[test]
fn test_collectInputFiles_withMissingPath_shouldFail() {
    let controller = test_controller();
    assert!(
        controller
            .collect_input_files(std::path::Path::new("/definitely/not/here"))
            .is_err()
    );
}

/// Test the output path layout: output dir + timestamped filename
#[test]
fn test_generateOutputPath_withInputFile_shouldUseTimestampedName() {
    let controller = test_controller().with_output_dir("out");
    let output = controller.generate_output_path("docs/story.docx");

    assert_eq!(
        output,
        std::path::Path::new("out").join(format!("{}_story_译文.txt", RUN_TIMESTAMP))
    );
}
