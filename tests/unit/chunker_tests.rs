/*!
 * Tests for the line-preserving chunking policy
 */

use doctran::chunker::split_by_line;

/// Test that short input stays in a single chunk
#[test]
fn test_splitByLine_withSmallInput_shouldReturnSingleChunk() {
    let chunks = split_by_line("line1\nline2\nline3", 100);
    assert_eq!(chunks, vec!["line1\nline2\nline3".to_string()]);
}

/// Test that lines that do not fit together are split into separate chunks
#[test]
fn test_splitByLine_withTwoLongLines_shouldReturnOneChunkPerLine() {
    let first = "a".repeat(60);
    let second = "b".repeat(60);
    let text = format!("{}\n{}", first, second);

    let chunks = split_by_line(&text, 100);

    assert_eq!(chunks, vec![first, second]);
}

/// Test that empty input yields no chunks
#[test]
fn test_splitByLine_withEmptyInput_shouldReturnEmptySequence() {
    assert!(split_by_line("", 100).is_empty());
}

/// Test that whitespace-only input yields no chunks
#[test]
fn test_splitByLine_withOnlyNewlines_shouldReturnEmptySequence() {
    assert!(split_by_line("\n\n\n", 100).is_empty());
}

/// Test that a single line above the budget passes through unsplit
#[test]
fn test_splitByLine_withOversizedLine_shouldEmitItAsOwnChunk() {
    let oversized = "x".repeat(250);
    let text = format!("short\n{}\ntail", oversized);

    let chunks = split_by_line(&text, 100);

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0], "short");
    assert_eq!(chunks[1], oversized);
    assert_eq!(chunks[2], "tail");
}

/// Test the size invariant: every chunk fits the budget unless it is a
/// single oversized line
#[test]
fn test_splitByLine_withMixedInput_shouldRespectSizeInvariant() {
    let max_chunk_size = 50;
    let text = "short line\n\
                another short line\n\
                a third line that is a bit longer than the others\n\
                tiny\n\
                the last line of the document";

    for chunk in split_by_line(text, max_chunk_size) {
        let within_budget = chunk.chars().count() <= max_chunk_size;
        let single_oversized_line = !chunk.contains('\n');
        assert!(
            within_budget || single_oversized_line,
            "chunk violates size invariant: {:?}",
            chunk
        );
    }
}

/// Test that sizes are measured in characters, not bytes
#[test]
fn test_splitByLine_withMultibyteText_shouldCountCharacters() {
    // Two lines of 10 CJK characters each: 20 chars but 60 bytes.
    let line = "中文字符测试内容样本".to_string();
    let text = format!("{}\n{}", line, line);

    let chunks = split_by_line(&text, 21);

    assert_eq!(chunks, vec![format!("{}\n{}", line, line)]);
}

/// Test that concatenating the chunks reconstructs the original line order
#[test]
fn test_splitByLine_withAnyInput_shouldPreserveLineOrder() {
    let text = (1..=20)
        .map(|i| format!("line number {}", i))
        .collect::<Vec<_>>()
        .join("\n");

    let chunks = split_by_line(&text, 40);
    let reassembled = chunks.join("\n");

    assert_eq!(reassembled, text);
}

/// Test that re-chunking a chunking's own output is a fixed point
#[test]
fn test_splitByLine_withRechunkedOutput_shouldBeIdempotent() {
    let text = (1..=30)
        .map(|i| format!("sentence {} of the sample document", i))
        .collect::<Vec<_>>()
        .join("\n");

    let first_pass = split_by_line(&text, 120);
    let second_pass = split_by_line(&first_pass.join("\n"), 120);

    assert_eq!(first_pass, second_pass);
}

/// Test that chunk boundaries are deterministic
#[test]
fn test_splitByLine_withSameInput_shouldProduceIdenticalChunks() {
    let text = "alpha\nbeta\ngamma\ndelta\nepsilon";
    assert_eq!(split_by_line(text, 12), split_by_line(text, 12));
}

/// Test that trailing whitespace is trimmed from completed chunks
#[test]
fn test_splitByLine_withTrailingBlankLines_shouldTrimChunkEnds() {
    let chunks = split_by_line("content\n\n\n", 100);
    assert_eq!(chunks, vec!["content".to_string()]);
}
