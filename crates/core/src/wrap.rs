//! Line wrapping, section segmentation and chunk grouping.
//!
//! These are the pagination primitives of the slide path: raw text is cut
//! into sections on separator lines, each section is word-wrapped, and the
//! wrapped lines are batched into slide-sized chunks.

use regex::Regex;
use std::sync::LazyLock;

/// A separator line between two newlines.
static SECTION_SPLIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:\*{3,}|-{3,})\n").unwrap());

/// Default maximum wrapped line width, in characters.
pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Default number of logical lines per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 9;

/// Greedy word-wrap a block of text.
///
/// Lines that are blank after trimming are dropped. Words are split on
/// single spaces and never broken, so a word longer than `max_len` is
/// emitted alone on its own line. The width check counts the space that
/// would follow the new word, so emitted lines stay below `max_len`.
pub fn wrap_lines(text: &str, max_len: usize) -> Vec<String> {
    let mut output = Vec::new();

    for line in text.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut buffer = String::new();
        let mut buffer_len = 0;

        for word in line.split(' ') {
            let word_len = word.chars().count();
            if buffer_len > 0 && buffer_len + 1 + word_len + 1 > max_len {
                flush(&mut output, &buffer);
                buffer.clear();
                buffer_len = 0;
            }
            if buffer_len > 0 {
                buffer.push(' ');
                buffer_len += 1;
            }
            buffer.push_str(word);
            buffer_len += word_len;
        }

        flush(&mut output, &buffer);
    }

    output
}

fn flush(output: &mut Vec<String>, buffer: &str) {
    let line = buffer.trim();
    if !line.is_empty() {
        output.push(line.to_string());
    }
}

/// Split raw content into sections on separator lines.
///
/// Sections are trimmed and empty ones dropped. Input without separators
/// yields a single section.
pub fn split_sections(content: &str) -> Vec<String> {
    let content = content.replace("\r\n", "\n");
    SECTION_SPLIT_REGEX
        .split(&content)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Group a section's wrapped lines into chunks of at most `chunk_size` lines.
///
/// Each chunk is the batch's lines joined with newlines.
pub fn group_chunks(section: &str, wrap_width: usize, chunk_size: usize) -> Vec<String> {
    let lines: Vec<String> = wrap_lines(section, wrap_width)
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect();

    lines
        .chunks(chunk_size.max(1))
        .map(|batch| batch.join("\n"))
        .collect()
}

/// Chunk every section of the content, in section order.
pub fn chunk_content(content: &str, wrap_width: usize, chunk_size: usize) -> Vec<String> {
    let sections = split_sections(content);
    log::debug!("Segmented content into {} sections", sections.len());

    sections
        .iter()
        .flat_map(|section| group_chunks(section, wrap_width, chunk_size))
        .collect()
}
