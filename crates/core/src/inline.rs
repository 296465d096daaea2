//! Inline emphasis parsing.
//!
//! Splits a line into plain and bold runs on `**...**` spans.

use crate::types::TextRun;
use regex::Regex;
use std::sync::LazyLock;

/// Shortest-match `**bold**` span. The first closing marker ends the span.
static BOLD_SPAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Parse a line into ordered emphasis runs.
///
/// Text outside spans becomes plain runs and text inside becomes bold runs.
/// The result is never empty: a line without spans (including the empty
/// line) yields a single plain run holding the whole line.
pub fn parse_runs(text: &str) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let mut last = 0;

    for caps in BOLD_SPAN_REGEX.captures_iter(text) {
        let (Some(full), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if full.start() > last {
            runs.push(TextRun::plain(&text[last..full.start()]));
        }
        runs.push(TextRun::bold(inner.as_str()));
        last = full.end();
    }

    if last < text.len() {
        runs.push(TextRun::plain(&text[last..]));
    }

    if runs.is_empty() {
        runs.push(TextRun::plain(text));
    }

    runs
}

/// Concatenated run text, ignoring emphasis.
pub fn runs_text(runs: &[TextRun]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_is_single_run() {
        assert_eq!(parse_runs("Just text"), vec![TextRun::plain("Just text")]);
    }

    #[test]
    fn test_empty_line_yields_one_empty_run() {
        assert_eq!(parse_runs(""), vec![TextRun::plain("")]);
    }

    #[test]
    fn test_bold_spans_in_middle() {
        assert_eq!(
            parse_runs("A **bold** and **strong** finish"),
            vec![
                TextRun::plain("A "),
                TextRun::bold("bold"),
                TextRun::plain(" and "),
                TextRun::bold("strong"),
                TextRun::plain(" finish"),
            ]
        );
    }

    #[test]
    fn test_whole_line_bold() {
        assert_eq!(parse_runs("**Key takeaway**"), vec![TextRun::bold("Key takeaway")]);
    }

    #[test]
    fn test_shortest_match() {
        // The first closing marker ends the span; the trailing marker is plain.
        assert_eq!(
            parse_runs("**a** b**"),
            vec![TextRun::bold("a"), TextRun::plain(" b**")]
        );
    }

    #[test]
    fn test_unclosed_marker_is_plain() {
        assert_eq!(parse_runs("**open only"), vec![TextRun::plain("**open only")]);
    }

    #[test]
    fn test_round_trip_drops_markers() {
        let input = "Use **Rust** for **speed** and safety";
        assert_eq!(runs_text(&parse_runs(input)), input.replace("**", ""));
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(
            parse_runs("• **Café** crème"),
            vec![
                TextRun::plain("• "),
                TextRun::bold("Café"),
                TextRun::plain(" crème"),
            ]
        );
    }
}
