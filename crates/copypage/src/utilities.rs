//! Text utilities shared by the rules and the orchestrator.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static BLANK_LINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Replace every whitespace run with a single space and trim both ends
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Collapse runs of three or more newlines to exactly one blank line
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_LINE_RUN.replace_all(text, "\n\n").into_owned()
}

/// Pad a block-level fragment with a blank line on each side.
/// Empty content still yields a separator.
pub fn block(content: &str) -> String {
    if content.is_empty() {
        "\n\n".to_string()
    } else {
        format!("\n\n{}\n\n", content)
    }
}

/// Indent every non-empty line by `width` spaces
pub fn indent_lines(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
