// src/utils/text.rs
use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_BEFORE_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+([.,;])").expect("Failed to compile SPACE_BEFORE_PUNCT"));

/// Joins every whitespace run (newlines included) into a single space.
pub fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Single-line cleanup applied to every extracted value: collapses whitespace,
/// drops stray spaces before `.`, `,` and `;`, and trims.
pub fn cleanup_line(input: &str) -> String {
    let collapsed = collapse_whitespace(input);
    SPACE_BEFORE_PUNCT
        .replace_all(&collapsed, "$1")
        .trim()
        .to_string()
}

/// Removes any run of leading dashes (ASCII, en, em) and the whitespace around it.
pub fn strip_leading_dash(input: &str) -> &str {
    input
        .trim_start()
        .trim_start_matches(|c: char| matches!(c, '-' | '–' | '—'))
        .trim_start()
}
