// src/extractors/boundary.rs
//! Boundary scan: marker offsets and the slices between them.
//!
//! Every function here is pure and total. A marker that is not found yields
//! `None` or an empty slice, never an error.

use regex::{Captures, Regex};
use std::ops::Range;

/// Offset of the first match of `marker` at or after `from`.
pub fn locate(text: &str, marker: &Regex, from: usize) -> Option<usize> {
    locate_span(text, marker, from).map(|span| span.start)
}

/// Byte span of the first match of `marker` at or after `from`.
pub fn locate_span(text: &str, marker: &Regex, from: usize) -> Option<Range<usize>> {
    if from > text.len() {
        return None;
    }
    marker.find_at(text, from).map(|m| m.range())
}

/// Text after the first `start` match up to the next `end` match, trimmed.
/// Empty when `start` is absent; runs to end of text when `end` is absent.
pub fn between<'t>(text: &'t str, start: &Regex, end: &Regex) -> &'t str {
    let Some(start_span) = locate_span(text, start, 0) else {
        return "";
    };
    let end_idx = locate(text, end, start_span.end).unwrap_or(text.len());
    text[start_span.end..end_idx].trim()
}

/// Text before the first `marker` match, or the whole text when absent. Trimmed.
pub fn before<'t>(text: &'t str, marker: &Regex) -> &'t str {
    match locate(text, marker, 0) {
        Some(end_idx) => text[..end_idx].trim(),
        None => text.trim(),
    }
}

/// Text after the first `marker` match, or empty when absent. Trimmed.
pub fn after<'t>(text: &'t str, marker: &Regex) -> &'t str {
    match locate_span(text, marker, 0) {
        Some(span) => text[span.end..].trim(),
        None => "",
    }
}

/// One repeated item found by [`item_spans`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpan<'t> {
    /// Start of the item head (e.g. the `Q` of `Que,`).
    pub start: usize,
    /// First byte after the head.
    pub body_start: usize,
    /// Start of the next head, or the end of the scanned text.
    pub end: usize,
    /// The `label` capture of the head pattern, if it has one.
    pub label: Option<&'t str>,
}

impl<'t> ItemSpan<'t> {
    /// Head and body together.
    pub fn whole<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    pub fn body<'a>(&self, text: &'a str) -> &'a str {
        &text[self.body_start..self.end]
    }
}

/// Scans `text` for every match of `head` (which must define a `head` group)
/// and returns the item spans they delimit, in document order. Text before the
/// first head belongs to no item.
pub fn item_spans<'t>(text: &'t str, head: &Regex) -> Vec<ItemSpan<'t>> {
    item_spans_where(text, head, |_| true)
}

/// Like [`item_spans`], but only matches accepted by `keep` open an item. A
/// rejected match stays inside the body of the item before it.
pub fn item_spans_where<'t>(
    text: &'t str,
    head: &Regex,
    keep: impl Fn(&Captures<'t>) -> bool,
) -> Vec<ItemSpan<'t>> {
    let heads: Vec<(Range<usize>, Option<&'t str>)> = head
        .captures_iter(text)
        .filter(|caps| keep(caps))
        .filter_map(|caps| {
            let head_match = caps.name("head")?;
            Some((head_match.range(), caps.name("label").map(|l| l.as_str())))
        })
        .collect();

    heads
        .iter()
        .enumerate()
        .map(|(i, (span, label))| ItemSpan {
            start: span.start,
            body_start: span.end,
            end: heads.get(i + 1).map_or(text.len(), |(next, _)| next.start),
            label: *label,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn re(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    #[test]
    fn locate_respects_search_start() {
        let text = "RESUELVE uno RESUELVE dos";
        let marker = re("(?i)resuelve");
        assert_eq!(locate(text, &marker, 0), Some(0));
        assert_eq!(locate(text, &marker, 1), Some(13));
        assert_eq!(locate(text, &marker, 14), None);
        assert_eq!(locate(text, &marker, text.len() + 5), None);
    }

    #[test]
    fn between_slices_after_start_and_before_end() {
        let text = "A CONSIDERANDO: uno dos RESUELVE: tres";
        let start = re(r"CONSIDERANDO\s*:?");
        let end = re(r"RESUELVE\s*:?");
        assert_eq!(between(text, &start, &end), "uno dos");
    }

    #[test]
    fn between_degrades_when_markers_are_missing() {
        let start = re("CONSIDERANDO");
        let end = re("RESUELVE");
        assert_eq!(between("nada aqui RESUELVE x", &start, &end), "");
        assert_eq!(between("CONSIDERANDO hasta el final ", &start, &end), "hasta el final");
    }

    #[test]
    fn between_searches_end_only_after_start() {
        let text = "RESUELVE antes CONSIDERANDO medio RESUELVE fin";
        assert_eq!(between(text, &re("CONSIDERANDO"), &re("RESUELVE")), "medio");
    }

    #[test]
    fn single_sided_slices() {
        let marker = re("DISPOSICIONES FINALES");
        let text = " cuerpo DISPOSICIONES FINALES cola ";
        assert_eq!(before(text, &marker), "cuerpo");
        assert_eq!(after(text, &marker), "cola");
        assert_eq!(before(" sin marcador ", &marker), "sin marcador");
        assert_eq!(after(" sin marcador ", &marker), "");
    }

    #[test]
    fn item_spans_cover_text_from_each_head_to_the_next() {
        let text = "intro; Que, uno; Que, dos";
        let head = re(r"(?:^|[;])\s*(?P<head>Que,)");
        let spans = item_spans(text, &head);

        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].whole(text), "Que, uno;");
        assert_eq!(spans[0].body(text), " uno;");
        assert_eq!(spans[1].whole(text), "Que, dos");
        assert_eq!(spans[1].label, None);
    }

    #[test]
    fn item_spans_expose_labels() {
        let text = "PRIMERA. a. SEGUNDA. b";
        let head = re(r"(?:^|[.])\s*(?P<head>(?P<label>PRIMERA|SEGUNDA)\.\s*)");
        let labels: Vec<_> = item_spans(text, &head).iter().map(|s| s.label).collect();
        assert_eq!(labels, vec![Some("PRIMERA"), Some("SEGUNDA")]);
    }

    #[test]
    fn rejected_heads_stay_in_the_previous_body() {
        let text = "PRIMERA. a. SEGUNDA b. TERCERA. c";
        let head = re(r"(?:^|[.])\s*(?P<head>(?P<label>PRIMERA|SEGUNDA|TERCERA)\.?\s*)");
        let spans = item_spans_where(text, &head, |caps| caps["head"].contains('.'));

        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].body(text), "a. SEGUNDA b. ");
        assert_eq!(spans[1].label, Some("TERCERA"));
    }
}
