// src/extractors/fields.rs
//! Field extractors. Each one takes the marker table and the full normalized
//! text, slices out its own section and captures items only inside that slice.

use super::boundary::{after, between, item_spans, item_spans_where, locate, locate_span};
use super::markers::MarkerTable;
use super::record::Signature;
use crate::utils::text::{cleanup_line, strip_leading_dash};
use regex::Captures;
use std::ops::Range;

/// Value of the `RESOLUCIÓN: <value>` line, with OCR gaps inside acronyms closed
/// (`R- OCS` becomes `R-OCS`).
pub fn extract_resolution_id(markers: &MarkerTable, text: &str) -> String {
    let Some(caps) = markers.resolution_line.captures(text) else {
        tracing::debug!("No resolution line found; n_resolution left empty");
        return String::new();
    };
    let value = caps.name("value").map_or("", |m| m.as_str()).trim();
    let value = markers.ocr_acronym_gap.replace_all(value, "${1}-${2}");
    cleanup_line(&value)
}

/// Text between the resolution line and CONSIDERANDO, on a single line.
pub fn extract_title(markers: &MarkerTable, text: &str) -> String {
    let Some(line) = locate_span(text, &markers.resolution_line, 0) else {
        return String::new();
    };
    let Some(end) = locate(text, &markers.recitals, line.end) else {
        tracing::debug!("No CONSIDERANDO marker after the resolution line; title left empty");
        return String::new();
    };
    cleanup_line(&text[line.end..end])
}

/// Every `Que, ...` clause between CONSIDERANDO and RESUELVE, in order.
pub fn extract_recitals(markers: &MarkerTable, text: &str) -> Vec<String> {
    let block = between(text, &markers.recitals, &markers.operative);
    if block.is_empty() {
        tracing::debug!("Recitals section missing or empty");
        return Vec::new();
    }

    item_spans(block, &markers.recital_head)
        .iter()
        .map(|span| cleanup_line(span.whole(block)))
        .collect()
}

/// Article bodies between RESUELVE and DISPOSICIONES FINALES, headers and
/// leading dashes removed.
pub fn extract_resolutions(markers: &MarkerTable, text: &str) -> Vec<String> {
    let block = between(text, &markers.operative, &markers.final_provisions);
    if block.is_empty() {
        tracing::debug!("Operative section missing or empty");
        return Vec::new();
    }

    item_spans(block, &markers.article_head)
        .iter()
        .map(|span| {
            tracing::trace!("Article {:?} at {}..{}", span.label, span.start, span.end);
            cleanup_line(strip_leading_dash(span.body(block)))
        })
        .collect()
}

/// Splits the block after DISPOSICIONES FINALES into the numbered provisions
/// and the closing `Dado en ...` message.
///
/// The closing message runs from `Dado en` to the first signature cue. Nothing
/// from its start onward is considered for provisions.
pub fn extract_final_provisions_and_message(
    markers: &MarkerTable,
    text: &str,
) -> (Vec<String>, String) {
    let block = after(text, &markers.final_provisions);
    if block.is_empty() {
        tracing::debug!("No DISPOSICIONES FINALES block; provisions and closing message left empty");
        return (Vec::new(), String::new());
    }

    let (remainder, final_message) = match closing_span(markers, block) {
        Some(span) => (&block[..span.start], cleanup_line(&block[span])),
        None => (block, String::new()),
    };

    let mut provisions: Vec<String> =
        item_spans_where(remainder, &markers.provision_head, |caps| {
            opens_provision(remainder, caps)
        })
        .iter()
        .map(|span| {
            let label = span.label.unwrap_or_default().to_uppercase();
            cleanup_line(&format!("{}. {}", label, span.body(remainder).trim()))
        })
        .collect();

    if provisions.is_empty() {
        provisions = split_at_ordinals(markers, remainder);
        if !provisions.is_empty() {
            tracing::debug!("Recovered {} provisions with the loose ordinal split", provisions.len());
        }
    }

    (provisions, final_message)
}

/// An ordinal followed by separator punctuation opens a provision anywhere a
/// head may start. A bare ordinal only does so at the start of a line.
fn opens_provision(remainder: &str, caps: &Captures) -> bool {
    if caps.name("sep").is_some() {
        return true;
    }
    let (Some(whole), Some(head)) = (caps.get(0), caps.name("head")) else {
        return false;
    };
    let lead = &remainder[whole.start()..head.start()];
    lead.contains('\n') || lead.trim().is_empty()
}

fn closing_span(markers: &MarkerTable, block: &str) -> Option<Range<usize>> {
    let opener = locate_span(block, &markers.closing_start, 0)?;
    let end = locate(block, &markers.signature_cues, opener.end).unwrap_or(block.len());
    Some(opener.start..end)
}

/// Loose recovery: cut at every ordinal word and keep the pieces that start
/// with one. Duplicates and odd fragments are kept as found.
fn split_at_ordinals(markers: &MarkerTable, remainder: &str) -> Vec<String> {
    let cuts: Vec<usize> = markers
        .provision_ordinal
        .find_iter(remainder)
        .map(|m| m.start())
        .collect();

    cuts.iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = cuts.get(i + 1).copied().unwrap_or(remainder.len());
            cleanup_line(&remainder[start..end])
        })
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// RECTOR and SECRETARIA signature slots, always in that order.
///
/// Searches the block after DISPOSICIONES FINALES, or the whole text when that
/// marker is missing.
pub fn extract_signatures(markers: &MarkerTable, text: &str) -> [Signature; 2] {
    let tail = match after(text, &markers.final_provisions) {
        "" => text,
        tail => tail,
    };

    let rector = markers.rector.captures(tail).map(|caps| {
        let prefix = caps.name("prefix").map_or("", |m| m.as_str());
        let name = caps.name("name").map_or("", |m| m.as_str());
        author(prefix, name)
    });

    let secretary = markers.secretary.captures(tail).map(|caps| {
        let prefix = caps.name("prefix").map_or("", |m| m.as_str());
        let name = caps.name("name").map_or("", |m| m.as_str());
        author(prefix, name)
    });

    let certification = markers
        .certification
        .captures(tail)
        .and_then(|caps| caps.name("message"))
        .map(|m| cleanup_line(m.as_str()))
        .unwrap_or_default();

    let rector_slot = match rector {
        Some(author) => Signature {
            author,
            role: markers.rector_role.clone(),
            message: String::new(),
        },
        None => {
            tracing::debug!("No {} signature found", markers.rector_role);
            Signature::placeholder()
        }
    };

    let secretary_slot = if secretary.is_some() || !certification.is_empty() {
        Signature {
            author: secretary.unwrap_or_default(),
            role: markers.secretary_role.clone(),
            message: certification,
        }
    } else {
        tracing::debug!("No {} signature found", markers.secretary_role);
        Signature::placeholder()
    };

    [rector_slot, secretary_slot]
}

fn author(prefix: &str, name: &str) -> String {
    format!("{} {}", prefix.trim(), cleanup_line(name))
        .trim()
        .to_string()
}
