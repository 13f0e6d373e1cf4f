// src/utils/html_debug.rs
use crate::extractors::markers::MarkerTable;
use crate::utils::error::AppError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Renders plain text as an HTML page with the given spans highlighted.
/// Overlapping spans after the first are skipped.
pub fn render_debug_html(text: &str, highlights: &[(usize, usize, &str)]) -> String {
    let mut debug_html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n");

    // CSS for highlight colors
    debug_html.push_str("body { white-space: pre-wrap; font-family: monospace; }\n");
    debug_html.push_str(".highlight-resolution { background-color: #FFFF00; }\n");
    debug_html.push_str(".highlight-recitals { background-color: #90EE90; }\n");
    debug_html.push_str(".highlight-operative { background-color: #ADD8E6; }\n");
    debug_html.push_str(".highlight-final_provisions { background-color: #FFA500; }\n");
    debug_html.push_str(".highlight-closing { background-color: #DDA0DD; }\n");
    debug_html.push_str(".highlight-signature { background-color: #F08080; }\n");
    debug_html.push_str(".highlight-custom { background-color: #FFC0CB; }\n");
    debug_html.push_str("</style>\n</head>\n<body>\n");

    let mut last_pos = 0;
    let mut sorted_highlights = highlights.to_vec();
    sorted_highlights.sort_by_key(|h| h.0); // Sort by position

    for (start, end, highlight_type) in sorted_highlights {
        if start < last_pos || end > text.len() {
            continue;
        }

        // Add content before the highlight
        debug_html.push_str(&escape_html(&text[last_pos..start]));

        let css_class = match highlight_type {
            "resolution" | "recitals" | "operative" | "final_provisions" | "closing"
            | "signature" => {
                format!("highlight-{}", highlight_type)
            }
            _ => "highlight-custom".to_string(),
        };

        debug_html.push_str(&format!(
            "<span class=\"{}\" title=\"Position: {}-{}, Type: {}\">",
            css_class, start, end, highlight_type
        ));
        debug_html.push_str(&escape_html(&text[start..end]));
        debug_html.push_str("</span>");

        last_pos = end;
    }

    // Add any remaining content
    debug_html.push_str(&escape_html(&text[last_pos..]));
    debug_html.push_str("\n</body>\n</html>");

    debug_html
}

/// Writes a copy of the document with every located section marker highlighted
pub fn create_debug_html(text: &str, path: &Path, markers: &MarkerTable) -> Result<(), AppError> {
    let mut highlights = Vec::new();

    for (name, marker) in markers.section_markers() {
        for mat in marker.find_iter(text) {
            highlights.push((mat.start(), mat.end(), name));
        }
    }

    let mut file = File::create(path)?;
    file.write_all(render_debug_html(text, &highlights).as_bytes())?;

    tracing::info!("Saved debug HTML to {}", path.display());
    Ok(())
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_are_wrapped_and_text_escaped() {
        let html = render_debug_html("a <b> RESUELVE: c", &[(6, 15, "operative")]);
        assert!(html.contains("a &lt;b&gt; <span class=\"highlight-operative\" title=\"Position: 6-15, Type: operative\">RESUELVE:</span> c"));
    }

    #[test]
    fn overlapping_highlights_are_skipped() {
        let html = render_debug_html("RECTOR y mas", &[(0, 6, "signature"), (2, 8, "note")]);
        assert_eq!(html.matches("<span").count(), 1);
        assert!(html.contains("<span class=\"highlight-signature\""));
        assert!(!html.contains("Type: note"));
    }

    #[test]
    fn writes_marker_dump_to_disk() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("markers.html");
        let text = "CONSIDERANDO:\nQue, x.\nRESUELVE:\nArtículo 1.- y";

        create_debug_html(text, &path, MarkerTable::default_template()).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("<span class=\"highlight-recitals\""));
        assert!(html.contains("<span class=\"highlight-operative\""));
    }
}
