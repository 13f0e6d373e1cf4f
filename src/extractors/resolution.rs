// src/extractors/resolution.rs

// --- Imports ---
use super::boundary::locate;
use super::fields;
use super::markers::MarkerTable;
use super::record::Record;

// --- Main Extractor Structure ---
/// Record assembler: runs every field extractor over one normalized text and
/// returns the finished [`Record`].
///
/// Holds only a shared reference to a read-only marker table, so one extractor
/// can be used from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionExtractor<'m> {
    markers: &'m MarkerTable,
}

impl Default for ResolutionExtractor<'static> {
    fn default() -> Self {
        Self::new(MarkerTable::default_template())
    }
}

impl<'m> ResolutionExtractor<'m> {
    pub fn new(markers: &'m MarkerTable) -> Self {
        Self { markers }
    }

    /// Extracts the full record. Missing sections leave their fields empty;
    /// this never fails.
    pub fn extract(&self, text: &str) -> Record {
        self.log_boundaries(text);

        let (final_provisions, final_message) =
            fields::extract_final_provisions_and_message(self.markers, text);

        let record = Record {
            resolution_id: fields::extract_resolution_id(self.markers, text),
            title: fields::extract_title(self.markers, text),
            recitals: fields::extract_recitals(self.markers, text),
            resolutions: fields::extract_resolutions(self.markers, text),
            final_provisions,
            final_message,
            signatures: fields::extract_signatures(self.markers, text),
        };

        tracing::info!(
            "Extracted resolution '{}': {} recitals, {} articles, {} final provisions, closing message: {}, signatures: {}/2",
            record.resolution_id,
            record.recitals.len(),
            record.resolutions.len(),
            record.final_provisions.len(),
            !record.final_message.is_empty(),
            record.signatures.iter().filter(|s| !s.is_placeholder()).count()
        );

        record
    }

    fn log_boundaries(&self, text: &str) {
        for (name, marker) in self.markers.section_markers() {
            match locate(text, marker, 0) {
                Some(offset) => tracing::trace!("Marker '{}' at offset {}", name, offset),
                None => tracing::debug!("Marker '{}' not found", name),
            }
        }
    }
}

/// Extracts a record with the built-in template.
pub fn extract_record(text: &str) -> Record {
    ResolutionExtractor::default().extract(text)
}
