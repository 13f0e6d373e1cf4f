// src/lib.rs
//! Segmentation and field extraction for OCR-transcribed resolution documents
//! (CONSIDERANDO / RESUELVE / DISPOSICIONES FINALES template).

pub mod extractors;
pub mod source;
pub mod storage;
pub mod utils;

pub use extractors::{
    extract_record, MarkerTable, Record, ResolutionExtractor, Signature, TemplateConfig,
};
