// src/extractors/mod.rs
pub mod boundary;
pub mod fields;
pub mod markers;
pub mod record;
pub mod resolution;

// Re-export key extraction types for convenience
pub use markers::{MarkerTable, TemplateConfig};
pub use record::{Record, Signature};
pub use resolution::{extract_record, ResolutionExtractor};
