// src/source/mod.rs
//! Where document text comes from. OCR happens elsewhere; a source only hands
//! over the already transcribed text, normalized for marker matching.

use crate::utils::error::SourceError;
use std::io::Read;
use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Yields the full normalized text of one document.
pub trait TextSource {
    fn document_text(&self) -> Result<String, SourceError>;

    /// Human-readable origin, used in logs and error messages.
    fn describe(&self) -> String;
}

/// Plain-text transcription stored on disk.
#[derive(Debug, Clone)]
pub struct FileTextSource {
    path: PathBuf,
}

impl FileTextSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl TextSource for FileTextSource {
    fn document_text(&self) -> Result<String, SourceError> {
        let bytes = std::fs::read(&self.path)?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), self.path.display());
        decode(bytes, &self.describe())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Transcription piped through standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinTextSource;

impl TextSource for StdinTextSource {
    fn document_text(&self) -> Result<String, SourceError> {
        let mut bytes = Vec::new();
        std::io::stdin().lock().read_to_end(&mut bytes)?;
        decode(bytes, &self.describe())
    }

    fn describe(&self) -> String {
        "<stdin>".to_string()
    }
}

fn decode(bytes: Vec<u8>, origin: &str) -> Result<String, SourceError> {
    let raw = String::from_utf8(bytes).map_err(|_| SourceError::InvalidUtf8(origin.to_string()))?;
    Ok(normalize_text(&raw))
}

/// Line endings to `\n`, control characters other than `\n`/`\t` dropped,
/// Unicode composed to NFC so accents written as combining marks still match.
pub fn normalize_text(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t'))
        .nfc()
        .collect()
}
