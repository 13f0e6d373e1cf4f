// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Could not read document text: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Document text from {0} is not valid UTF-8")]
    InvalidUtf8(String),
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Regular expression error: {0}")]
    RegexError(String),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Reading document failed: {0}")]
    Source(#[from] SourceError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_failures_surface_as_storage_errors() {
        let err: AppError = StorageError::SerializationError("bad float".into()).into();
        assert!(matches!(err, AppError::Storage(StorageError::SerializationError(_))));
        assert_eq!(err.to_string(), "Storage error: Serialization error: bad float");
    }
}
