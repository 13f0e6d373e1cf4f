// src/storage/mod.rs
use crate::extractors::record::Record;
use crate::utils::error::StorageError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Saves the record as `<name>.json`
    pub fn save_record(&self, record: &Record, name: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}.json", name));

        let json = record
            .to_json_pretty()
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        let mut file = fs::File::create(&file_path).map_err(StorageError::IoError)?;
        file.write_all(json.as_bytes()).map_err(StorageError::IoError)?;

        tracing::info!("Saved record to {}", file_path.display());

        Ok(file_path)
    }

    /// Saves a summary of the record as `<name>_meta.json`
    pub fn save_record_metadata(&self, record: &Record, name: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_meta.json", name));

        let metadata = serde_json::json!({
            "name": name,
            "n_resolution": record.resolution_id,
            "recitals_count": record.recitals.len(),
            "resolutions_count": record.resolutions.len(),
            "final_provisions_count": record.final_provisions.len(),
            "has_final_message": !record.final_message.is_empty(),
            "rector_signed": !record.rector().is_placeholder(),
            "secretary_signed": !record.secretary().is_placeholder(),
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());

        Ok(file_path)
    }

    /// Directory for debug artifacts, created on demand
    pub fn debug_dir(&self) -> Result<PathBuf, StorageError> {
        let dir = self.base_dir.join("debug");
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(StorageError::IoError)?;
        }
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::record::Signature;
    use tempfile::TempDir;

    fn sample_record() -> Record {
        Record {
            resolution_id: "R-OCS-SE-009 Nro.074-2025".into(),
            title: "Calendario académico".into(),
            recitals: vec!["Que, uno.".into()],
            resolutions: vec!["Aprobar.".into()],
            final_provisions: vec![],
            final_message: "Dado en Quito.".into(),
            signatures: [
                Signature {
                    author: "Mgtr. Juan Pérez".into(),
                    role: "RECTOR".into(),
                    message: String::new(),
                },
                Signature::placeholder(),
            ],
        }
    }

    #[test]
    fn creates_missing_base_dir() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("nested").join("out");
        assert!(!base.exists());

        let storage = StorageManager::new(&base).unwrap();
        assert!(storage.base_dir().is_dir());
    }

    #[test]
    fn saved_record_is_unescaped_two_space_json() {
        let tmp = TempDir::new().unwrap();
        let storage = StorageManager::new(tmp.path()).unwrap();
        let record = sample_record();

        let path = storage.save_record(&record, "R-074").unwrap();
        assert_eq!(path, tmp.path().join("R-074.json"));

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, record.to_json_pretty().unwrap());
        assert!(written.contains("\"title\": \"Calendario académico\""));
        assert!(written.starts_with("{\n  \"n_resolution\""));

        let parsed: Record = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn metadata_summarizes_record() {
        let tmp = TempDir::new().unwrap();
        let storage = StorageManager::new(tmp.path()).unwrap();

        let path = storage.save_record_metadata(&sample_record(), "R-074").unwrap();
        let meta: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

        assert_eq!(meta["recitals_count"], 1);
        assert_eq!(meta["final_provisions_count"], 0);
        assert_eq!(meta["has_final_message"], true);
        assert_eq!(meta["rector_signed"], true);
        assert_eq!(meta["secretary_signed"], false);
        assert!(meta["extraction_timestamp"].is_string());
    }
}
