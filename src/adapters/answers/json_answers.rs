//! JSON Answer Store - answer-set files on the local filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::answers::AnswerSet;
use crate::ports::{AnswerStore, AnswerStoreError};

/// Reads and writes answer sets as pretty-printed JSON files.
#[derive(Debug, Clone, Default)]
pub struct JsonAnswerStore;

impl JsonAnswerStore {
    pub fn new() -> Self {
        Self
    }
}

impl AnswerStore for JsonAnswerStore {
    fn load(&self, path: &Path) -> Result<AnswerSet, AnswerStoreError> {
        debug!(path = %path.display(), "loading answer file");
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => AnswerStoreError::not_found(path),
            _ => AnswerStoreError::io(format!("Failed to read {}: {}", path.display(), e)),
        })?;

        serde_json::from_str(&content)
            .map_err(|e| AnswerStoreError::malformed(path, e.to_string()))
    }

    fn save(&self, path: &Path, answers: &AnswerSet) -> Result<(), AnswerStoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AnswerStoreError::io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(answers)
            .map_err(|e| AnswerStoreError::io(e.to_string()))?;
        fs::write(path, json)
            .map_err(|e| AnswerStoreError::io(format!("Failed to write {}: {}", path.display(), e)))
    }

    fn list(&self, dir: &Path) -> Result<Vec<PathBuf>, AnswerStoreError> {
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(dir).map_err(|e| {
            AnswerStoreError::io(format!("Failed to read directory {}: {}", dir.display(), e))
        })?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answers::AnswerValue;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn sample_answers() -> AnswerSet {
        AnswerSet::from([(
            "finance".to_string(),
            BTreeMap::from([
                ("finance_1".to_string(), AnswerValue::Rating(4)),
                ("finance_2".to_string(), AnswerValue::Flag(true)),
                ("finance_3".to_string(), AnswerValue::Unanswered),
            ]),
        )])
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reponses.json");
        let store = JsonAnswerStore::new();

        store.save(&path, &sample_answers()).unwrap();
        let loaded = store.load(&path).unwrap();
        assert_eq!(loaded, sample_answers());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("reponses.json");
        let store = JsonAnswerStore::new();

        store.save(&path, &sample_answers()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn load_missing_file_fails_with_not_found() {
        let dir = TempDir::new().unwrap();
        let store = JsonAnswerStore::new();

        let err = store.load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, AnswerStoreError::NotFound { .. }));
    }

    #[test]
    fn load_malformed_file_fails_with_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        let store = JsonAnswerStore::new();

        let err = store.load(&path).unwrap_err();
        assert!(matches!(err, AnswerStoreError::Malformed { .. }));
    }

    #[test]
    fn list_returns_sorted_json_files_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        let store = JsonAnswerStore::new();

        let files = store.list(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.json", "b.json"]);
    }

    #[test]
    fn list_of_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonAnswerStore::new();

        let files = store.list(&dir.path().join("nope")).unwrap();
        assert!(files.is_empty());
    }
}
