//! Port for answer-set file I/O.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::answers::AnswerSet;

/// Errors raised by answer-set loading and saving.
#[derive(Debug, Error)]
pub enum AnswerStoreError {
    #[error("Answer file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Malformed answer file {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("I/O error on answer file: {0}")]
    Io(String),
}

impl AnswerStoreError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        AnswerStoreError::NotFound { path: path.into() }
    }

    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        AnswerStoreError::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn io(reason: impl Into<String>) -> Self {
        AnswerStoreError::Io(reason.into())
    }
}

/// Storage for answer-set documents.
pub trait AnswerStore {
    /// Loads an answer set from a file.
    ///
    /// Fails with [`AnswerStoreError::NotFound`] when the path does not
    /// resolve to an existing file, and [`AnswerStoreError::Malformed`]
    /// when the content does not match the answer-set shape.
    fn load(&self, path: &Path) -> Result<AnswerSet, AnswerStoreError>;

    /// Saves an answer set (template or sample) to a file.
    fn save(&self, path: &Path, answers: &AnswerSet) -> Result<(), AnswerStoreError>;

    /// Lists available answer files in a directory, sorted by name.
    /// A missing directory yields an empty list.
    fn list(&self, dir: &Path) -> Result<Vec<PathBuf>, AnswerStoreError>;
}
