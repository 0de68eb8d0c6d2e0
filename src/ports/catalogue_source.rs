//! Port for loading the question catalogue.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::catalogue::Catalogue;

/// Errors raised while loading a catalogue document.
#[derive(Debug, Error)]
pub enum CatalogueSourceError {
    #[error("Catalogue document not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Malformed catalogue document {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("I/O error reading catalogue: {0}")]
    Io(String),
}

impl CatalogueSourceError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        CatalogueSourceError::NotFound { path: path.into() }
    }

    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        CatalogueSourceError::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn io(reason: impl Into<String>) -> Self {
        CatalogueSourceError::Io(reason.into())
    }
}

/// Source of question catalogues, one document per locale.
pub trait CatalogueSource {
    /// Loads the catalogue for a locale (e.g. "fr").
    ///
    /// Fails with [`CatalogueSourceError::NotFound`] when no document
    /// exists for the locale, and [`CatalogueSourceError::Malformed`] when
    /// the document does not parse.
    fn load(&self, locale: &str) -> Result<Catalogue, CatalogueSourceError>;
}
