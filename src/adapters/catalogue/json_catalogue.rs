//! JSON Catalogue Source - loads `questions_<locale>.json` documents.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::catalogue::{Catalogue, Domain, SectorProfile};
use crate::ports::{CatalogueSource, CatalogueSourceError};

/// Wire format of a catalogue document: top-level `domains` and `sectors`
/// arrays. Round-trips losslessly through the entity model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogueDoc {
    pub domains: Vec<Domain>,
    #[serde(default)]
    pub sectors: Vec<SectorProfile>,
}

impl From<CatalogueDoc> for Catalogue {
    fn from(doc: CatalogueDoc) -> Self {
        Catalogue::new(doc.domains, doc.sectors)
    }
}

/// Loads catalogues from `{config_dir}/questions_{locale}.json`.
///
/// The catalogue for the configured locale is read and parsed once per
/// process; [`JsonCatalogueSource::catalogue`] caches the result and hands
/// out shared references afterwards (the catalogue is read-only for the
/// program lifetime).
#[derive(Debug)]
pub struct JsonCatalogueSource {
    config_dir: PathBuf,
    locale: String,
    cache: OnceCell<Catalogue>,
}

impl JsonCatalogueSource {
    pub fn new(config_dir: impl Into<PathBuf>, locale: impl Into<String>) -> Self {
        Self {
            config_dir: config_dir.into(),
            locale: locale.into(),
            cache: OnceCell::new(),
        }
    }

    /// Path of the document backing a locale.
    fn document_path(&self, locale: &str) -> PathBuf {
        self.config_dir.join(format!("questions_{}.json", locale))
    }

    /// The process-wide catalogue for the configured locale, loaded on
    /// first access.
    pub fn catalogue(&self) -> Result<&Catalogue, CatalogueSourceError> {
        self.cache.get_or_try_init(|| {
            let catalogue = self.load(&self.locale)?;
            info!(locale = %self.locale, domains = catalogue.domains().len(), "catalogue loaded");
            Ok(catalogue)
        })
    }

    fn read_document(&self, path: &Path) -> Result<CatalogueDoc, CatalogueSourceError> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CatalogueSourceError::not_found(path),
            _ => CatalogueSourceError::io(format!("Failed to read {}: {}", path.display(), e)),
        })?;

        serde_json::from_str(&content)
            .map_err(|e| CatalogueSourceError::malformed(path, e.to_string()))
    }
}

impl CatalogueSource for JsonCatalogueSource {
    fn load(&self, locale: &str) -> Result<Catalogue, CatalogueSourceError> {
        let path = self.document_path(locale);
        debug!(path = %path.display(), "loading catalogue document");
        let doc = self.read_document(&path)?;
        Ok(doc.into())
    }
}
