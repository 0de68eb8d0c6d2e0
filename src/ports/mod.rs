//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CatalogueSource` - loads the question catalogue for a locale
//! - `AnswerStore` - loads, saves and lists answer-set files

mod answer_store;
mod catalogue_source;

pub use answer_store::{AnswerStore, AnswerStoreError};
pub use catalogue_source::{CatalogueSource, CatalogueSourceError};
