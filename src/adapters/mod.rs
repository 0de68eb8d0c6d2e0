//! Adapters - JSON file implementations of the ports.

pub mod answers;
pub mod catalogue;

pub use answers::JsonAnswerStore;
pub use catalogue::JsonCatalogueSource;
