mod json_catalogue;

pub use json_catalogue::{CatalogueDoc, JsonCatalogueSource};
