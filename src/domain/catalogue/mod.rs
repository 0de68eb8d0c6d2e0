//! Catalogue module - Question catalogue entities and questionnaire assembly.
//!
//! The catalogue is loaded once at startup and treated as a read-only
//! template afterwards; every questionnaire build works on clones so
//! repeated builds never mutate the shared templates.

mod catalogue;
mod domain;
mod question;
mod sector;

pub use catalogue::{Catalogue, DomainMap};
pub use domain::Domain;
pub use question::Question;
pub use sector::SectorProfile;
