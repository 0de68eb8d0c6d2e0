//! Foundation module - Shared domain primitives.
//!
//! Contains the question kind enum, the two tier scales, and the error
//! types that form the vocabulary of the diagnostic domain.

mod errors;
mod question_kind;
mod tier;

pub use errors::DiagnosticError;
pub use question_kind::QuestionKind;
pub use tier::{Badge, Tier, IMPROVE_THRESHOLD, STRONG_THRESHOLD};
