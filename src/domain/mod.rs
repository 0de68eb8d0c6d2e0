//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (enums, tier scales, errors)
//! - `catalogue` - Question catalogue entities and questionnaire assembly
//! - `scoring` - Pure scoring functions (question, domain, global)
//! - `analysis` - Weak/strong point extraction over domain scores
//! - `answers` - Answer value model and template/sample generation

pub mod analysis;
pub mod answers;
pub mod catalogue;
pub mod foundation;
pub mod scoring;
