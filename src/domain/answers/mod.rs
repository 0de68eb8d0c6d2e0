//! Answer model and answer-set generation.

mod template;
mod value;

pub use template::{generate_empty_answers, generate_sample_answers, generate_sample_answers_with};
pub use value::AnswerValue;

use std::collections::BTreeMap;

/// Answers for one domain, keyed by question id.
pub type DomainAnswers = BTreeMap<String, AnswerValue>;

/// A full answer set, keyed by domain id.
pub type AnswerSet = BTreeMap<String, DomainAnswers>;
