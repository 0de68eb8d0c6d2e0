//! Empty and sample answer-set generation.

use rand::Rng;

use crate::domain::catalogue::DomainMap;
use crate::domain::foundation::QuestionKind;

use super::{AnswerSet, AnswerValue, DomainAnswers};

/// Builds an answer template with every question explicitly unanswered.
pub fn generate_empty_answers(domains: &DomainMap) -> AnswerSet {
    domains
        .iter()
        .map(|(domain_id, domain)| {
            let answers: DomainAnswers = domain
                .questions
                .iter()
                .map(|q| (q.id.clone(), AnswerValue::Unanswered))
                .collect();
            (domain_id.clone(), answers)
        })
        .collect()
}

/// Builds a plausible random answer set for demos and tests: ratings get a
/// uniform 1-5, yes/no questions a uniform boolean. Questions of unknown
/// kind stay unanswered.
pub fn generate_sample_answers(domains: &DomainMap) -> AnswerSet {
    generate_sample_answers_with(domains, &mut rand::rng())
}

/// Same as [`generate_sample_answers`] but with a caller-supplied generator,
/// for deterministic seeding.
pub fn generate_sample_answers_with<R: Rng>(domains: &DomainMap, rng: &mut R) -> AnswerSet {
    domains
        .iter()
        .map(|(domain_id, domain)| {
            let answers: DomainAnswers = domain
                .questions
                .iter()
                .map(|q| {
                    let value = match &q.kind {
                        QuestionKind::Stars => AnswerValue::Rating(rng.random_range(1..=5)),
                        QuestionKind::Boolean => AnswerValue::Flag(rng.random_bool(0.5)),
                        QuestionKind::Other(_) => AnswerValue::Unanswered,
                    };
                    (q.id.clone(), value)
                })
                .collect();
            (domain_id.clone(), answers)
        })
        .collect()
}
