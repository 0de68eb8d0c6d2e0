//! Scoring - pure functions from answers to 0-100 scores.
//!
//! Three levels: one question, one domain (weighted mean), and the global
//! aggregate across domains. All functions are deterministic and leave
//! their inputs untouched.

use std::collections::BTreeMap;

use crate::domain::answers::{AnswerSet, AnswerValue, DomainAnswers};
use crate::domain::catalogue::{Domain, DomainMap, Question};
use crate::domain::foundation::{DiagnosticError, QuestionKind};

/// Reserved key for the global aggregate in a score map.
pub const GLOBAL_KEY: &str = "__global__";

/// Per-domain scores plus the [`GLOBAL_KEY`] aggregate.
pub type ScoreMap = BTreeMap<String, f64>;

/// Scores a single answer on a 0-100 scale.
///
/// - Rating questions: an unanswered or unparseable value scores 0; any
///   integer-like value is clamped to [0, 5] and mapped linearly (×20).
/// - Yes/no questions: truthy scores 100, falsy 0 (see
///   [`AnswerValue::as_truthy`] for the affirmative token set).
/// - A question of unknown kind fails with
///   [`DiagnosticError::UnknownQuestionType`].
pub fn score_question(question: &Question, answer: &AnswerValue) -> Result<f64, DiagnosticError> {
    match &question.kind {
        QuestionKind::Stars => {
            let Some(v) = answer.as_rating() else {
                return Ok(0.0);
            };
            let v = v.clamp(0, 5);
            Ok(v as f64 / 5.0 * 100.0)
        }
        QuestionKind::Boolean => Ok(if answer.as_truthy() { 100.0 } else { 0.0 }),
        QuestionKind::Other(tag) => Err(DiagnosticError::unknown_question_type(&question.id, tag)),
    }
}

/// Scores a domain as the weighted mean of its question scores.
///
/// Missing answers score 0 but still contribute their weight to the
/// denominator. A domain with zero total weight scores 0.
pub fn score_domain(domain: &Domain, answers: &DomainAnswers) -> Result<f64, DiagnosticError> {
    let mut total_weight = 0.0;
    let mut total_score = 0.0;

    for q in &domain.questions {
        let answer = answers.get(&q.id).unwrap_or(&AnswerValue::Unanswered);
        let qs = score_question(q, answer)?;
        total_score += qs * q.weight;
        total_weight += q.weight;
    }

    if total_weight == 0.0 {
        return Ok(0.0);
    }
    Ok(total_score / total_weight)
}

/// Scores every domain and the global aggregate.
///
/// Every domain appears in the returned map. Only domains with a non-empty
/// answer sub-map count toward the global mean: a domain whose answers are
/// all explicitly negative still counts (it scored 0 on merit), while a
/// domain with no answer entries at all is excluded rather than penalized.
/// The aggregate is the unweighted mean of the included domain scores, or
/// 0 when no domain had any answers, stored under [`GLOBAL_KEY`].
pub fn score_global(domains: &DomainMap, all_answers: &AnswerSet) -> Result<ScoreMap, DiagnosticError> {
    let no_answers = DomainAnswers::new();
    let mut domain_scores = ScoreMap::new();
    let mut sum_scores = 0.0;
    let mut count = 0u32;

    for (domain_id, domain) in domains {
        let d_answers = all_answers.get(domain_id).unwrap_or(&no_answers);
        let s = score_domain(domain, d_answers)?;
        domain_scores.insert(domain_id.clone(), s);
        if !d_answers.is_empty() {
            sum_scores += s;
            count += 1;
        }
    }

    let global = if count > 0 {
        sum_scores / f64::from(count)
    } else {
        0.0
    };
    domain_scores.insert(GLOBAL_KEY.to_string(), global);
    Ok(domain_scores)
}
