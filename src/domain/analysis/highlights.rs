//! Weak/strong point extraction over domain scores.
//!
//! Both extractions use the three-level [`Tier`] scale; domains with no
//! answers at all are skipped rather than classified.

use crate::domain::answers::AnswerSet;
use crate::domain::catalogue::DomainMap;
use crate::domain::foundation::{DiagnosticError, Tier};
use crate::domain::scoring::score_domain;

/// Domains that are not strong (to-improve or critical), weakest first.
pub fn extract_weak_points(
    domains: &DomainMap,
    all_answers: &AnswerSet,
) -> Result<Vec<(String, f64)>, DiagnosticError> {
    let mut scores = answered_domain_scores(domains, all_answers)?;
    scores.retain(|(_, s)| Tier::from_score(*s) != Tier::Strong);
    scores.sort_by(|a, b| a.1.total_cmp(&b.1));
    Ok(scores)
}

/// Strong domains, strongest first.
pub fn extract_strong_points(
    domains: &DomainMap,
    all_answers: &AnswerSet,
) -> Result<Vec<(String, f64)>, DiagnosticError> {
    let mut scores = answered_domain_scores(domains, all_answers)?;
    scores.retain(|(_, s)| Tier::from_score(*s) == Tier::Strong);
    scores.sort_by(|a, b| b.1.total_cmp(&a.1));
    Ok(scores)
}

/// Scores every domain that has at least one answer entry.
fn answered_domain_scores(
    domains: &DomainMap,
    all_answers: &AnswerSet,
) -> Result<Vec<(String, f64)>, DiagnosticError> {
    let mut scores = Vec::new();
    for (domain_id, domain) in domains {
        let Some(d_answers) = all_answers.get(domain_id) else {
            continue;
        };
        if d_answers.is_empty() {
            continue;
        }
        scores.push((domain_id.clone(), score_domain(domain, d_answers)?));
    }
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answers::{AnswerValue, DomainAnswers};
    use crate::domain::catalogue::{Domain, Question};
    use crate::domain::foundation::QuestionKind;
    use std::collections::BTreeMap;

    /// One stars question per domain, so the domain score is answer * 20.
    fn domains_of(ids: &[&str]) -> DomainMap {
        ids.iter()
            .map(|id| {
                let q = Question::new(format!("{}_1", id), QuestionKind::Stars, "...");
                ((*id).to_string(), Domain::new(*id, *id, "", vec![q]))
            })
            .collect()
    }

    fn answer(domain_id: &str, rating: i64) -> (String, DomainAnswers) {
        (
            domain_id.to_string(),
            BTreeMap::from([(format!("{}_1", domain_id), AnswerValue::Rating(rating))]),
        )
    }

    #[test]
    fn weak_points_exclude_strong_and_sort_ascending() {
        let domains = domains_of(&["commercial", "finance", "rh"]);
        // finance 20 (critical), rh 60 (to-improve), commercial 100 (strong)
        let answers = AnswerSet::from([
            answer("finance", 1),
            answer("rh", 3),
            answer("commercial", 5),
        ]);

        let weak = extract_weak_points(&domains, &answers).unwrap();
        assert_eq!(
            weak,
            vec![("finance".to_string(), 20.0), ("rh".to_string(), 60.0)]
        );
    }

    #[test]
    fn strong_points_keep_only_strong_and_sort_descending() {
        let domains = domains_of(&["commercial", "finance", "rh"]);
        let answers = AnswerSet::from([
            answer("finance", 4),
            answer("rh", 5),
            answer("commercial", 2),
        ]);

        let strong = extract_strong_points(&domains, &answers).unwrap();
        assert_eq!(
            strong,
            vec![("rh".to_string(), 100.0), ("finance".to_string(), 80.0)]
        );
    }

    #[test]
    fn boundary_score_of_75_is_strong() {
        let domains = DomainMap::from([(
            "finance".to_string(),
            Domain::new(
                "finance",
                "Finance",
                "",
                vec![
                    Question::new("f1", QuestionKind::Stars, "..."),
                    Question::new("f2", QuestionKind::Boolean, "...").with_weight(3.0),
                ],
            ),
        )]);
        // (0*1 + 100*3) / 4 = 75 exactly.
        let answers = AnswerSet::from([(
            "finance".to_string(),
            BTreeMap::from([
                ("f1".to_string(), AnswerValue::Rating(0)),
                ("f2".to_string(), AnswerValue::Flag(true)),
            ]),
        )]);

        assert!(extract_weak_points(&domains, &answers).unwrap().is_empty());
        let strong = extract_strong_points(&domains, &answers).unwrap();
        assert_eq!(strong, vec![("finance".to_string(), 75.0)]);
    }

    #[test]
    fn unanswered_domains_appear_in_neither_list() {
        let domains = domains_of(&["finance", "rh", "si"]);
        let mut answers = AnswerSet::from([answer("finance", 1)]);
        answers.insert("rh".to_string(), BTreeMap::new()); // empty sub-map
                                                           // "si" entirely absent

        let weak = extract_weak_points(&domains, &answers).unwrap();
        let strong = extract_strong_points(&domains, &answers).unwrap();
        assert_eq!(weak, vec![("finance".to_string(), 20.0)]);
        assert!(strong.is_empty());
    }
}
