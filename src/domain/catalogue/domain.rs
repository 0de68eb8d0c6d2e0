//! Domain entity - a scored category of business health.

use serde::{Deserialize, Serialize};

use super::Question;

/// A scored category of business health (finance, HR, commercial, ...).
///
/// The question list is only extended during questionnaire assembly
/// (sector extras append to a cloned copy); once assembled it is treated
/// as immutable for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    /// Unique identifier (e.g. "finance").
    pub id: String,
    /// Display label (e.g. "Finance").
    pub label: String,
    /// Short description of what the domain covers.
    #[serde(default)]
    pub description: String,
    /// Ordered question list.
    pub questions: Vec<Question>,
}

impl Domain {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
            questions,
        }
    }

    /// Total weight of all questions in this domain.
    pub fn total_weight(&self) -> f64 {
        self.questions.iter().map(|q| q.weight).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::QuestionKind;

    #[test]
    fn domain_deserializes_with_missing_description() {
        let d: Domain = serde_json::from_str(
            r#"{"id": "rh", "label": "Ressources Humaines", "questions": []}"#,
        )
        .unwrap();
        assert_eq!(d.description, "");
    }

    #[test]
    fn domain_total_weight_sums_question_weights() {
        let d = Domain::new(
            "finance",
            "Finance",
            "",
            vec![
                Question::new("finance_1", QuestionKind::Stars, "..."),
                Question::new("finance_2", QuestionKind::Boolean, "...").with_weight(2.0),
            ],
        );
        assert_eq!(d.total_weight(), 3.0);
    }

    #[test]
    fn domain_total_weight_of_empty_list_is_zero() {
        let d = Domain::new("vide", "Vide", "", vec![]);
        assert_eq!(d.total_weight(), 0.0);
    }
}
