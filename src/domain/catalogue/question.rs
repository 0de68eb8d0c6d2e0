//! Question entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::QuestionKind;

fn default_weight() -> f64 {
    1.0
}

/// A single diagnostic question.
///
/// Field names follow the catalogue wire format: the kind is serialized
/// under the `type` key and the weight defaults to 1.0 when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique within the owning domain (e.g. "finance_1").
    pub id: String,
    /// Answer kind ("stars" or "boolean").
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    /// Question text shown to the respondent.
    pub text: String,
    /// Relative contribution to the domain score.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl Question {
    /// Creates a question with the default weight of 1.0.
    pub fn new(id: impl Into<String>, kind: QuestionKind, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            text: text.into(),
            weight: 1.0,
        }
    }

    /// Sets an explicit weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}
