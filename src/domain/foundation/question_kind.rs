//! Question kind: 1-5 rating ("stars") or yes/no ("boolean").

use serde::{Deserialize, Serialize};
use std::fmt;

/// The answer kind expected by a question.
///
/// Catalogue documents use the tags `"stars"` and `"boolean"`. Any other tag
/// is preserved as [`QuestionKind::Other`] at load time and only rejected
/// when the question is scored, so a single malformed question does not
/// block loading the rest of the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionKind {
    /// 1-5 rating question.
    Stars,
    /// Yes/no question.
    Boolean,
    /// Unrecognized tag, kept verbatim.
    Other(String),
}

impl QuestionKind {
    /// Returns the wire-format tag for this kind.
    pub fn tag(&self) -> &str {
        match self {
            QuestionKind::Stars => "stars",
            QuestionKind::Boolean => "boolean",
            QuestionKind::Other(tag) => tag,
        }
    }
}

impl From<String> for QuestionKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "stars" => QuestionKind::Stars,
            "boolean" => QuestionKind::Boolean,
            _ => QuestionKind::Other(tag),
        }
    }
}

impl From<QuestionKind> for String {
    fn from(kind: QuestionKind) -> Self {
        kind.tag().to_string()
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
