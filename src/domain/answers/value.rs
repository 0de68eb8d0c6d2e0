//! Raw answer value - the permitted shapes arriving from answer documents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw answer as found in an answer document.
///
/// Answer files are plain JSON objects, so a value can be a boolean, an
/// integer rating, a boolean-like string ("oui", "yes", ...), or null for
/// "not answered yet". Coercion to a score is the scorer's job and depends
/// on the question kind; this type only preserves the shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Flag(bool),
    Rating(i64),
    Text(String),
    Unanswered,
}

impl AnswerValue {
    /// True if the value is the explicit "unanswered" sentinel (null).
    pub fn is_unanswered(&self) -> bool {
        matches!(self, AnswerValue::Unanswered)
    }

    /// Coerces to an integer the way a rating question reads its answer:
    /// integers pass through, booleans map to 0/1, strings parse after
    /// trimming. Anything else is `None`.
    pub fn as_rating(&self) -> Option<i64> {
        match self {
            AnswerValue::Rating(v) => Some(*v),
            AnswerValue::Flag(b) => Some(i64::from(*b)),
            AnswerValue::Text(s) => s.trim().parse().ok(),
            AnswerValue::Unanswered => None,
        }
    }

    /// Coerces to a boolean the way a yes/no question reads its answer:
    /// strings are truthy iff they match an affirmative token
    /// (case-insensitive, trimmed), integers iff non-zero, null is falsy.
    pub fn as_truthy(&self) -> bool {
        const AFFIRMATIVE: [&str; 4] = ["oui", "yes", "true", "1"];
        match self {
            AnswerValue::Flag(b) => *b,
            AnswerValue::Rating(v) => *v != 0,
            AnswerValue::Text(s) => {
                let token = s.trim().to_lowercase();
                AFFIRMATIVE.contains(&token.as_str())
            }
            AnswerValue::Unanswered => false,
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Flag(b) => write!(f, "{}", b),
            AnswerValue::Rating(v) => write!(f, "{}", v),
            AnswerValue::Text(s) => write!(f, "{}", s),
            AnswerValue::Unanswered => write!(f, "-"),
        }
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        AnswerValue::Flag(b)
    }
}

impl From<i64> for AnswerValue {
    fn from(v: i64) -> Self {
        AnswerValue::Rating(v)
    }
}
