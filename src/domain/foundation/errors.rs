//! Error types for the domain layer.

use thiserror::Error;

/// Errors raised by questionnaire assembly and scoring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticError {
    #[error("Unknown sector: {sector_id}")]
    UnknownSector { sector_id: String },

    #[error("Unknown question type '{kind}' on question '{question_id}'")]
    UnknownQuestionType { question_id: String, kind: String },
}

impl DiagnosticError {
    /// Creates an unknown sector error.
    pub fn unknown_sector(sector_id: impl Into<String>) -> Self {
        DiagnosticError::UnknownSector {
            sector_id: sector_id.into(),
        }
    }

    /// Creates an unknown question type error.
    pub fn unknown_question_type(
        question_id: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        DiagnosticError::UnknownQuestionType {
            question_id: question_id.into(),
            kind: kind.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sector_displays_sector_id() {
        let err = DiagnosticError::unknown_sector("spatial");
        assert_eq!(format!("{}", err), "Unknown sector: spatial");
    }

    #[test]
    fn unknown_question_type_displays_kind_and_question() {
        let err = DiagnosticError::unknown_question_type("finance_1", "emoji");
        assert_eq!(
            format!("{}", err),
            "Unknown question type 'emoji' on question 'finance_1'"
        );
    }
}
