//! Shared error type for use-case handlers.

use thiserror::Error;

use crate::domain::foundation::DiagnosticError;
use crate::ports::{AnswerStoreError, CatalogueSourceError};

/// Any failure a handler can surface to its caller.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Domain(#[from] DiagnosticError),

    #[error(transparent)]
    Catalogue(#[from] CatalogueSourceError),

    #[error(transparent)]
    Answers(#[from] AnswerStoreError),
}
