//! Application layer - use-case handlers orchestrating the domain core.
//!
//! A presentation layer (dashboard, CLI) calls these handlers with plain
//! data and renders their results; no domain operation depends on any
//! presentation type.

pub mod handlers;

pub use handlers::{
    BuildQuestionnaireCommand, BuildQuestionnaireHandler, DiagnosticReport,
    GenerateTemplateCommand, GenerateTemplateHandler, HandlerError, RunDiagnosticCommand,
    RunDiagnosticHandler, TemplateKind,
};
