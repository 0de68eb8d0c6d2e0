//! Use-case handlers, one module per command.

mod build_questionnaire;
mod error;
mod generate_template;
mod run_diagnostic;

pub use build_questionnaire::{BuildQuestionnaireCommand, BuildQuestionnaireHandler};
pub use error::HandlerError;
pub use generate_template::{GenerateTemplateCommand, GenerateTemplateHandler, TemplateKind};
pub use run_diagnostic::{DiagnosticReport, RunDiagnosticCommand, RunDiagnosticHandler};
