//! GenerateTemplateHandler - writes an empty or sample answer file.

use std::path::PathBuf;

use tracing::info;

use crate::domain::answers::{generate_empty_answers, generate_sample_answers, AnswerSet};
use crate::domain::catalogue::Catalogue;
use crate::ports::AnswerStore;

use super::HandlerError;

/// What kind of answer file to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Every question mapped to null, to be filled in by hand.
    Empty,
    /// Plausible random answers for demos.
    Sample,
}

/// Command to generate an answer file for a sector.
#[derive(Debug, Clone)]
pub struct GenerateTemplateCommand {
    pub sector_id: Option<String>,
    pub kind: TemplateKind,
    pub output_path: PathBuf,
}

/// Handler generating answer templates and sample files.
pub struct GenerateTemplateHandler<'a, S: AnswerStore> {
    catalogue: &'a Catalogue,
    store: &'a S,
}

impl<'a, S: AnswerStore> GenerateTemplateHandler<'a, S> {
    pub fn new(catalogue: &'a Catalogue, store: &'a S) -> Self {
        Self { catalogue, store }
    }

    /// Builds the questionnaire for the sector, generates the answers and
    /// writes them to the output path. Returns the generated set.
    pub fn handle(&self, cmd: GenerateTemplateCommand) -> Result<AnswerSet, HandlerError> {
        let domains = self
            .catalogue
            .build_domains_for_sector(cmd.sector_id.as_deref())?;

        let answers = match cmd.kind {
            TemplateKind::Empty => generate_empty_answers(&domains),
            TemplateKind::Sample => generate_sample_answers(&domains),
        };

        self.store.save(&cmd.output_path, &answers)?;
        info!(path = %cmd.output_path.display(), kind = ?cmd.kind, "answer file generated");
        Ok(answers)
    }
}
