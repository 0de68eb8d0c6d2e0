//! RunDiagnosticHandler - full diagnostic over an answer file.

use std::path::PathBuf;

use tracing::info;

use crate::domain::analysis::{extract_strong_points, extract_weak_points};
use crate::domain::catalogue::Catalogue;
use crate::domain::scoring::{score_global, ScoreMap, GLOBAL_KEY};
use crate::ports::AnswerStore;

use super::HandlerError;

/// Command to run a diagnostic for a sector against an answer file.
#[derive(Debug, Clone)]
pub struct RunDiagnosticCommand {
    pub sector_id: Option<String>,
    pub answers_path: PathBuf,
}

/// Result of a diagnostic run, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticReport {
    pub sector_id: Option<String>,
    /// Per-domain scores plus the `__global__` aggregate.
    pub scores: ScoreMap,
    pub global_score: f64,
    /// Non-strong domains, weakest first.
    pub weak_points: Vec<(String, f64)>,
    /// Strong domains, strongest first.
    pub strong_points: Vec<(String, f64)>,
}

/// Handler running the questionnaire-build / score / classify pipeline.
pub struct RunDiagnosticHandler<'a, S: AnswerStore> {
    catalogue: &'a Catalogue,
    store: &'a S,
}

impl<'a, S: AnswerStore> RunDiagnosticHandler<'a, S> {
    pub fn new(catalogue: &'a Catalogue, store: &'a S) -> Self {
        Self { catalogue, store }
    }

    pub fn handle(&self, cmd: RunDiagnosticCommand) -> Result<DiagnosticReport, HandlerError> {
        let domains = self
            .catalogue
            .build_domains_for_sector(cmd.sector_id.as_deref())?;
        let all_answers = self.store.load(&cmd.answers_path)?;

        let scores = score_global(&domains, &all_answers)?;
        let global_score = scores.get(GLOBAL_KEY).copied().unwrap_or(0.0);
        let weak_points = extract_weak_points(&domains, &all_answers)?;
        let strong_points = extract_strong_points(&domains, &all_answers)?;

        info!(
            sector = ?cmd.sector_id,
            global = global_score,
            weak = weak_points.len(),
            strong = strong_points.len(),
            "diagnostic complete"
        );

        Ok(DiagnosticReport {
            sector_id: cmd.sector_id,
            scores,
            global_score,
            weak_points,
            strong_points,
        })
    }
}
