//! BuildQuestionnaireHandler - effective domain set for a sector.

use tracing::debug;

use crate::domain::catalogue::{Catalogue, DomainMap};

use super::HandlerError;

/// Command to build the questionnaire for an optional sector.
#[derive(Debug, Clone, Default)]
pub struct BuildQuestionnaireCommand {
    /// Sector to extend the common trunk with; `None` keeps the trunk as is.
    pub sector_id: Option<String>,
}

/// Handler producing the effective domain set for a sector selection.
pub struct BuildQuestionnaireHandler<'a> {
    catalogue: &'a Catalogue,
}

impl<'a> BuildQuestionnaireHandler<'a> {
    pub fn new(catalogue: &'a Catalogue) -> Self {
        Self { catalogue }
    }

    pub fn handle(&self, cmd: BuildQuestionnaireCommand) -> Result<DomainMap, HandlerError> {
        debug!(sector = ?cmd.sector_id, "building questionnaire");
        let domains = self
            .catalogue
            .build_domains_for_sector(cmd.sector_id.as_deref())?;
        Ok(domains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalogue::{Domain, Question, SectorProfile};
    use crate::domain::foundation::{DiagnosticError, QuestionKind};

    fn catalogue() -> Catalogue {
        let si = Domain::new(
            "si",
            "Systèmes d'Information",
            "",
            vec![Question::new("si_1", QuestionKind::Stars, "...")],
        );
        let tech = SectorProfile::new("tech", "Tech").with_extra(
            "si",
            vec![Question::new("si_701", QuestionKind::Stars, "...")],
        );
        Catalogue::new(vec![si], vec![tech])
    }

    #[test]
    fn handle_without_sector_returns_common_trunk() {
        let catalogue = catalogue();
        let handler = BuildQuestionnaireHandler::new(&catalogue);

        let domains = handler.handle(BuildQuestionnaireCommand::default()).unwrap();
        assert_eq!(domains["si"].questions.len(), 1);
    }

    #[test]
    fn handle_with_sector_appends_extras() {
        let catalogue = catalogue();
        let handler = BuildQuestionnaireHandler::new(&catalogue);

        let domains = handler
            .handle(BuildQuestionnaireCommand {
                sector_id: Some("tech".to_string()),
            })
            .unwrap();
        assert_eq!(domains["si"].questions.len(), 2);
        assert_eq!(domains["si"].questions[1].id, "si_701");
    }

    #[test]
    fn handle_with_unknown_sector_fails() {
        let catalogue = catalogue();
        let handler = BuildQuestionnaireHandler::new(&catalogue);

        let err = handler
            .handle(BuildQuestionnaireCommand {
                sector_id: Some("spatial".to_string()),
            })
            .unwrap_err();
        assert!(matches!(
            err,
            HandlerError::Domain(DiagnosticError::UnknownSector { .. })
        ));
    }
}
