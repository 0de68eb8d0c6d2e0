//! Catalogue aggregate and questionnaire assembly.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::foundation::DiagnosticError;

use super::{Domain, SectorProfile};

/// The effective domain set for one questionnaire.
pub type DomainMap = BTreeMap<String, Domain>;

/// The loaded question catalogue: common domains plus sector profiles.
///
/// Built once at startup and treated as read-only afterwards.
/// [`Catalogue::build_domains_for_sector`] always works on clones, so
/// repeated builds never observe each other's mutations.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogue {
    domains: BTreeMap<String, Domain>,
    sectors: BTreeMap<String, SectorProfile>,
}

impl Catalogue {
    pub fn new(domains: Vec<Domain>, sectors: Vec<SectorProfile>) -> Self {
        Self {
            domains: domains.into_iter().map(|d| (d.id.clone(), d)).collect(),
            sectors: sectors.into_iter().map(|s| (s.id.clone(), s)).collect(),
        }
    }

    /// The common domain templates, keyed by id.
    pub fn domains(&self) -> &BTreeMap<String, Domain> {
        &self.domains
    }

    /// The known sector profiles, keyed by id.
    pub fn sectors(&self) -> &BTreeMap<String, SectorProfile> {
        &self.sectors
    }

    /// Looks up a sector profile.
    pub fn sector(&self, sector_id: &str) -> Option<&SectorProfile> {
        self.sectors.get(sector_id)
    }

    /// Builds the effective domain set for a sector.
    ///
    /// - `None` returns a copy of the common catalogue unchanged.
    /// - An unknown sector id fails with [`DiagnosticError::UnknownSector`].
    /// - Otherwise the sector's extra questions are appended, in source
    ///   order, to the copied domains they reference; extras referencing a
    ///   domain absent from the common catalogue are silently dropped.
    ///
    /// The shared templates are never mutated; calling twice with the same
    /// sector id yields value-equal results.
    pub fn build_domains_for_sector(
        &self,
        sector_id: Option<&str>,
    ) -> Result<DomainMap, DiagnosticError> {
        let mut domains = self.domains.clone();

        let Some(sector_id) = sector_id else {
            return Ok(domains);
        };

        let sector = self
            .sectors
            .get(sector_id)
            .ok_or_else(|| DiagnosticError::unknown_sector(sector_id))?;

        for (domain_id, extra_qs) in &sector.extra_questions {
            match domains.get_mut(domain_id) {
                Some(domain) => domain.questions.extend(extra_qs.iter().cloned()),
                None => {
                    // Extension targets a domain the common catalogue does
                    // not define; tolerated and skipped.
                    debug!(sector = sector_id, domain = %domain_id, "dropping extra questions for unknown domain");
                }
            }
        }

        Ok(domains)
    }
}
