//! Sector profile entity - additive questions per business sector.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Question;

/// An industry vertical that layers extra questions onto specific domains
/// when that sector is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorProfile {
    /// Unique identifier (e.g. "tech").
    pub id: String,
    /// Display label (e.g. "Tech / numérique / start-up").
    pub label: String,
    /// Extra questions keyed by domain id. May reference domains that do
    /// not exist in the common catalogue; those entries are dropped at
    /// questionnaire build time, not rejected at load time.
    #[serde(default)]
    pub extra_questions: BTreeMap<String, Vec<Question>>,
}

impl SectorProfile {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            extra_questions: BTreeMap::new(),
        }
    }

    /// Adds extra questions for a domain.
    pub fn with_extra(mut self, domain_id: impl Into<String>, questions: Vec<Question>) -> Self {
        self.extra_questions.insert(domain_id.into(), questions);
        self
    }
}
