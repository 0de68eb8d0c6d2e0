//! Tier scales for classifying domain scores.
//!
//! Two distinct scales coexist and must not be conflated:
//! - [`Tier`], the three-level scale used by weak/strong point extraction;
//! - [`Badge`], the finer five-level scale used by presentation layers for
//!   score badges.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scores at or above this are "strong" on both scales.
pub const STRONG_THRESHOLD: f64 = 75.0;

/// Scores at or above this (and below strong) are "to improve" on the
/// three-level scale.
pub const IMPROVE_THRESHOLD: f64 = 40.0;

/// Three-level classification used for weak/strong point extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Strong,
    ToImprove,
    Critical,
}

impl Tier {
    /// Classifies a 0-100 score.
    pub fn from_score(score: f64) -> Self {
        if score >= STRONG_THRESHOLD {
            Tier::Strong
        } else if score >= IMPROVE_THRESHOLD {
            Tier::ToImprove
        } else {
            Tier::Critical
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Strong => "strong",
            Tier::ToImprove => "to-improve",
            Tier::Critical => "critical",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Five-level badge scale for presentation (score pills, report labels).
///
/// Thresholds: 75 / 60 / 40 / 20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Badge {
    Strong,
    Good,
    Average,
    ToImprove,
    Critical,
}

impl Badge {
    /// Classifies a 0-100 score.
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            Badge::Strong
        } else if score >= 60.0 {
            Badge::Good
        } else if score >= 40.0 {
            Badge::Average
        } else if score >= 20.0 {
            Badge::ToImprove
        } else {
            Badge::Critical
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Strong => "strong",
            Badge::Good => "good",
            Badge::Average => "average",
            Badge::ToImprove => "to-improve",
            Badge::Critical => "critical",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_from_score_uses_three_level_thresholds() {
        assert_eq!(Tier::from_score(100.0), Tier::Strong);
        assert_eq!(Tier::from_score(75.0), Tier::Strong);
        assert_eq!(Tier::from_score(74.9), Tier::ToImprove);
        assert_eq!(Tier::from_score(40.0), Tier::ToImprove);
        assert_eq!(Tier::from_score(39.9), Tier::Critical);
        assert_eq!(Tier::from_score(0.0), Tier::Critical);
    }

    #[test]
    fn badge_from_score_uses_five_level_thresholds() {
        assert_eq!(Badge::from_score(100.0), Badge::Strong);
        assert_eq!(Badge::from_score(75.0), Badge::Strong);
        assert_eq!(Badge::from_score(74.9), Badge::Good);
        assert_eq!(Badge::from_score(60.0), Badge::Good);
        assert_eq!(Badge::from_score(59.9), Badge::Average);
        assert_eq!(Badge::from_score(40.0), Badge::Average);
        assert_eq!(Badge::from_score(39.9), Badge::ToImprove);
        assert_eq!(Badge::from_score(20.0), Badge::ToImprove);
        assert_eq!(Badge::from_score(19.9), Badge::Critical);
    }

    #[test]
    fn scales_diverge_between_40_and_75() {
        // A 65 is "to-improve" on the coarse scale but "good" on the badge
        // scale; the two must stay distinct.
        assert_eq!(Tier::from_score(65.0), Tier::ToImprove);
        assert_eq!(Badge::from_score(65.0), Badge::Good);
    }

    #[test]
    fn tier_displays_kebab_case_label() {
        assert_eq!(format!("{}", Tier::ToImprove), "to-improve");
        assert_eq!(format!("{}", Badge::Average), "average");
    }

    #[test]
    fn tier_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Tier::ToImprove).unwrap(),
            "\"to-improve\""
        );
        assert_eq!(serde_json::to_string(&Badge::Good).unwrap(), "\"good\"");
    }
}
