//! Weighted scam-likelihood scoring
//!
//! Folds category matches, indicator density, link count, and contact count
//! into one normalized score in [0, 1]. Each component contributes at most
//! its weight, and the total is divided by the sum of the weights considered,
//! so the result stays normalized even if the weight table drifts away from
//! summing to 1.

use serde::Serialize;

use crate::artifacts::{self, ExtractedArtifacts};
use crate::categories::{self, CategoryMatch};
use crate::indicators::{PersonalInfoIndicators, UrgencyIndicators};

/// Weight of the matched-category component
pub const CATEGORY_WEIGHT: f64 = 0.30;
/// Score added per matched category, up to [`CATEGORY_WEIGHT`]
pub const PER_CATEGORY_SCORE: f64 = 0.08;
/// Weight of the personal-information-request component
pub const PERSONAL_INFO_WEIGHT: f64 = 0.25;
/// Weight of the urgency-tactic component
pub const URGENCY_WEIGHT: f64 = 0.20;
/// Weight of the suspicious-link component
pub const LINK_WEIGHT: f64 = 0.15;
/// Per-URL fill rate of the link component
pub const PER_URL_SCORE: f64 = 0.15;
/// Weight of the contact-information component
pub const CONTACT_WEIGHT: f64 = 0.10;
/// Score added per extracted contact, up to [`CONTACT_WEIGHT`]
pub const PER_CONTACT_SCORE: f64 = 0.05;

/// Per-component contributions to one message's score
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ScoreComponents {
    pub categories: f64,
    pub personal_info: f64,
    pub urgency: f64,
    pub suspicious_links: f64,
    pub contact_info: f64,
}

impl ScoreComponents {
    /// Compute contributions from already-extracted component results
    pub fn from_parts(
        matched: &[CategoryMatch],
        personal: &PersonalInfoIndicators,
        urgency: &UrgencyIndicators,
        artifacts: &ExtractedArtifacts,
    ) -> Self {
        let url_count = artifacts.urls.len();
        let suspicious_links = if url_count > 0 {
            LINK_WEIGHT * (url_count as f64 * PER_URL_SCORE).min(1.0)
        } else {
            0.0
        };

        let contact_count = artifacts.contact_count();
        let contact_info = if contact_count > 0 {
            (contact_count as f64 * PER_CONTACT_SCORE).min(CONTACT_WEIGHT)
        } else {
            0.0
        };

        Self {
            categories: (matched.len() as f64 * PER_CATEGORY_SCORE).min(CATEGORY_WEIGHT),
            personal_info: group_ratio(personal.active_count(), PersonalInfoIndicators::FLAG_COUNT)
                * PERSONAL_INFO_WEIGHT,
            urgency: group_ratio(urgency.active_count(), UrgencyIndicators::FLAG_COUNT)
                * URGENCY_WEIGHT,
            suspicious_links,
            contact_info,
        }
    }

    /// Normalized total: contributions summed, divided by the weight mass
    /// considered, clamped to 1.0
    pub fn total(&self) -> f64 {
        let mut score = 0.0;
        let mut max_score = 0.0;

        score += self.categories;
        max_score += CATEGORY_WEIGHT;
        score += self.personal_info;
        max_score += PERSONAL_INFO_WEIGHT;
        score += self.urgency;
        max_score += URGENCY_WEIGHT;
        score += self.suspicious_links;
        max_score += LINK_WEIGHT;
        score += self.contact_info;
        max_score += CONTACT_WEIGHT;

        let normalized = if max_score > 0.0 { score / max_score } else { 0.0 };
        normalized.min(1.0)
    }
}

/// Share of set flags in a group; zero for an empty group
fn group_ratio(active: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    active as f64 / total as f64
}

/// Score a message from raw text
///
/// Convenience wrapper that runs the extractors itself. Callers that already
/// hold the component results should use [`ScoreComponents::from_parts`] to
/// avoid re-running them.
pub fn scam_score(text: &str) -> f64 {
    let components = ScoreComponents::from_parts(
        &categories::match_categories(text),
        &PersonalInfoIndicators::detect(text),
        &UrgencyIndicators::detect(text),
        &artifacts::extract_artifacts(text),
    );
    components.total()
}
