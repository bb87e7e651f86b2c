//! Message analysis facade
//!
//! [`analyze`] runs every extractor, both indicator groups, and the category
//! matcher over a message exactly once, folds the results into a score, and
//! returns one immutable report. Persistence and transport stay with the
//! caller.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::artifacts::{self, ExtractedArtifacts};
use crate::categories::{self, CategoryMatch};
use crate::indicators::{PersonalInfoIndicators, UrgencyIndicators};
use crate::scoring::ScoreComponents;
use crate::severity::Severity;

/// Indicator groups evaluated for one message
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct IndicatorSummary {
    pub personal_info_requests: PersonalInfoIndicators,
    pub urgency_indicators: UrgencyIndicators,
}

/// Complete analysis of one message
///
/// Serialized field names follow the wire shape downstream consumers expect
/// (`severity_level`, `extracted_data`, `scam_categories`).
#[derive(Debug, Clone, Serialize)]
pub struct ScamReport {
    /// Instant the analysis ran
    pub timestamp: DateTime<Utc>,
    /// Input length in Unicode scalar values
    pub text_length: usize,
    /// Normalized scam likelihood in [0, 1]
    pub scam_score: f64,
    /// Severity band for `scam_score`
    #[serde(rename = "severity_level")]
    pub severity: Severity,
    /// Artifacts the pattern extractors found
    #[serde(rename = "extracted_data")]
    pub extracted: ExtractedArtifacts,
    /// Indicator flags
    pub indicators: IndicatorSummary,
    /// Matched categories in keyword-table order
    #[serde(rename = "scam_categories")]
    pub categories: Vec<CategoryMatch>,
}

impl ScamReport {
    /// Whether the severity band counts as a scam verdict
    pub fn is_scam(&self) -> bool {
        self.severity.is_scam()
    }
}

/// Analyze one message
///
/// Every input, including the empty string, yields a valid report; empty
/// input scores 0.0 with severity `none` and empty collections. Safe to call
/// from any number of threads, the only shared state is the static keyword
/// table.
pub fn analyze(text: &str) -> ScamReport {
    let extracted = artifacts::extract_artifacts(text);
    let personal_info = PersonalInfoIndicators::detect(text);
    let urgency = UrgencyIndicators::detect(text);
    let matched = categories::match_categories(text);

    let components = ScoreComponents::from_parts(&matched, &personal_info, &urgency, &extracted);
    let scam_score = components.total();

    ScamReport {
        timestamp: Utc::now(),
        text_length: text.chars().count(),
        scam_score,
        severity: Severity::from_score(scam_score),
        extracted,
        indicators: IndicatorSummary {
            personal_info_requests: personal_info,
            urgency_indicators: urgency,
        },
        categories: matched,
    }
}
