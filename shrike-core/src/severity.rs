//! Severity classification
//!
//! Maps a normalized scam score onto four ordinal bands. Bands are inclusive
//! on their lower bound: exactly 0.75 is high, exactly 0.5 is medium,
//! exactly 0.25 is low.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score at or above which a message classifies as high severity
pub const HIGH_THRESHOLD: f64 = 0.75;
/// Score at or above which a message classifies as medium severity
pub const MEDIUM_THRESHOLD: f64 = 0.5;
/// Score at or above which a message classifies as low severity
pub const LOW_THRESHOLD: f64 = 0.25;

/// Ordinal severity of a scam assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// No scam indicators detected
    None,
    /// Suspicious but lower confidence
    Low,
    /// Potential scam with moderate risk
    Medium,
    /// Likely scam with immediate threat
    High,
}

impl Severity {
    /// Classify a normalized score
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_THRESHOLD {
            Self::High
        } else if score >= MEDIUM_THRESHOLD {
            Self::Medium
        } else if score >= LOW_THRESHOLD {
            Self::Low
        } else {
            Self::None
        }
    }

    /// Stable lowercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Human-readable description of the band
    pub fn description(&self) -> &'static str {
        match self {
            Self::None => "No scam indicators detected",
            Self::Low => "Suspicious but lower confidence",
            Self::Medium => "Potential scam with moderate risk",
            Self::High => "Likely scam with immediate threat",
        }
    }

    /// Whether the band counts as a scam verdict
    pub fn is_scam(&self) -> bool {
        matches!(self, Self::Medium | Self::High)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries_are_inclusive() {
        assert_eq!(Severity::from_score(0.75), Severity::High);
        assert_eq!(Severity::from_score(0.5), Severity::Medium);
        assert_eq!(Severity::from_score(0.25), Severity::Low);
        assert_eq!(Severity::from_score(0.24999), Severity::None);
    }

    #[test]
    fn test_band_extremes() {
        assert_eq!(Severity::from_score(0.0), Severity::None);
        assert_eq!(Severity::from_score(1.0), Severity::High);
    }

    #[test]
    fn test_bands_are_ordered() {
        assert!(Severity::None < Severity::Low);
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn test_scam_verdict_covers_medium_and_high() {
        assert!(Severity::High.is_scam());
        assert!(Severity::Medium.is_scam());
        assert!(!Severity::Low.is_scam());
        assert!(!Severity::None.is_scam());
    }

    #[test]
    fn test_labels_are_lowercase() {
        assert_eq!(Severity::High.as_str(), "high");
        assert_eq!(Severity::High.to_string(), "high");
        assert_eq!(Severity::None.as_str(), "none");
    }
}
