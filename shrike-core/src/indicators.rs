//! Manipulation indicator detection
//!
//! Two boolean indicator groups evaluated against a lower-cased copy of the
//! message:
//! - Personal-information requests (SSN, card data, passwords, OTPs, DOB)
//! - Urgency and pressure tactics (demands, threats, deadlines, appeals)
//!
//! Each flag is an independent word-boundary-anchored pattern match.
//! Detection is stateless and has no side effects.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static SSN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:ssn|social security|social.{0,5}security)\b").unwrap()
});

static CREDIT_CARD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:credit.?card|cvv|card.?number)\b").unwrap()
});

static PASSWORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:password|pin|passcode)\b").unwrap()
});

static OTP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:otp|one.?time.?password|verification.?code)\b").unwrap()
});

static DOB_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:date.?of.?birth|dob|birthday)\b").unwrap()
});

static IMMEDIATE_ACTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:urgent|immediately|asap|right now|quick action)\b").unwrap()
});

static THREAT_LANGUAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:shut down|freeze|block|suspend|close|lock)\b").unwrap()
});

static TIME_PRESSURE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:today|24 hours|48 hours|deadline|expires)\b").unwrap()
});

static EMOTIONAL_APPEAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:beloved|dear|urgent need|help|emergency)\b").unwrap()
});

/// Flags marking requests for personal information
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PersonalInfoIndicators {
    pub requests_ssn: bool,
    pub requests_credit_card: bool,
    pub requests_password: bool,
    pub requests_otp: bool,
    pub requests_dob: bool,
}

impl PersonalInfoIndicators {
    /// Number of flags in the group
    pub const FLAG_COUNT: usize = 5;

    /// Evaluate the group against a message
    pub fn detect(text: &str) -> Self {
        let lower = text.to_lowercase();
        Self {
            requests_ssn: SSN_REGEX.is_match(&lower),
            requests_credit_card: CREDIT_CARD_REGEX.is_match(&lower),
            requests_password: PASSWORD_REGEX.is_match(&lower),
            requests_otp: OTP_REGEX.is_match(&lower),
            requests_dob: DOB_REGEX.is_match(&lower),
        }
    }

    /// Flag names and values, in declaration order
    pub fn flags(&self) -> [(&'static str, bool); Self::FLAG_COUNT] {
        [
            ("requests_ssn", self.requests_ssn),
            ("requests_credit_card", self.requests_credit_card),
            ("requests_password", self.requests_password),
            ("requests_otp", self.requests_otp),
            ("requests_dob", self.requests_dob),
        ]
    }

    /// How many flags are set
    pub fn active_count(&self) -> usize {
        self.flags().iter().filter(|(_, set)| *set).count()
    }
}

/// Flags marking urgency and pressure tactics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UrgencyIndicators {
    pub immediate_action: bool,
    pub threat_language: bool,
    pub time_pressure: bool,
    pub emotional_appeal: bool,
}

impl UrgencyIndicators {
    /// Number of flags in the group
    pub const FLAG_COUNT: usize = 4;

    /// Evaluate the group against a message
    pub fn detect(text: &str) -> Self {
        let lower = text.to_lowercase();
        Self {
            immediate_action: IMMEDIATE_ACTION_REGEX.is_match(&lower),
            threat_language: THREAT_LANGUAGE_REGEX.is_match(&lower),
            time_pressure: TIME_PRESSURE_REGEX.is_match(&lower),
            emotional_appeal: EMOTIONAL_APPEAL_REGEX.is_match(&lower),
        }
    }

    /// Flag names and values, in declaration order
    pub fn flags(&self) -> [(&'static str, bool); Self::FLAG_COUNT] {
        [
            ("immediate_action", self.immediate_action),
            ("threat_language", self.threat_language),
            ("time_pressure", self.time_pressure),
            ("emotional_appeal", self.emotional_appeal),
        ]
    }

    /// How many flags are set
    pub fn active_count(&self) -> usize {
        self.flags().iter().filter(|(_, set)| *set).count()
    }
}
