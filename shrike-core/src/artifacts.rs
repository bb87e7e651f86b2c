//! Structured artifacts extracted from message text
//!
//! Supports extraction of:
//! - Contact identifiers: email addresses, phone numbers
//! - Links: http/https URLs
//! - Cryptocurrency addresses (Bitcoin and Ethereum)
//! - Card-like 16-digit account numbers
//!
//! Extractors run on raw, untokenized text and are stateless. Results keep
//! first-occurrence order with exact-string duplicates dropped.

use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::LazyLock;

// Regex patterns for artifact extraction
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").unwrap()
});

// North American 3-3-4 grouping with optional +1 prefix and separators
static PHONE_NANP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?1?\s*[-.\s]?[0-9]{3}[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}").unwrap()
});

// International form: + country code, then 6-14 digits
static PHONE_INTL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+[0-9]{1,3}\s?[0-9]{6,14}").unwrap()
});

// Bare unseparated 10-digit run
static PHONE_BARE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9]{10}\b").unwrap()
});

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://[^\s]+").unwrap()
});

static BITCOIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:bc1|[13])[a-zA-HJ-NP-Z0-9]{25,62}\b").unwrap()
});

static ETHEREUM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b0x[a-fA-F0-9]{40}\b").unwrap()
});

static ACCOUNT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{4}[\s-]?\d{4}[\s-]?\d{4}[\s-]?\d{4}\b").unwrap()
});

/// Cryptocurrency addresses grouped by chain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CryptoAddresses {
    /// Bitcoin-style addresses (legacy and bech32 prefixes)
    pub bitcoin: Vec<String>,
    /// Ethereum-style 0x addresses
    pub ethereum: Vec<String>,
    /// Reserved for chains beyond the two recognized ones; always empty today
    pub other: Vec<String>,
}

impl CryptoAddresses {
    pub fn is_empty(&self) -> bool {
        self.bitcoin.is_empty() && self.ethereum.is_empty() && self.other.is_empty()
    }
}

/// Everything the pattern extractors pulled out of one message
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractedArtifacts {
    /// Email addresses
    pub emails: Vec<String>,
    /// Phone numbers across all recognized formats
    pub phone_numbers: Vec<String>,
    /// http/https URLs
    pub urls: Vec<String>,
    /// Cryptocurrency addresses by chain
    #[serde(rename = "cryptocurrency")]
    pub crypto: CryptoAddresses,
    /// Card-like 16-digit numbers, separators preserved
    pub account_numbers: Vec<String>,
}

impl ExtractedArtifacts {
    /// Emails plus phone numbers, the inputs to contact scoring
    pub fn contact_count(&self) -> usize {
        self.emails.len() + self.phone_numbers.len()
    }
}

/// Helper to collect matches in first-occurrence order, dropping exact duplicates
fn collect_unique(regex: &Regex, text: &str) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut values = Vec::new();
    for cap in regex.find_iter(text) {
        if seen.insert(cap.as_str()) {
            values.push(cap.as_str().to_string());
        }
    }
    values
}

/// Extract email addresses
pub fn extract_email_addresses(text: &str) -> Vec<String> {
    collect_unique(&EMAIL_REGEX, text)
}

/// Extract phone numbers
///
/// Three formats are recognized: North American 3-3-4 groupings,
/// international +CC forms, and bare 10-digit runs. A number matched by more
/// than one pattern with the same exact spelling appears once.
pub fn extract_phone_numbers(text: &str) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut numbers = Vec::new();
    for regex in [&PHONE_NANP_REGEX, &PHONE_INTL_REGEX, &PHONE_BARE_REGEX] {
        for cap in regex.find_iter(text) {
            if seen.insert(cap.as_str()) {
                numbers.push(cap.as_str().to_string());
            }
        }
    }
    numbers
}

/// Extract http/https URLs
///
/// A URL runs from its scheme to the next whitespace, so trailing
/// punctuation stays attached. Good enough for counting and display.
pub fn extract_urls(text: &str) -> Vec<String> {
    collect_unique(&URL_REGEX, text)
}

/// Extract cryptocurrency addresses, classified by chain
pub fn extract_crypto_addresses(text: &str) -> CryptoAddresses {
    CryptoAddresses {
        bitcoin: collect_unique(&BITCOIN_REGEX, text),
        ethereum: collect_unique(&ETHEREUM_REGEX, text),
        other: Vec::new(),
    }
}

/// Extract card-like 16-digit account numbers
pub fn extract_account_numbers(text: &str) -> Vec<String> {
    collect_unique(&ACCOUNT_REGEX, text)
}

/// Run every extractor over one message
pub fn extract_artifacts(text: &str) -> ExtractedArtifacts {
    ExtractedArtifacts {
        emails: extract_email_addresses(text),
        phone_numbers: extract_phone_numbers(text),
        urls: extract_urls(text),
        crypto: extract_crypto_addresses(text),
        account_numbers: extract_account_numbers(text),
    }
}
