//! Batch scoring
//!
//! Parses the two batch input shapes callers submit, bare strings or
//! `{message, message_id, source}` objects, and runs each entry through the
//! engine, producing one summary row per non-empty message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use shrike_core::{analyze, Severity};

use crate::MAX_BATCH_MESSAGES;

/// Errors from batch input handling
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("batch input is not a JSON array of messages: {0}")]
    InvalidFormat(#[from] serde_json::Error),

    #[error("batch of {0} messages exceeds the cap of {max}", max = MAX_BATCH_MESSAGES)]
    TooLarge(usize),
}

/// One batch entry: a bare message string or a message object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BatchEntry {
    Text(String),
    Message {
        message: String,
        #[serde(default)]
        message_id: Option<String>,
        #[serde(default)]
        source: Option<String>,
    },
}

impl BatchEntry {
    fn message(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Message { message, .. } => message,
        }
    }
}

/// Summary row for one analyzed message
#[derive(Debug, Clone, Serialize)]
pub struct BatchItemSummary {
    pub message_id: String,
    pub source: String,
    pub scam_score: f64,
    #[serde(rename = "severity_level")]
    pub severity: Severity,
    pub is_scam: bool,
}

/// Result of one batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    /// Entries submitted, empty ones included
    pub total_messages: usize,
    /// Entries that were analyzed
    pub processed_messages: usize,
    pub results: Vec<BatchItemSummary>,
    pub timestamp: DateTime<Utc>,
}

/// Parse a JSON batch: an array of strings and/or message objects
pub fn parse_batch(input: &str) -> Result<Vec<BatchEntry>, BatchError> {
    let entries: Vec<BatchEntry> = serde_json::from_str(input)?;
    if entries.len() > MAX_BATCH_MESSAGES {
        return Err(BatchError::TooLarge(entries.len()));
    }
    Ok(entries)
}

/// Analyze every non-empty entry
///
/// Empty messages are skipped but still count toward `total_messages`.
/// Entries without an id get `msg_{index}_{unix_timestamp}`, entries without
/// a source get `"unknown"`.
pub fn run_batch(entries: &[BatchEntry]) -> BatchOutcome {
    let now = Utc::now();
    let mut results = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let text = entry.message();
        if text.is_empty() {
            continue;
        }

        let (message_id, source) = match entry {
            BatchEntry::Text(_) => (None, None),
            BatchEntry::Message { message_id, source, .. } => {
                (message_id.clone(), source.clone())
            }
        };

        let report = analyze(text);
        results.push(BatchItemSummary {
            message_id: message_id
                .unwrap_or_else(|| format!("msg_{}_{}", index, now.timestamp())),
            source: source.unwrap_or_else(|| "unknown".to_string()),
            scam_score: report.scam_score,
            severity: report.severity,
            is_scam: report.severity.is_scam(),
        });
    }

    info!(
        "Batch scored: {}/{} messages processed",
        results.len(),
        entries.len()
    );

    BatchOutcome {
        total_messages: entries.len(),
        processed_messages: results.len(),
        results,
        timestamp: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_strings() {
        let entries = parse_batch(r#"["hello", "urgent notice"]"#).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message(), "hello");
    }

    #[test]
    fn test_parse_message_objects_and_mixed() {
        let entries = parse_batch(
            r#"[{"message": "verify now", "message_id": "m-1", "source": "sms"}, "plain"]"#,
        )
        .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message(), "verify now");
        assert_eq!(entries[1].message(), "plain");
    }

    #[test]
    fn test_parse_rejects_oversized_batch() {
        let big: Vec<String> = (0..101).map(|i| format!("\"m{}\"", i)).collect();
        let input = format!("[{}]", big.join(","));
        match parse_batch(&input) {
            Err(BatchError::TooLarge(n)) => assert_eq!(n, 101),
            other => panic!("expected TooLarge, got {:?}", other.map(|e| e.len())),
        }
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(matches!(
            parse_batch(r#"{"message": "x"}"#),
            Err(BatchError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_run_skips_empty_but_counts_them() {
        let entries = parse_batch(r#"["", "urgent bank alert", ""]"#).unwrap();
        let outcome = run_batch(&entries);
        assert_eq!(outcome.total_messages, 3);
        assert_eq!(outcome.processed_messages, 1);
        assert_eq!(outcome.results.len(), 1);
    }

    #[test]
    fn test_run_fills_in_id_and_source() {
        let entries = parse_batch(r#"["urgent", {"message": "winner!", "message_id": "m-7"}]"#)
            .unwrap();
        let outcome = run_batch(&entries);
        assert!(outcome.results[0].message_id.starts_with("msg_0_"));
        assert_eq!(outcome.results[0].source, "unknown");
        assert_eq!(outcome.results[1].message_id, "m-7");
        assert_eq!(outcome.results[1].source, "unknown");
    }

    #[test]
    fn test_run_flags_scam_entries() {
        let entries = parse_batch(
            r#"["see you at lunch tomorrow",
                "URGENT! Verify your password and OTP code within 24 hours or we will suspend your bank account. Click here: http://scam.example"]"#,
        )
        .unwrap();
        let outcome = run_batch(&entries);
        assert!(!outcome.results[0].is_scam);
        assert!(outcome.results[1].is_scam);
        assert!(outcome.results[1].severity >= Severity::Medium);
    }
}
