//! Process-wide service statistics
//!
//! A request counter plus the service start time, initialized at startup and
//! never reset for the life of the process.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Running counters for a hosting service
#[derive(Debug)]
pub struct ServiceStats {
    started_at: DateTime<Utc>,
    requests_processed: AtomicU64,
}

impl ServiceStats {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            requests_processed: AtomicU64::new(0),
        }
    }

    /// Record one handled request
    pub fn record_request(&self) {
        self.requests_processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn requests_processed(&self) -> u64 {
        self.requests_processed.load(Ordering::Relaxed)
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Point-in-time view of the counters
    pub fn snapshot(&self) -> StatsSnapshot {
        let now = Utc::now();
        StatsSnapshot {
            requests_processed: self.requests_processed(),
            uptime_seconds: (now - self.started_at).num_seconds().max(0),
            timestamp: now,
        }
    }
}

impl Default for ServiceStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable snapshot of [`ServiceStats`]
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    pub requests_processed: u64,
    pub uptime_seconds: i64,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_at_zero() {
        let stats = ServiceStats::new();
        assert_eq!(stats.requests_processed(), 0);
    }

    #[test]
    fn test_record_request_increments() {
        let stats = ServiceStats::new();
        stats.record_request();
        stats.record_request();
        assert_eq!(stats.requests_processed(), 2);
    }

    #[test]
    fn test_snapshot_reflects_counters() {
        let stats = ServiceStats::new();
        stats.record_request();
        let snapshot = stats.snapshot();
        assert_eq!(snapshot.requests_processed, 1);
        assert!(snapshot.uptime_seconds >= 0);
        assert!(snapshot.timestamp >= stats.started_at());
    }
}
