//! Sliding-window rate limiter
//!
//! Tracks request timestamps per caller identifier over a rolling one-minute
//! window and decides admission. Stale timestamps are pruned lazily on each
//! check. Identifiers themselves are never evicted, so a process serving
//! unbounded distinct identifiers needs a periodic sweep in front of this.

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::DEFAULT_REQUESTS_PER_MINUTE;

/// Length of the admission window in seconds
const WINDOW_SECONDS: i64 = 60;

/// Outcome of one admission check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Admission {
    /// Admitted; the request was recorded against the window
    Granted {
        limit: u32,
        /// Requests in the window, this one included
        current: u32,
        remaining: u32,
    },
    /// Rejected; the request was not recorded
    Denied {
        limit: u32,
        current: u32,
        /// Flat window length, not the exact time until a slot frees up
        reset_in_seconds: u64,
    },
}

impl Admission {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Granted { .. })
    }
}

/// Per-identifier sliding-window request throttle
pub struct RateLimiter {
    requests_per_minute: u32,
    history: Mutex<HashMap<String, Vec<DateTime<Utc>>>>,
}

impl RateLimiter {
    /// Create a limiter with the given per-minute threshold
    pub fn new(requests_per_minute: u32) -> Self {
        Self {
            requests_per_minute,
            history: Mutex::new(HashMap::new()),
        }
    }

    /// Configured requests-per-minute threshold
    pub fn limit(&self) -> u32 {
        self.requests_per_minute
    }

    /// Check admission for `identifier` at the current instant
    pub fn check(&self, identifier: &str) -> Admission {
        self.check_at(identifier, Utc::now())
    }

    /// Check admission for `identifier` at an explicit instant
    ///
    /// Timestamps older than one window before `now` are pruned first, then
    /// the request is admitted and recorded only while the window holds fewer
    /// than `limit` entries. Exposed so tests and replay tooling can drive
    /// the clock instead of sleeping.
    pub fn check_at(&self, identifier: &str, now: DateTime<Utc>) -> Admission {
        let window_start = now - Duration::seconds(WINDOW_SECONDS);
        let mut history = self.history.lock();
        let timestamps = history.entry(identifier.to_string()).or_default();
        timestamps.retain(|&seen| seen > window_start);

        let current = timestamps.len() as u32;
        if current >= self.requests_per_minute {
            debug!(
                "Admission denied for {} ({}/{} in window)",
                identifier, current, self.requests_per_minute
            );
            return Admission::Denied {
                limit: self.requests_per_minute,
                current,
                reset_in_seconds: WINDOW_SECONDS as u64,
            };
        }

        timestamps.push(now);
        Admission::Granted {
            limit: self.requests_per_minute,
            current: current + 1,
            remaining: self.requests_per_minute - (current + 1),
        }
    }

    /// Number of identifiers with recorded history
    pub fn tracked_identifiers(&self) -> usize {
        self.history.lock().len()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_REQUESTS_PER_MINUTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_admits_until_limit_then_denies() {
        let limiter = RateLimiter::new(2);
        let t0 = instant(0);

        assert_eq!(
            limiter.check_at("client-a", t0),
            Admission::Granted { limit: 2, current: 1, remaining: 1 }
        );
        assert_eq!(
            limiter.check_at("client-a", t0),
            Admission::Granted { limit: 2, current: 2, remaining: 0 }
        );
        assert_eq!(
            limiter.check_at("client-a", t0),
            Admission::Denied { limit: 2, current: 2, reset_in_seconds: 60 }
        );
    }

    #[test]
    fn test_window_slides_after_sixty_seconds() {
        let limiter = RateLimiter::new(2);
        limiter.check_at("client-a", instant(0));
        limiter.check_at("client-a", instant(1));
        assert!(!limiter.check_at("client-a", instant(2)).is_allowed());

        // 61s after the first request both recorded entries have aged out
        assert!(limiter.check_at("client-a", instant(62)).is_allowed());
    }

    #[test]
    fn test_denied_requests_are_not_recorded() {
        let limiter = RateLimiter::new(1);
        assert!(limiter.check_at("client-a", instant(0)).is_allowed());
        assert!(!limiter.check_at("client-a", instant(30)).is_allowed());

        // Only the admitted request occupies the window; once it ages out the
        // identifier is clean again. Had the denial been recorded, this
        // check would still be over the limit.
        assert!(limiter.check_at("client-a", instant(61)).is_allowed());
    }

    #[test]
    fn test_identifiers_are_independent() {
        let limiter = RateLimiter::new(1);
        let t0 = instant(0);
        assert!(limiter.check_at("client-a", t0).is_allowed());
        assert!(limiter.check_at("client-b", t0).is_allowed());
        assert!(!limiter.check_at("client-a", t0).is_allowed());
        assert_eq!(limiter.tracked_identifiers(), 2);
    }

    #[test]
    fn test_zero_limit_denies_everything() {
        let limiter = RateLimiter::new(0);
        assert_eq!(
            limiter.check_at("client-a", instant(0)),
            Admission::Denied { limit: 0, current: 0, reset_in_seconds: 60 }
        );
    }

    #[test]
    fn test_default_limit() {
        let limiter = RateLimiter::default();
        assert_eq!(limiter.limit(), DEFAULT_REQUESTS_PER_MINUTE);
    }

    #[test]
    fn test_denied_admission_serializes_with_status() {
        let denied = Admission::Denied { limit: 60, current: 60, reset_in_seconds: 60 };
        let json = serde_json::to_value(&denied).unwrap();
        assert_eq!(json["status"], "denied");
        assert_eq!(json["reset_in_seconds"], 60);
    }
}
