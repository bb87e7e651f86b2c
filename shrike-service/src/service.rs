//! Triage service host
//!
//! Owns the mutable hosting state (rate limiter, stats) and fronts the
//! stateless engine with an admission-checked entry point. Construct one per
//! process and share it by reference; tests construct isolated instances.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use shrike_core::{analyze, ScamReport};

use crate::limiter::{Admission, RateLimiter};
use crate::stats::{ServiceStats, StatsSnapshot};

/// Outcome of one admission-checked analysis request
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Admitted; the analysis ran
    Analyzed {
        report: ScamReport,
        quota: Admission,
    },
    /// Throttled; the engine was not invoked
    Throttled(Admission),
}

impl SubmitOutcome {
    pub fn report(&self) -> Option<&ScamReport> {
        match self {
            Self::Analyzed { report, .. } => Some(report),
            Self::Throttled(_) => None,
        }
    }
}

/// Admission control and stats wrapped around the engine
pub struct TriageService {
    limiter: RateLimiter,
    stats: ServiceStats,
}

impl TriageService {
    pub fn new(limiter: RateLimiter) -> Self {
        Self {
            limiter,
            stats: ServiceStats::new(),
        }
    }

    /// Run one admission-checked analysis for `client_id`
    pub fn submit(&self, client_id: &str, text: &str) -> SubmitOutcome {
        self.submit_at(client_id, text, Utc::now())
    }

    /// As [`Self::submit`], with an explicit admission instant
    pub fn submit_at(&self, client_id: &str, text: &str, now: DateTime<Utc>) -> SubmitOutcome {
        let quota = self.limiter.check_at(client_id, now);
        if !quota.is_allowed() {
            debug!("Throttled {}", client_id);
            return SubmitOutcome::Throttled(quota);
        }

        let report = analyze(text);
        self.stats.record_request();
        info!(
            "Analyzed message for {} with score {:.3}",
            client_id, report.scam_score
        );
        SubmitOutcome::Analyzed { report, quota }
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }
}

impl Default for TriageService {
    fn default() -> Self {
        Self::new(RateLimiter::default())
    }
}
