//! Shrike Core - extraction and scoring engine for scam-message triage
//!
//! This crate provides the analysis primitives:
//! - Pattern extractors for contact, link, crypto, and card-like artifacts
//! - Manipulation indicator groups (personal-info requests, urgency tactics)
//! - Keyword-table category matching
//! - Weighted score aggregation and severity classification
//!
//! The engine is pure: no I/O, no mutable shared state, and every call runs
//! to completion in time linear in the input.

pub mod artifacts;
pub mod indicators;
pub mod categories;
pub mod scoring;
pub mod severity;
pub mod report;

pub use artifacts::*;
pub use indicators::*;
pub use categories::*;
pub use scoring::*;
pub use severity::*;
pub use report::*;

/// Maximum message length in characters callers should accept
///
/// The engine itself handles any length; hosting layers enforce this bound
/// before invoking [`analyze`].
pub const MAX_MESSAGE_CHARS: usize = 10_000;
