// ============================================================================
// Verifier
// Character-by-character comparison against the independent reference
// ============================================================================

use super::reference::reference_expansion;
use crate::interfaces::{EventHandler, SolverEvent};
use crate::solver::{SolveError, SolverConfig};
use chrono::Utc;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of characters shown on each side of a mismatching index
const CONTEXT_RADIUS: usize = 8;

/// Structured result of comparing a candidate expansion against the
/// reference.
///
/// A mismatch is a reported outcome, not an error: it carries enough
/// context to localize a truncation or guard-sizing bug without crashing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VerificationOutcome {
    /// Candidate and reference match character for character
    Verified,

    /// First differing character, with a short window of both strings
    /// around that index
    Mismatch {
        index: usize,
        candidate_context: String,
        reference_context: String,
    },
}

impl VerificationOutcome {
    /// True for a full match
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationOutcome::Verified)
    }
}

/// Verifier recomputing √2 from scratch and comparing expansions.
///
/// The reference comes from an independent square-root primitive with the
/// identical round-toward-zero policy; no intermediate state is shared with
/// the Newton solver.
pub struct Verifier {
    /// Precision parameters; only the digit count and guard are used
    config: SolverConfig,

    /// Event handler for processing lifecycle events
    event_handler: Arc<dyn EventHandler>,
}

impl Verifier {
    /// Create a new verifier
    pub fn new(config: SolverConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    /// Verify a candidate expansion against a freshly computed reference.
    ///
    /// # Errors
    /// - `InvalidDigitCount` for a negative configured digit count
    /// - errors from the reference computation, propagated unmodified
    pub fn verify(&self, candidate: &str) -> Result<VerificationOutcome, SolveError> {
        let digit_count = u64::try_from(self.config.digit_count())
            .map_err(|_| SolveError::InvalidDigitCount(self.config.digit_count()))?;

        let mut events = vec![SolverEvent::VerificationStarted {
            digit_count,
            timestamp: Utc::now(),
        }];

        let reference = reference_expansion(digit_count, self.config.guard_digits())?;
        let outcome = compare_expansions(candidate, &reference);

        let mismatch_index = match &outcome {
            VerificationOutcome::Verified => None,
            VerificationOutcome::Mismatch { index, .. } => Some(*index),
        };
        events.push(SolverEvent::VerificationCompleted {
            verified: mismatch_index.is_none(),
            mismatch_index,
            timestamp: Utc::now(),
        });
        self.event_handler.on_events(events);

        Ok(outcome)
    }
}

/// Compare two expansions character by character. A length difference is
/// reported as a mismatch at the index where the shorter string ends.
fn compare_expansions(candidate: &str, reference: &str) -> VerificationOutcome {
    let mut cand = candidate.chars();
    let mut refr = reference.chars();
    let mut index = 0usize;
    loop {
        match (cand.next(), refr.next()) {
            (Some(c), Some(r)) if c == r => index += 1,
            (None, None) => return VerificationOutcome::Verified,
            _ => return mismatch_at(index, candidate, reference),
        }
    }
}

fn mismatch_at(index: usize, candidate: &str, reference: &str) -> VerificationOutcome {
    VerificationOutcome::Mismatch {
        index,
        candidate_context: context_window(candidate, index),
        reference_context: context_window(reference, index),
    }
}

/// A short window of characters around `index`, clamped to the string
/// bounds.
fn context_window(s: &str, index: usize) -> String {
    let start = index.saturating_sub(CONTEXT_RADIUS);
    s.chars()
        .skip(start)
        .take(index - start + CONTEXT_RADIUS + 1)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
