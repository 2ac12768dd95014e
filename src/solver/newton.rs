// ============================================================================
// Newton Root Solver
// Babylonian iteration for the decimal expansion of √2
// ============================================================================

use super::config::SolverConfig;
use crate::interfaces::{EventHandler, SolverEvent};
use crate::numeric::{BigFixed, NumericError};
use chrono::Utc;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Errors
// ============================================================================

/// Errors produced by the solver and the verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The requested digit count is negative
    InvalidDigitCount(i64),
    /// The independent square-root primitive produced no value
    ReferenceUnavailable,
    /// An arithmetic operation failed
    Numeric(NumericError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidDigitCount(n) => {
                write!(f, "invalid digit count: {} (must be non-negative)", n)
            }
            SolveError::ReferenceUnavailable => {
                write!(f, "reference square-root primitive produced no value")
            }
            SolveError::Numeric(err) => write!(f, "numeric error: {}", err),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolveError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for SolveError {
    fn from(err: NumericError) -> Self {
        SolveError::Numeric(err)
    }
}

// ============================================================================
// Expansion
// ============================================================================

/// A fixed-point decimal expansion of √2.
///
/// The string has the exact shape `1.` followed by `digit_count` ASCII
/// digits; for a digit count of zero it is the bare `"1"` with no decimal
/// point. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expansion {
    digit_count: u64,
    value: String,
}

impl Expansion {
    /// Number of fractional digits in the expansion
    pub fn digit_count(&self) -> u64 {
        self.digit_count
    }

    /// The expansion as a fixed-point string
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consume the expansion, yielding the string for persistence
    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for Expansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

// ============================================================================
// Root Solver
// ============================================================================

/// Newton (Babylonian) solver producing the decimal expansion of √2.
///
/// The iteration `x' = (x + 2/x) / 2` runs at a working scale of
/// `digit_count + guard` fractional digits with round-toward-zero division,
/// and stops once successive iterates agree to the threshold scale.
/// Convergence is quadratic, so the iteration count grows with the
/// logarithm of the working precision.
///
/// Solving is pure: the same configuration always yields a byte-identical
/// expansion.
pub struct RootSolver {
    /// Precision parameters, fixed for the lifetime of the solver
    config: SolverConfig,

    /// Event handler for processing lifecycle events
    event_handler: Arc<dyn EventHandler>,
}

impl RootSolver {
    /// Create a new solver
    pub fn new(config: SolverConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    /// Compute the expansion to the configured digit count.
    ///
    /// # Errors
    /// - `InvalidDigitCount` for a negative digit count, before any heavy
    ///   computation begins
    /// - `Numeric(PrecisionOverflow)` when the requested precision exceeds
    ///   the representable range; propagated unmodified, no retry
    pub fn solve(&self) -> Result<Expansion, SolveError> {
        let digit_count = u64::try_from(self.config.digit_count())
            .map_err(|_| SolveError::InvalidDigitCount(self.config.digit_count()))?;
        let working_scale = self.config.working_scale()?;
        let threshold_scale = self.config.threshold_scale()?;

        let mut events = vec![SolverEvent::SolveStarted {
            digit_count,
            working_scale,
            timestamp: Utc::now(),
        }];

        let two = BigFixed::from_integer(2, working_scale)?;
        // 10^-(threshold scale), expressed at the working scale so iterate
        // deltas compare against it directly
        let threshold = BigFixed::ulp(threshold_scale).with_scale_trunc(working_scale)?;

        let mut x = BigFixed::parse(self.config.initial_guess(), working_scale)?;
        let mut prev = BigFixed::zero(working_scale);
        let mut iterations = 0u32;

        while x.checked_sub(&prev)?.abs().checked_cmp(&threshold)? == Ordering::Greater {
            prev = x.clone();
            let quotient = two.div_to_scale(&x, working_scale)?;
            x = prev.checked_add(&quotient)?.half();
            iterations += 1;
            events.push(SolverEvent::IterationCompleted {
                iteration: iterations,
                timestamp: Utc::now(),
            });
        }

        events.push(SolverEvent::Converged {
            iterations,
            timestamp: Utc::now(),
        });
        tracing::debug!(digit_count, iterations, "newton iteration converged");

        // Round-toward-zero to exactly the requested digit count; the guard
        // digits are discarded without influencing the retained digits
        let value = x.with_scale_trunc(digit_count)?.to_string();

        self.event_handler.on_events(events);
        Ok(Expansion { digit_count, value })
    }
}

// ============================================================================
// Tests
// ============================================================================
