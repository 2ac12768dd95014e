// ============================================================================
// Event Handler Interface
// Defines the contract for observing solver and verifier lifecycle events
// ============================================================================

use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the root solver and the verifier
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolverEvent {
    /// Newton iteration started
    SolveStarted {
        digit_count: u64,
        working_scale: u64,
        timestamp: DateTime<Utc>,
    },

    /// One Newton step completed
    IterationCompleted {
        iteration: u32,
        timestamp: DateTime<Utc>,
    },

    /// Convergence threshold reached
    Converged {
        iterations: u32,
        timestamp: DateTime<Utc>,
    },

    /// Independent verification started
    VerificationStarted {
        digit_count: u64,
        timestamp: DateTime<Utc>,
    },

    /// Verification finished; on mismatch the first differing index is carried
    VerificationCompleted {
        verified: bool,
        mismatch_index: Option<usize>,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing solver events
/// Implementations can handle logging, metrics, notifications, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a solver event
    fn on_event(&self, event: SolverEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<SolverEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: SolverEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: SolverEvent) {
        tracing::debug!("Expansion engine event: {:?}", event);
    }
}
