// ============================================================================
// Verify Module
// Independent recomputation and comparison of persisted expansions
// ============================================================================

mod reference;
mod verifier;

pub use reference::reference_expansion;
pub use verifier::{VerificationOutcome, Verifier};
