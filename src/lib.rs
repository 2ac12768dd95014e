// ============================================================================
// √2 Expansion Engine Library
// Arbitrary-precision decimal expansion of √2 with independent verification
// ============================================================================

//! # sqrt2-engine
//!
//! Computes the decimal expansion of √2 to an arbitrary number of
//! fractional digits and independently verifies the result.
//!
//! ## Features
//!
//! - **Newton (Babylonian) iteration** at an explicit working precision
//!   with guard digits, on exact `BigInt`-backed fixed-point values
//! - **Round-toward-zero truncation** — output digits are deterministic
//!   regardless of what lies beyond the last retained digit
//! - **Independent verification** through a separate high-precision
//!   square-root primitive, reporting the first mismatching index with
//!   context
//! - **Event sourcing** of the solve/verify lifecycle for observability
//!
//! ## Example
//!
//! ```rust
//! use sqrt2_engine::prelude::*;
//! use std::sync::Arc;
//!
//! let config = SolverConfig::new(5);
//!
//! // Compute the expansion
//! let solver = RootSolver::new(config.clone(), Arc::new(NoOpEventHandler));
//! let expansion = solver.solve().unwrap();
//! assert_eq!(expansion.as_str(), "1.41421");
//!
//! // Verify it against an independently computed reference
//! let verifier = Verifier::new(config, Arc::new(NoOpEventHandler));
//! let outcome = verifier.verify(expansion.as_str()).unwrap();
//! assert!(outcome.is_verified());
//! ```

pub mod interfaces;
pub mod numeric;
pub mod solver;
pub mod verify;

// Re-exports for convenience
pub mod prelude {
    pub use crate::interfaces::{
        EventHandler, LoggingEventHandler, NoOpEventHandler, SolverEvent,
    };
    pub use crate::solver::{
        Expansion, RootSolver, SolveError, SolverConfig, DEFAULT_DIGIT_COUNT,
    };
    pub use crate::verify::{VerificationOutcome, Verifier};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_solve_and_verify() {
        let config = SolverConfig::new(1_000);

        let expansion = RootSolver::new(config.clone(), Arc::new(NoOpEventHandler))
            .solve()
            .unwrap();
        assert_eq!(expansion.as_str().len(), 1_002);
        assert!(expansion.as_str().starts_with("1.41421356237309504880"));

        let outcome = Verifier::new(config, Arc::new(NoOpEventHandler))
            .verify(expansion.as_str())
            .unwrap();
        assert!(outcome.is_verified());
    }

    #[test]
    fn test_persisted_corruption_is_localized() {
        let config = SolverConfig::new(64);
        let expansion = RootSolver::new(config.clone(), Arc::new(NoOpEventHandler))
            .solve()
            .unwrap();

        // Simulate a persisted file with one flipped digit
        let mut persisted = expansion.into_string().into_bytes();
        persisted[40] = if persisted[40] == b'0' { b'1' } else { b'0' };
        let persisted = String::from_utf8(persisted).unwrap();

        let outcome = Verifier::new(config, Arc::new(NoOpEventHandler))
            .verify(&persisted)
            .unwrap();
        match outcome {
            VerificationOutcome::Mismatch { index, .. } => assert_eq!(index, 40),
            VerificationOutcome::Verified => panic!("corruption went undetected"),
        }
    }

    #[test]
    fn test_ten_thousand_digit_expansion() {
        let config = SolverConfig::default();
        assert_eq!(config.digit_count(), DEFAULT_DIGIT_COUNT);

        let expansion = RootSolver::new(config.clone(), Arc::new(NoOpEventHandler))
            .solve()
            .unwrap();
        // "1." plus 10000 fractional digits
        assert_eq!(expansion.as_str().len(), 10_002);
        assert!(expansion
            .as_str()
            .starts_with("1.41421356237309504880168872420969807856967187537694"));

        let outcome = Verifier::new(config, Arc::new(NoOpEventHandler))
            .verify(expansion.as_str())
            .unwrap();
        assert!(outcome.is_verified());
    }

    #[test]
    fn test_invalid_input_fails_fast() {
        let config = SolverConfig::new(-42);
        assert!(config.validate().is_err());

        let err = RootSolver::new(config, Arc::new(NoOpEventHandler))
            .solve()
            .unwrap_err();
        assert_eq!(err, SolveError::InvalidDigitCount(-42));
    }
}
