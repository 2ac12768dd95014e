// ============================================================================
// Solver Configuration
// Precision parameters for the Newton iteration and the verifier
// ============================================================================

use crate::numeric::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of fractional digits when the caller does not choose one
pub const DEFAULT_DIGIT_COUNT: i64 = 10_000;

/// Default guard digits carried beyond the requested digit count.
/// Quadratic convergence keeps errors out of the retained digits, so a
/// fixed guard independent of the digit count suffices.
pub const DEFAULT_GUARD_DIGITS: u64 = 50;

/// Default margin for the convergence threshold: iteration stops once
/// successive iterates agree to `digit_count + margin` fractional digits.
pub const DEFAULT_THRESHOLD_MARGIN: u64 = 10;

/// Default starting value for the Newton iteration; any value in the basin
/// of convergence works.
pub const DEFAULT_INITIAL_GUESS: &str = "1.5";

/// Precision parameters for computing and verifying the √2 expansion.
///
/// The digit count is kept signed so that out-of-range requests can be
/// rejected through the error taxonomy instead of being unrepresentable.
/// Working precision is derived once per run (`digit_count + guard`) and
/// never changes mid-iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverConfig {
    /// Requested number of fractional digits (must be non-negative)
    digit_count: i64,

    /// Guard digits carried beyond the requested count during iteration
    guard_digits: u64,

    /// Extra digits of agreement required between successive iterates
    threshold_margin: u64,

    /// Starting value for the Newton iteration, as a plain decimal string
    initial_guess: String,
}

impl SolverConfig {
    /// Create a configuration with the default guard and threshold margin
    pub fn new(digit_count: i64) -> Self {
        Self {
            digit_count,
            guard_digits: DEFAULT_GUARD_DIGITS,
            threshold_margin: DEFAULT_THRESHOLD_MARGIN,
            initial_guess: DEFAULT_INITIAL_GUESS.to_string(),
        }
    }

    /// Builder method: Set the guard digit count
    pub fn with_guard_digits(mut self, guard_digits: u64) -> Self {
        self.guard_digits = guard_digits;
        self
    }

    /// Builder method: Set the convergence threshold margin
    pub fn with_threshold_margin(mut self, threshold_margin: u64) -> Self {
        self.threshold_margin = threshold_margin;
        self
    }

    /// Builder method: Set the Newton starting value
    pub fn with_initial_guess(mut self, initial_guess: impl Into<String>) -> Self {
        self.initial_guess = initial_guess.into();
        self
    }

    /// Requested number of fractional digits
    pub fn digit_count(&self) -> i64 {
        self.digit_count
    }

    /// Guard digits carried during iteration
    pub fn guard_digits(&self) -> u64 {
        self.guard_digits
    }

    /// Convergence threshold margin
    pub fn threshold_margin(&self) -> u64 {
        self.threshold_margin
    }

    /// Newton starting value
    pub fn initial_guess(&self) -> &str {
        &self.initial_guess
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.digit_count < 0 {
            return Err(format!(
                "Digit count cannot be negative (got {})",
                self.digit_count
            ));
        }

        if self.guard_digits == 0 {
            return Err("Guard digits must be at least 1".to_string());
        }

        if self.guard_digits < self.threshold_margin {
            return Err(format!(
                "Guard digits ({}) must cover the threshold margin ({})",
                self.guard_digits, self.threshold_margin
            ));
        }

        if self.initial_guess.trim().is_empty() {
            return Err("Initial guess cannot be empty".to_string());
        }

        Ok(())
    }

    /// Working scale for the iteration: `digit_count + guard` fractional
    /// digits.
    ///
    /// # Errors
    /// Returns `PrecisionOverflow` if the sum is not representable.
    pub fn working_scale(&self) -> NumericResult<u64> {
        let digit_count =
            u64::try_from(self.digit_count).map_err(|_| NumericError::InvalidInput)?;
        digit_count
            .checked_add(self.guard_digits)
            .ok_or(NumericError::PrecisionOverflow)
    }

    /// Scale of the convergence threshold: iteration stops once successive
    /// iterates differ by at most `10^-(digit_count + margin)`. Clamped to
    /// the working scale.
    ///
    /// # Errors
    /// Returns `PrecisionOverflow` if the sum is not representable.
    pub fn threshold_scale(&self) -> NumericResult<u64> {
        let digit_count =
            u64::try_from(self.digit_count).map_err(|_| NumericError::InvalidInput)?;
        let scale = digit_count
            .checked_add(self.threshold_margin)
            .ok_or(NumericError::PrecisionOverflow)?;
        Ok(scale.min(self.working_scale()?))
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DIGIT_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = SolverConfig::new(100);
        assert_eq!(config.digit_count(), 100);
        assert_eq!(config.guard_digits(), DEFAULT_GUARD_DIGITS);
        assert_eq!(config.initial_guess(), "1.5");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SolverConfig::new(20)
            .with_guard_digits(30)
            .with_threshold_margin(5)
            .with_initial_guess("1");

        assert_eq!(config.guard_digits(), 30);
        assert_eq!(config.threshold_margin(), 5);
        assert_eq!(config.initial_guess(), "1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_digit_count_rejected() {
        let config = SolverConfig::new(-1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_guard_rejected() {
        let config = SolverConfig::new(10).with_guard_digits(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_derived_scales() {
        let config = SolverConfig::new(100);
        assert_eq!(config.working_scale().unwrap(), 150);
        assert_eq!(config.threshold_scale().unwrap(), 110);

        // Threshold is clamped to the working scale
        let tight = SolverConfig::new(100)
            .with_guard_digits(5)
            .with_threshold_margin(5);
        assert_eq!(tight.working_scale().unwrap(), 105);
        assert_eq!(tight.threshold_scale().unwrap(), 105);
    }

    #[test]
    fn test_default_is_ten_thousand() {
        let config = SolverConfig::default();
        assert_eq!(config.digit_count(), 10_000);
        assert!(config.validate().is_ok());
    }
}
