// ============================================================================
// Reference Expansion
// Independent recomputation of √2 through bigdecimal's square root
// ============================================================================
//
// Deliberately decoupled from the Newton solver: a different primitive, a
// separate precision parameterization, and its own formatting path, so a
// systematic bug in guard sizing or truncation on the solve side cannot
// also produce the reference.

use crate::numeric::NumericError;
use crate::solver::SolveError;
use bigdecimal::rounding::RoundingMode;
use bigdecimal::{BigDecimal, Context};
use num_bigint::{BigInt, Sign};
use std::num::NonZeroU64;

/// Compute the reference expansion of √2 to `digit_count` fractional
/// digits, truncated (round-toward-zero) like the solver output.
///
/// # Errors
/// - `Numeric(PrecisionOverflow)` when the requested precision is not
///   representable
/// - `ReferenceUnavailable` if the square-root primitive yields no value
pub fn reference_expansion(digit_count: u64, guard_digits: u64) -> Result<String, SolveError> {
    // One integer digit plus the fractional digits plus the guard
    let precision = digit_count
        .checked_add(guard_digits)
        .and_then(|p| p.checked_add(1))
        .and_then(NonZeroU64::new)
        .ok_or(SolveError::Numeric(NumericError::PrecisionOverflow))?;
    let scale = i64::try_from(digit_count)
        .map_err(|_| SolveError::Numeric(NumericError::PrecisionOverflow))?;

    let ctx = Context::new(precision, RoundingMode::Down);
    let root = BigDecimal::from(2u32)
        .sqrt_with_context(&ctx)
        .ok_or(SolveError::ReferenceUnavailable)?;

    let truncated = root.with_scale_round(scale, RoundingMode::Down);
    let (units, exponent) = truncated.into_bigint_and_exponent();
    Ok(format_expansion(&units, exponent))
}

/// Render `units × 10^-exponent` as a plain fixed-point string with exactly
/// `exponent` fractional digits (bare integer when the exponent is zero).
fn format_expansion(units: &BigInt, exponent: i64) -> String {
    let sign = if units.sign() == Sign::Minus { "-" } else { "" };
    let digits = units.magnitude().to_string();
    if exponent <= 0 {
        // with_scale_round pins the exponent to the requested scale, so a
        // non-positive exponent only occurs for a zero digit count
        return format!("{}{}", sign, digits);
    }
    let scale = exponent as usize;
    let padded = if digits.len() <= scale {
        format!("{}{}", "0".repeat(scale - digits.len() + 1), digits)
    } else {
        digits
    };
    let split = padded.len() - scale;
    format!("{}{}.{}", sign, &padded[..split], &padded[split..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::DEFAULT_GUARD_DIGITS;

    #[test]
    fn test_reference_known_digits() {
        let reference = reference_expansion(50, DEFAULT_GUARD_DIGITS).unwrap();
        assert_eq!(
            reference,
            "1.41421356237309504880168872420969807856967187537694"
        );
    }

    #[test]
    fn test_reference_truncates() {
        // 1.414213|5... must not round up to 1.414214
        assert_eq!(
            reference_expansion(6, DEFAULT_GUARD_DIGITS).unwrap(),
            "1.414213"
        );
    }

    #[test]
    fn test_reference_zero_digits() {
        assert_eq!(reference_expansion(0, DEFAULT_GUARD_DIGITS).unwrap(), "1");
    }

    #[test]
    fn test_format_expansion_padding() {
        assert_eq!(format_expansion(&BigInt::from(7), 3), "0.007");
        assert_eq!(format_expansion(&BigInt::from(-7), 3), "-0.007");
        assert_eq!(format_expansion(&BigInt::from(1414), 3), "1.414");
        assert_eq!(format_expansion(&BigInt::from(2), 0), "2");
    }
}
