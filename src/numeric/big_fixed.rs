// ============================================================================
// Arbitrary-Precision Fixed-Point Decimal
// Exact decimal arithmetic with an explicit, runtime-chosen scale
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::{BigInt, Sign};
use num_traits::{One, Pow, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;

/// Arbitrary-precision fixed-point decimal number.
///
/// Internally stores `value × 10^scale` as a `BigInt`, so every value is an
/// exact multiple of `10^-scale`. The scale is chosen at runtime and carried
/// with the value; operations that combine two values require matching
/// scales and report `ScaleMismatch` otherwise.
///
/// Division is performed at an explicit target scale with round-toward-zero
/// semantics: digits beyond the target scale are discarded, never rounded.
///
/// # Example
/// ```ignore
/// let two = BigFixed::from_integer(2, 20)?;
/// let three = BigFixed::from_integer(3, 20)?;
/// let q = two.div_to_scale(&three, 20)?; // 0.66666666666666666666
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigFixed {
    units: BigInt,
    scale: u64,
}

/// Compute 10^exp as a `BigInt`.
///
/// # Errors
/// Returns `PrecisionOverflow` when the exponent does not fit the range the
/// underlying power primitive accepts.
fn pow10(exp: u64) -> NumericResult<BigInt> {
    let exp = u32::try_from(exp).map_err(|_| NumericError::PrecisionOverflow)?;
    Ok(Pow::pow(BigInt::from(10u32), exp))
}

impl BigFixed {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from already-scaled units.
    ///
    /// Use this when you already hold `value × 10^scale` as an integer.
    pub fn from_units(units: BigInt, scale: u64) -> Self {
        Self { units, scale }
    }

    /// Zero at the given scale.
    pub fn zero(scale: u64) -> Self {
        Self {
            units: BigInt::zero(),
            scale,
        }
    }

    /// One unit in the last place at the given scale (`10^-scale`).
    pub fn ulp(scale: u64) -> Self {
        Self {
            units: BigInt::one(),
            scale,
        }
    }

    /// Create from an integer value at the given scale.
    ///
    /// # Errors
    /// Returns `PrecisionOverflow` if the scale is outside the representable
    /// exponent range.
    pub fn from_integer(value: i64, scale: u64) -> NumericResult<Self> {
        Ok(Self {
            units: BigInt::from(value) * pow10(scale)?,
            scale,
        })
    }

    /// Parse a plain decimal string (`"1.5"`, `"-0.001"`, `"42"`) at the
    /// given scale.
    ///
    /// # Errors
    /// - `InvalidInput` if the string is not a plain decimal number
    /// - `PrecisionLoss` if it carries more fractional digits than `scale`
    /// - `PrecisionOverflow` if the scale is outside the representable range
    pub fn parse(s: &str, scale: u64) -> NumericResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else {
            (false, s)
        };

        let (int_str, frac_str) = if let Some(pos) = s.find('.') {
            (&s[..pos], &s[pos + 1..])
        } else {
            (s, "")
        };
        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        if !int_str.bytes().all(|b| b.is_ascii_digit())
            || !frac_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(NumericError::InvalidInput);
        }
        if frac_str.len() as u64 > scale {
            return Err(NumericError::PrecisionLoss);
        }

        let int_val: BigInt = if int_str.is_empty() {
            BigInt::zero()
        } else {
            int_str.parse().map_err(|_| NumericError::InvalidInput)?
        };
        let frac_val: BigInt = if frac_str.is_empty() {
            BigInt::zero()
        } else {
            frac_str.parse().map_err(|_| NumericError::InvalidInput)?
        };

        // frac_str holds its leading digits; shift it out to the full scale
        let frac_shift = pow10(scale - frac_str.len() as u64)?;
        let mut units = int_val * pow10(scale)? + frac_val * frac_shift;
        if is_negative {
            units = -units;
        }
        Ok(Self { units, scale })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The scale (number of fractional digits) this value is held at.
    pub fn scale(&self) -> u64 {
        self.scale
    }

    /// The raw scaled units (`value × 10^scale`).
    pub fn units(&self) -> &BigInt {
        &self.units
    }

    /// Check if value is zero.
    pub fn is_zero(&self) -> bool {
        self.units.is_zero()
    }

    /// Check if value is positive.
    pub fn is_positive(&self) -> bool {
        self.units.sign() == Sign::Plus
    }

    /// Check if value is negative.
    pub fn is_negative(&self) -> bool {
        self.units.sign() == Sign::Minus
    }

    /// Absolute value at the same scale.
    pub fn abs(&self) -> Self {
        Self {
            units: self.units.abs(),
            scale: self.scale,
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `ScaleMismatch` if the operands are held at different scales.
    pub fn checked_add(&self, rhs: &Self) -> NumericResult<Self> {
        if self.scale != rhs.scale {
            return Err(NumericError::ScaleMismatch);
        }
        Ok(Self {
            units: &self.units + &rhs.units,
            scale: self.scale,
        })
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `ScaleMismatch` if the operands are held at different scales.
    pub fn checked_sub(&self, rhs: &Self) -> NumericResult<Self> {
        if self.scale != rhs.scale {
            return Err(NumericError::ScaleMismatch);
        }
        Ok(Self {
            units: &self.units - &rhs.units,
            scale: self.scale,
        })
    }

    /// Exact multiplication. The result carries the sum of the operand
    /// scales, so no digits are lost.
    ///
    /// # Errors
    /// Returns `PrecisionOverflow` if the combined scale is not representable.
    pub fn checked_mul(&self, rhs: &Self) -> NumericResult<Self> {
        let scale = self
            .scale
            .checked_add(rhs.scale)
            .ok_or(NumericError::PrecisionOverflow)?;
        Ok(Self {
            units: &self.units * &rhs.units,
            scale,
        })
    }

    /// Division at an explicit target scale with round-toward-zero.
    ///
    /// The quotient is `trunc(self / rhs × 10^target_scale) × 10^-target_scale`;
    /// digits beyond the target scale are discarded.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `ScaleMismatch` if the operands are held at different scales
    /// - `PrecisionOverflow` if the target scale is not representable
    pub fn div_to_scale(&self, rhs: &Self, target_scale: u64) -> NumericResult<Self> {
        if rhs.units.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        if self.scale != rhs.scale {
            return Err(NumericError::ScaleMismatch);
        }
        // (a×10^-s) / (b×10^-s) = a/b; BigInt division truncates toward zero
        let units = &self.units * pow10(target_scale)? / &rhs.units;
        Ok(Self {
            units,
            scale: target_scale,
        })
    }

    /// Halve the value at the same scale, truncating toward zero.
    pub fn half(&self) -> Self {
        Self {
            units: &self.units / BigInt::from(2u32),
            scale: self.scale,
        }
    }

    /// Re-scale the value, truncating toward zero when the new scale drops
    /// fractional digits (the preceding digit is never adjusted).
    ///
    /// # Errors
    /// Returns `PrecisionOverflow` if the scale change is not representable.
    pub fn with_scale_trunc(&self, new_scale: u64) -> NumericResult<Self> {
        let units = if new_scale >= self.scale {
            &self.units * pow10(new_scale - self.scale)?
        } else {
            &self.units / pow10(self.scale - new_scale)?
        };
        Ok(Self {
            units,
            scale: new_scale,
        })
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare two values held at the same scale.
    ///
    /// # Errors
    /// Returns `ScaleMismatch` if the operands are held at different scales.
    pub fn checked_cmp(&self, other: &Self) -> NumericResult<Ordering> {
        if self.scale != other.scale {
            return Err(NumericError::ScaleMismatch);
        }
        Ok(self.units.cmp(&other.units))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for BigFixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigFixed({}, scale={})", self, self.scale)
    }
}

impl fmt::Display for BigFixed {
    /// Plain fixed-point notation with exactly `scale` fractional digits,
    /// zero-padded; at scale 0 the bare integer is printed with no decimal
    /// point.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.units.sign() == Sign::Minus {
            "-"
        } else {
            ""
        };
        let digits = self.units.magnitude().to_string();
        if self.scale == 0 {
            return write!(f, "{}{}", sign, digits);
        }
        let scale = self.scale as usize;
        // Pad so there is at least one integer digit to the left of the point
        let padded = if digits.len() <= scale {
            let mut s = "0".repeat(scale - digits.len() + 1);
            s.push_str(&digits);
            s
        } else {
            digits
        };
        let split = padded.len() - scale;
        write!(f, "{}{}.{}", sign, &padded[..split], &padded[split..])
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_integer() {
        let x = BigFixed::from_integer(2, 5).unwrap();
        assert_eq!(x.units(), &BigInt::from(200_000));
        assert_eq!(x.scale(), 5);
        assert_eq!(x.to_string(), "2.00000");
    }

    #[test]
    fn test_parse() {
        let x = BigFixed::parse("1.5", 4).unwrap();
        assert_eq!(x.units(), &BigInt::from(15_000));
        assert_eq!(x.to_string(), "1.5000");

        let y = BigFixed::parse("-0.001", 4).unwrap();
        assert!(y.is_negative());
        assert_eq!(y.to_string(), "-0.0010");

        let z = BigFixed::parse("42", 2).unwrap();
        assert_eq!(z.to_string(), "42.00");
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            BigFixed::parse("not_a_number", 4),
            Err(NumericError::InvalidInput)
        );
        assert_eq!(BigFixed::parse("", 4), Err(NumericError::InvalidInput));
        assert_eq!(BigFixed::parse(".", 4), Err(NumericError::InvalidInput));
        assert_eq!(BigFixed::parse("1.-5", 4), Err(NumericError::InvalidInput));

        // More fractional digits than the scale can hold
        assert_eq!(
            BigFixed::parse("1.12345", 4),
            Err(NumericError::PrecisionLoss)
        );
    }

    #[test]
    fn test_checked_add_sub() {
        let a = BigFixed::from_integer(3, 6).unwrap();
        let b = BigFixed::parse("1.25", 6).unwrap();
        assert_eq!(a.checked_add(&b).unwrap().to_string(), "4.250000");
        assert_eq!(a.checked_sub(&b).unwrap().to_string(), "1.750000");

        // Negative result
        assert_eq!(b.checked_sub(&a).unwrap().to_string(), "-1.750000");
    }

    #[test]
    fn test_scale_mismatch() {
        let a = BigFixed::from_integer(1, 3).unwrap();
        let b = BigFixed::from_integer(1, 4).unwrap();
        assert_eq!(a.checked_add(&b), Err(NumericError::ScaleMismatch));
        assert_eq!(a.checked_sub(&b), Err(NumericError::ScaleMismatch));
        assert_eq!(a.checked_cmp(&b), Err(NumericError::ScaleMismatch));
        assert_eq!(a.div_to_scale(&b, 3), Err(NumericError::ScaleMismatch));
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        let two = BigFixed::from_integer(2, 5).unwrap();
        let three = BigFixed::from_integer(3, 5).unwrap();
        // 2/3 = 0.66666... -> truncated, not rounded to 0.66667
        let q = two.div_to_scale(&three, 5).unwrap();
        assert_eq!(q.to_string(), "0.66666");
    }

    #[test]
    fn test_division_by_zero() {
        let one = BigFixed::from_integer(1, 3).unwrap();
        let zero = BigFixed::zero(3);
        assert_eq!(one.div_to_scale(&zero, 3), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_half_truncates() {
        let x = BigFixed::from_units(BigInt::from(7), 2); // 0.07
        assert_eq!(x.half().to_string(), "0.03");
    }

    #[test]
    fn test_checked_mul_exact() {
        let a = BigFixed::parse("1.5", 2).unwrap();
        let b = BigFixed::parse("1.5", 3).unwrap();
        let p = a.checked_mul(&b).unwrap();
        assert_eq!(p.scale(), 5);
        assert_eq!(p.to_string(), "2.25000");
    }

    #[test]
    fn test_with_scale_trunc() {
        let x = BigFixed::parse("1.41421", 5).unwrap();
        assert_eq!(x.with_scale_trunc(2).unwrap().to_string(), "1.41");
        assert_eq!(x.with_scale_trunc(0).unwrap().to_string(), "1");
        assert_eq!(x.with_scale_trunc(8).unwrap().to_string(), "1.41421000");

        // Truncation toward zero for negatives: -1.9 -> -1, not -2
        let y = BigFixed::parse("-1.9", 1).unwrap();
        assert_eq!(y.with_scale_trunc(0).unwrap().to_string(), "-1");
    }

    #[test]
    fn test_checked_cmp() {
        let a = BigFixed::parse("1.41", 2).unwrap();
        let b = BigFixed::parse("1.42", 2).unwrap();
        assert_eq!(a.checked_cmp(&b).unwrap(), Ordering::Less);
        assert_eq!(b.checked_cmp(&a).unwrap(), Ordering::Greater);
        assert_eq!(a.checked_cmp(&a).unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_display_padding() {
        let x = BigFixed::from_units(BigInt::from(5), 4);
        assert_eq!(x.to_string(), "0.0005");

        let y = BigFixed::from_units(BigInt::from(-5), 4);
        assert_eq!(y.to_string(), "-0.0005");

        let z = BigFixed::from_units(BigInt::from(12345), 0);
        assert_eq!(z.to_string(), "12345");
    }

    #[test]
    fn test_ulp_and_zero() {
        let u = BigFixed::ulp(6);
        assert_eq!(u.to_string(), "0.000001");
        assert!(BigFixed::zero(6).is_zero());
        assert!(!u.is_zero());
        assert!(u.is_positive());
    }

    #[test]
    fn test_excessive_scale_rejected() {
        let huge = u64::from(u32::MAX) + 1;
        assert_eq!(
            BigFixed::from_integer(1, huge),
            Err(NumericError::PrecisionOverflow)
        );
    }
}
