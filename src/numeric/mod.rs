// ============================================================================
// Numeric Module
// Arbitrary-precision fixed-point arithmetic for the expansion engine
// ============================================================================
//
// This module provides:
// - BigFixed: fixed-point decimal with a runtime-chosen scale on BigInt units
// - NumericError: error types for arithmetic operations
//
// Design principles:
// - No floating-point operations
// - All fallible arithmetic returns Result (no panics)
// - Division always happens at an explicit target scale, round-toward-zero

mod big_fixed;
mod errors;

pub use big_fixed::BigFixed;
pub use errors::{NumericError, NumericResult};
