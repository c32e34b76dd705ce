#![cfg(feature = "dev")]
//! Tests for checked accumulation and gcd.
//!
//! ## Test Organization
//!
//! 1. **Element** - Integer and float accumulation
//! 2. **Checked Sum** - Folding iterators
//! 3. **GCD** - Euclid's algorithm

use approx::assert_relative_eq;

use rudiments::internals::math::checked::checked_sum;
use rudiments::internals::math::gcd::gcd;
use rudiments::internals::primitives::element::Element;

// ============================================================================
// Element Tests
// ============================================================================

/// Test integer accumulation at the type boundary.
#[test]
fn test_integer_accumulate() {
    assert_eq!(100u8.checked_accumulate(155), Some(255));
    assert_eq!(100u8.checked_accumulate(156), None);
    assert_eq!(i32::MIN.checked_accumulate(-1), None);
    assert!(i64::MIN.is_admissible());
}

/// Test float accumulation and admissibility.
#[test]
fn test_float_accumulate() {
    assert_relative_eq!(0.1f64.checked_accumulate(0.2).unwrap(), 0.3, epsilon = 1e-12);
    assert_eq!(f32::MAX.checked_accumulate(f32::MAX), None);
    assert!(!f64::NAN.is_admissible());
    assert!(!f64::NEG_INFINITY.is_admissible());
    assert!(0.0f64.is_admissible());
}

// ============================================================================
// Checked Sum Tests
// ============================================================================

/// Test that an empty iterator sums to zero.
#[test]
fn test_checked_sum_empty() {
    assert_eq!(checked_sum(core::iter::empty::<i32>()), Some(0));
}

/// Test that a sum can recover after a large intermediate.
///
/// Overflow is detected on every step, so order matters.
#[test]
fn test_checked_sum_order() {
    assert_eq!(checked_sum([i8::MAX, -1, 1]), Some(i8::MAX));
    assert_eq!(checked_sum([i8::MAX, 1, -1]), None);
}

// ============================================================================
// GCD Tests
// ============================================================================

/// Test gcd on small values.
#[test]
fn test_gcd_values() {
    assert_eq!(gcd(12, 18), 6);
    assert_eq!(gcd(17u64, 5), 1);
    assert_eq!(gcd(0, 9), 9);
    assert_eq!(gcd(9, 0), 9);
    assert_eq!(gcd(0i32, 0), 0);
}
