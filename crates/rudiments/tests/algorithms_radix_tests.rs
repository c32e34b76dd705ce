//! Tests for integer base conversion.
//!
//! These tests verify:
//! - Binary digit sequences, most-significant first
//! - The single-digit representation of zero
//! - Domain errors for negative values and unsupported radices
//! - The checked inverse `Digits::value`
//!
//! ## Test Organization
//!
//! 1. **Binary** - `to_binary_digits`
//! 2. **Other Radices** - `to_radix_digits`
//! 3. **Inverse** - `Digits::value` and display

use rudiments::prelude::*;

// ============================================================================
// Binary Conversion Tests
// ============================================================================

/// Test that 11 converts to 1011.
#[test]
fn test_binary_eleven() {
    let d = to_binary_digits(11).unwrap();

    assert_eq!(d.as_slice(), &[1, 0, 1, 1]);
    assert_eq!(d.radix(), 2);
}

/// Test that 0 converts to a single zero digit.
#[test]
fn test_binary_zero() {
    assert_eq!(to_binary_digits(0).unwrap().as_slice(), &[0]);
}

/// Test powers of two.
#[test]
fn test_binary_powers_of_two() {
    for k in 0..16u32 {
        let d = to_binary_digits(1u32 << k).unwrap();
        assert_eq!(d.len(), k as usize + 1);
        assert_eq!(d[0], 1);
        assert!(d[1..].iter().all(|&b| b == 0));
    }
}

/// Test values whose decimal packing would overflow a 32-bit integer.
///
/// 1024 packed as decimal digits would be 10000000000, which exceeds i32.
#[test]
fn test_binary_large_values() {
    let d = to_binary_digits(1024i32).unwrap();
    assert_eq!(d.len(), 11);

    let d = to_binary_digits(u64::MAX).unwrap();
    assert_eq!(d.len(), 64);
    assert!(d.iter().all(|&b| b == 1));
}

/// Test that negative values are a domain error.
#[test]
fn test_binary_negative() {
    let err = to_binary_digits(-3i64).unwrap_err();

    assert_eq!(
        err,
        RudimentsError::NegativeInput {
            operation: "base conversion",
            value: -3
        }
    );
}

/// Test that i32::MIN is rejected rather than negated.
#[test]
fn test_binary_min_value() {
    assert!(to_binary_digits(i32::MIN).unwrap_err().is_domain());
}

// ============================================================================
// Other Radix Tests
// ============================================================================

/// Test decimal and hexadecimal conversion.
#[test]
fn test_radix_ten_and_sixteen() {
    assert_eq!(to_radix_digits(9051, 10).unwrap().as_slice(), &[9, 0, 5, 1]);
    assert_eq!(to_radix_digits(255u8, 16).unwrap().as_slice(), &[15, 15]);
}

/// Test the widest radix.
#[test]
fn test_radix_thirty_six() {
    let d = to_radix_digits(35i8, 36).unwrap();
    assert_eq!(d.as_slice(), &[35]);
    assert_eq!(d.to_string(), "z");
}

/// Test that unsupported radices are rejected.
#[test]
fn test_invalid_radix() {
    assert_eq!(
        to_radix_digits(10, 1),
        Err(RudimentsError::InvalidRadix(1))
    );
    assert_eq!(
        to_radix_digits(10, 37),
        Err(RudimentsError::InvalidRadix(37))
    );
    assert!(to_radix_digits(10, 0).unwrap_err().is_domain());
}

// ============================================================================
// Inverse and Display Tests
// ============================================================================

/// Test that `value` inverts the conversion.
#[test]
fn test_value_round_trip() {
    for &(n, radix) in &[(0u64, 2), (11, 2), (9051, 10), (48879, 16), (1_000_000, 36)] {
        let d = to_radix_digits(n, radix).unwrap();
        assert_eq!(d.value::<u64>().unwrap(), n, "{} in radix {}", n, radix);
    }
}

/// Test that `value` reports overflow for a narrower target type.
#[test]
fn test_value_overflow() {
    let d = to_binary_digits(300u32).unwrap();

    assert_eq!(d.value::<u16>().unwrap(), 300);
    assert!(d.value::<u8>().unwrap_err().is_overflow());
}

/// Test textual rendering of digits.
#[test]
fn test_digits_display() {
    assert_eq!(to_binary_digits(11).unwrap().to_string(), "1011");
    assert_eq!(to_radix_digits(48879, 16).unwrap().to_string(), "beef");
}

/// Test that conversion is idempotent.
#[test]
fn test_conversion_idempotent() {
    assert_eq!(to_binary_digits(37), to_binary_digits(37));
    assert_eq!(to_binary_digits(-1), to_binary_digits(-1));
}
