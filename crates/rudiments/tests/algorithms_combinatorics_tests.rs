//! Tests for factorials, binomial coefficients and Pascal rows.
//!
//! These tests verify:
//! - Exact results for small inputs
//! - Domain errors for negative inputs and `r` outside `[0, n]`
//! - Overflow detection at the caller's integer width
//! - Agreement between the multiplicative and additive formulations
//!
//! ## Test Organization
//!
//! 1. **Factorial** - Values, domain, overflow
//! 2. **Binomial Coefficient** - Values, symmetry, domain, overflow
//! 3. **Pascal Rows** - Recurrence and agreement with the binomial

use rudiments::prelude::*;

// ============================================================================
// Factorial Tests
// ============================================================================

/// Test the base cases 0! and 1!.
#[test]
fn test_factorial_base_cases() {
    assert_eq!(factorial(0).unwrap(), 1);
    assert_eq!(factorial(1).unwrap(), 1);
}

/// Test small factorials.
#[test]
fn test_factorial_small_values() {
    let expected = [1, 1, 2, 6, 24, 120, 720, 5040, 40320];
    for (n, &want) in expected.iter().enumerate() {
        assert_eq!(factorial(n as i32).unwrap(), want, "{}!", n);
    }
}

/// Test that negative input is a domain error.
#[test]
fn test_factorial_negative_is_domain_error() {
    let err = factorial(-1).unwrap_err();

    assert_eq!(
        err,
        RudimentsError::NegativeInput {
            operation: "factorial",
            value: -1
        }
    );
    assert_eq!(err.kind(), ErrorKind::Domain);
}

/// Test the i32 overflow boundary.
///
/// 12! fits in i32, 13! does not.
#[test]
fn test_factorial_i32_boundary() {
    assert_eq!(factorial(12i32).unwrap(), 479_001_600);
    assert!(factorial(13i32).unwrap_err().is_overflow());
}

/// Test the 64-bit overflow boundary.
///
/// 20! fits in i64 and u64, 21! fits in neither.
#[test]
fn test_factorial_64_bit_boundary() {
    assert_eq!(factorial(20i64).unwrap(), 2_432_902_008_176_640_000);
    assert_eq!(factorial(20u64).unwrap(), 2_432_902_008_176_640_000);
    assert!(factorial(21i64).unwrap_err().is_overflow());
    assert!(factorial(21u64).unwrap_err().is_overflow());
}

/// Test the narrowest types.
#[test]
fn test_factorial_u8() {
    assert_eq!(factorial(5u8).unwrap(), 120);
    assert!(factorial(6u8).unwrap_err().is_overflow());
}

// ============================================================================
// Binomial Coefficient Tests
// ============================================================================

/// Test C(5, 2) = 10.
#[test]
fn test_binomial_five_choose_two() {
    assert_eq!(binomial_coefficient(5, 2).unwrap(), 10);
}

/// Test that C(n, 0) and C(n, n) are 1.
#[test]
fn test_binomial_edges_are_one() {
    for n in 0..=30i64 {
        assert_eq!(binomial_coefficient(n, 0).unwrap(), 1, "C({}, 0)", n);
        assert_eq!(binomial_coefficient(n, n).unwrap(), 1, "C({}, {})", n, n);
    }
}

/// Test the symmetry C(n, r) = C(n, n - r).
#[test]
fn test_binomial_symmetry() {
    for n in 0..=25i64 {
        for r in 0..=n {
            assert_eq!(
                binomial_coefficient(n, r).unwrap(),
                binomial_coefficient(n, n - r).unwrap()
            );
        }
    }
}

/// Test agreement with the factorial formula where factorials fit.
#[test]
fn test_binomial_matches_factorial_formula() {
    for n in 0..=20u64 {
        for r in 0..=n {
            let formula =
                factorial(n).unwrap() / (factorial(r).unwrap() * factorial(n - r).unwrap());
            assert_eq!(binomial_coefficient(n, r).unwrap(), formula, "C({}, {})", n, r);
        }
    }
}

/// Test that r > n is a domain error.
#[test]
fn test_binomial_r_greater_than_n() {
    let err = binomial_coefficient(3, 5).unwrap_err();

    assert_eq!(err, RudimentsError::InvalidSelection { n: 3, r: 5 });
    assert!(err.is_domain());
}

/// Test that negative r and negative n are domain errors.
#[test]
fn test_binomial_negative_inputs() {
    assert!(binomial_coefficient(5, -1).unwrap_err().is_domain());
    assert!(binomial_coefficient(-5, -6).unwrap_err().is_domain());
    assert!(binomial_coefficient(-1, 0).unwrap_err().is_domain());
}

/// Test that large coefficients do not overflow through their factorials.
///
/// 66! is far beyond u64, but C(66, 33) fits.
#[test]
fn test_binomial_avoids_intermediate_overflow() {
    assert_eq!(
        binomial_coefficient(66u64, 33).unwrap(),
        7_219_428_434_016_265_740
    );
    // 30! overflows i32, C(30, 15) does not.
    assert_eq!(binomial_coefficient(30i32, 15).unwrap(), 155_117_520);
}

/// Test that a coefficient that truly does not fit is reported as overflow.
#[test]
fn test_binomial_true_overflow() {
    assert!(binomial_coefficient(68u64, 34).unwrap_err().is_overflow());
    assert!(binomial_coefficient(34i32, 17).unwrap_err().is_overflow());
}

/// Test that repeated calls return identical results and errors.
#[test]
fn test_binomial_idempotent() {
    assert_eq!(binomial_coefficient(10, 3), binomial_coefficient(10, 3));
    assert_eq!(binomial_coefficient(1, 3), binomial_coefficient(1, 3));
}

// ============================================================================
// Pascal Row Tests
// ============================================================================

/// Test the first rows of Pascal's triangle.
#[test]
fn test_pascal_first_rows() {
    assert_eq!(pascal_row::<u32>(0).unwrap(), vec![1]);
    assert_eq!(pascal_row::<u32>(1).unwrap(), vec![1, 1]);
    assert_eq!(pascal_row::<u32>(4).unwrap(), vec![1, 4, 6, 4, 1]);
}

/// Test that Pascal rows agree with the multiplicative binomial.
#[test]
fn test_pascal_row_matches_binomial() {
    for n in 0..=40usize {
        let row = pascal_row::<u64>(n).unwrap();
        assert_eq!(row.len(), n + 1);
        for (r, &value) in row.iter().enumerate() {
            assert_eq!(value, binomial_coefficient(n as u64, r as u64).unwrap());
        }
    }
}

/// Test that a row wider than the type overflows.
#[test]
fn test_pascal_row_overflow() {
    // C(10, 5) = 252 still fits u8; C(11, 5) = 462 does not.
    assert!(pascal_row::<u8>(10).is_ok());
    assert!(pascal_row::<u8>(11).unwrap_err().is_overflow());
}
