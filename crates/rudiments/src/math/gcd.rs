//! Greatest common divisor for primitive integers.

// External dependencies
use num_traits::PrimInt;

/// Euclid's algorithm on non-negative operands.
///
/// `gcd(0, 0)` is `0`; otherwise the result is positive. Callers must not
/// pass negative values.
#[inline]
pub fn gcd<T: PrimInt>(mut a: T, mut b: T) -> T {
    debug_assert!(a >= T::zero() && b >= T::zero(), "gcd: negative operand");

    while b != T::zero() {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
