//! Integer base conversion.
//!
//! Converts a non-negative integer into an explicit [`Digits`] sequence by
//! repeated division, collecting remainders least-significant first and
//! reversing at the end. Zero converts to the single digit `0`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::{cast, PrimInt};

// Internal dependencies
use crate::primitives::digits::Digits;
use crate::primitives::errors::RudimentsError;

/// Digits of `value` in `radix`, most-significant first.
///
/// Expects `value >= 0` and `2 <= radix <= 36`.
pub fn to_radix_digits<T: PrimInt>(value: T, radix: u32) -> Result<Digits, RudimentsError> {
    debug_assert!(value >= T::zero(), "to_radix_digits: negative value");

    let base = cast::<u32, T>(radix).ok_or(RudimentsError::InvalidRadix(radix))?;

    if value == T::zero() {
        return Ok(Digits::from_msb_first(radix, Vec::from([0u8])));
    }

    let mut digits = Vec::new();
    let mut n = value;
    while n > T::zero() {
        let rem = (n % base).to_u8().ok_or(RudimentsError::InvalidRadix(radix))?;
        digits.push(rem);
        n = n / base;
    }
    digits.reverse();

    Ok(Digits::from_msb_first(radix, digits))
}

/// Binary digits of `value`, most-significant first.
#[inline]
pub fn to_binary_digits<T: PrimInt>(value: T) -> Result<Digits, RudimentsError> {
    to_radix_digits(value, 2)
}
