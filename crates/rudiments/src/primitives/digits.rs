//! Explicit digit sequences produced by base conversion.
//!
//! A [`Digits`] value holds the digits of a non-negative integer in a given
//! radix, most-significant first. It is never packed back into a single
//! integer for display purposes; use [`Digits::value`] for the checked
//! numeric inverse and `Display` for the textual form.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult, Write};
use core::ops::Deref;
use num_traits::{cast, PrimInt};

// Internal dependencies
use crate::primitives::errors::RudimentsError;

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix (`0-9` followed by `a-z`).
pub const MAX_RADIX: u32 = 36;

/// Ordered digits of a non-negative integer, most-significant first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digits {
    radix: u32,
    digits: Vec<u8>,
}

impl Digits {
    // Wrap digits already in most-significant-first order. Callers guarantee
    // a non-empty sequence with every digit below `radix`.
    pub(crate) fn from_msb_first(radix: u32, digits: Vec<u8>) -> Self {
        debug_assert!((MIN_RADIX..=MAX_RADIX).contains(&radix));
        debug_assert!(!digits.is_empty());
        debug_assert!(digits.iter().all(|&d| u32::from(d) < radix));
        Self { radix, digits }
    }

    /// Radix the digits are expressed in.
    #[inline]
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Digits as a slice, most-significant first.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.digits
    }

    /// Consume into the underlying digit vector.
    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.digits
    }

    /// Evaluate the digits back into an integer of type `T`.
    ///
    /// Fails with [`RudimentsError::Overflow`] if the value does not fit `T`.
    pub fn value<T: PrimInt>(&self) -> Result<T, RudimentsError> {
        const OP: RudimentsError = RudimentsError::Overflow {
            operation: "digits value",
        };

        let radix = cast::<u32, T>(self.radix).ok_or(OP)?;
        self.digits.iter().try_fold(T::zero(), |acc, &d| {
            let digit = cast::<u8, T>(d).ok_or(OP)?;
            acc.checked_mul(&radix)
                .and_then(|v| v.checked_add(&digit))
                .ok_or(OP)
        })
    }
}

impl Deref for Digits {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        &self.digits
    }
}

impl AsRef<[u8]> for Digits {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.digits
    }
}

impl Display for Digits {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for &d in &self.digits {
            let c = char::from_digit(u32::from(d), self.radix).ok_or(core::fmt::Error)?;
            f.write_char(c)?;
        }
        Ok(())
    }
}
