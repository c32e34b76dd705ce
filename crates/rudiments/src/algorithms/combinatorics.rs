//! Factorials and binomial coefficients with overflow detection.
//!
//! ## Purpose
//!
//! This module computes `n!`, `C(n, r)` and rows of Pascal's triangle for any
//! primitive integer type, reporting [`RudimentsError::Overflow`] whenever the
//! true result does not fit that type.
//!
//! ## Design notes
//!
//! * **Checked**: Every multiplication and addition is checked.
//! * **Multiplicative binomial**: `C(n, r)` is accumulated over `min(r, n - r)`
//!   steps. Step `i` turns `C(n - k + i - 1, i - 1)` into `C(n - k + i, i)`
//!   (with `k = min(r, n - r)`), dividing out the common factor first so the
//!   division is exact and no intermediate exceeds the final result.
//! * **Pascal rows**: Built with the additive recurrence
//!   `C(n, r) = C(n - 1, r - 1) + C(n - 1, r)`.
//!
//! ## Invariants
//!
//! * Inputs are non-negative and `r <= n` (checked by the engine validator).
//!
//! ## Non-goals
//!
//! * This module does not provide arbitrary-precision results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::PrimInt;
use tracing::debug;

// Internal dependencies
use crate::math::gcd::gcd;
use crate::primitives::errors::RudimentsError;

// ============================================================================
// Factorial
// ============================================================================

/// `n!` for `n >= 0`.
pub fn factorial<T: PrimInt>(n: T) -> Result<T, RudimentsError> {
    debug_assert!(n >= T::zero(), "factorial: negative input");

    let mut acc = T::one();
    let mut i = T::one();
    while i < n {
        i = i + T::one();
        acc = acc.checked_mul(&i).ok_or_else(|| overflow("factorial"))?;
    }
    Ok(acc)
}

// ============================================================================
// Binomial Coefficient
// ============================================================================

/// `C(n, r) = n! / (r! (n - r)!)` for `0 <= r <= n`.
pub fn binomial_coefficient<T: PrimInt>(n: T, r: T) -> Result<T, RudimentsError> {
    debug_assert!(r >= T::zero() && r <= n, "binomial_coefficient: r outside [0, n]");

    let k = r.min(n - r);
    let offset = n - k;

    let mut acc = T::one();
    let mut i = T::zero();
    while i < k {
        i = i + T::one();
        // acc * (offset + i) is divisible by i; split i between acc and the factor.
        let g = gcd(acc, i);
        let factor = (offset + i) / (i / g);
        acc = (acc / g)
            .checked_mul(&factor)
            .ok_or_else(|| overflow("binomial coefficient"))?;
    }
    Ok(acc)
}

// ============================================================================
// Pascal's Triangle
// ============================================================================

/// Row `n` of Pascal's triangle, `[C(n, 0), ..., C(n, n)]`.
pub fn pascal_row<T: PrimInt>(n: usize) -> Result<Vec<T>, RudimentsError> {
    // Capacity grows with the row; overflow stops wide rows long before memory does.
    let mut row = Vec::new();
    row.push(T::one());

    for _ in 0..n {
        // Update right to left so row[j - 1] is still the previous row's value.
        row.push(T::one());
        for j in (1..row.len() - 1).rev() {
            row[j] = row[j]
                .checked_add(&row[j - 1])
                .ok_or_else(|| overflow("pascal row"))?;
        }
    }
    Ok(row)
}

fn overflow(operation: &'static str) -> RudimentsError {
    debug!(operation, "integer overflow");
    RudimentsError::Overflow { operation }
}
