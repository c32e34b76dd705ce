//! Overflow-checked accumulation.
//!
//! Reductions fold caller data with [`Element::checked_accumulate`] and stop at
//! the first sum that leaves the representable range.

// Internal dependencies
use crate::primitives::element::Element;

// ============================================================================
// Accumulation
// ============================================================================

/// Sum an iterator of elements, failing on the first overflow.
#[inline]
pub fn checked_sum<T, I>(values: I) -> Option<T>
where
    T: Element,
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .try_fold(T::zero(), |acc, v| acc.checked_accumulate(v))
}
