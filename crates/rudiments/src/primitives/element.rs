//! Scalar element types for square matrices.
//!
//! ## Purpose
//!
//! Matrix reductions sum an arbitrary number of caller-supplied values. The
//! [`Element`] trait gives every supported scalar a single "add or report
//! overflow" operation so reductions never wrap.
//!
//! ## Key concepts
//!
//! * **Integers**: Delegate to the primitive `checked_add`.
//! * **Floats**: Addition is reported as overflow once the sum is no longer finite.
//! * **Admissibility**: Floats must be finite to enter a matrix; integers always are.

// External dependencies
use core::fmt::{Debug, Display};
use num_traits::{One, Zero};

// ============================================================================
// Element Trait
// ============================================================================

/// Scalar type that can be stored in a [`SquareMatrix`](super::matrix::SquareMatrix)
/// and reduced with overflow detection.
pub trait Element: Copy + PartialEq + Debug + Display + Zero + One {
    /// Add `rhs`, returning `None` if the sum leaves the representable range.
    fn checked_accumulate(self, rhs: Self) -> Option<Self>;

    /// Whether the value may be stored in a matrix.
    #[inline]
    fn is_admissible(&self) -> bool {
        true
    }
}

macro_rules! integer_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline(always)]
                fn checked_accumulate(self, rhs: $t) -> Option<$t> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

integer_element!(u8, u16, u32, u64, u128, usize);
integer_element!(i8, i16, i32, i64, i128, isize);

macro_rules! float_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline(always)]
                fn checked_accumulate(self, rhs: $t) -> Option<$t> {
                    let sum = self + rhs;
                    if sum.is_finite() {
                        Some(sum)
                    } else {
                        None
                    }
                }

                #[inline]
                fn is_admissible(&self) -> bool {
                    self.is_finite()
                }
            }
        )*
    };
}

float_element!(f32, f64);
