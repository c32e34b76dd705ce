//! High-level API for rudiments.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder that
//! produces a configured [`Toolkit`], and free functions that run with the
//! default configuration.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Free functions cover the common case; the builder is only
//!   needed to change the matrix dimension bound.
//! * **Validated**: Builder parameters are validated by `.build()`; operation
//!   inputs are validated before any algorithm runs.
//! * **Type-Safe**: Generic over the matrix [`Element`] and over `PrimInt`
//!   for integer operations, so overflow is detected at the caller's width.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RudimentsBuilder`] via `Rudiments::new()`.
//! 2. Chain configuration methods (`.max_dimension()`).
//! 3. Call `.build()` to obtain a [`Toolkit`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::PrimInt;
use tracing::trace;

// Internal dependencies
use crate::algorithms::{combinatorics, radix, reduction, symmetry};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::output::MatrixSummary;
pub use crate::primitives::digits::Digits;
pub use crate::primitives::element::Element;
pub use crate::primitives::errors::{ErrorKind, RudimentsError};
pub use crate::primitives::matrix::{SquareMatrix, DEFAULT_MAX_DIMENSION};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for a configured [`Toolkit`].
#[derive(Debug, Clone, Default)]
pub struct RudimentsBuilder {
    /// Largest accepted matrix dimension (default: [`DEFAULT_MAX_DIMENSION`]).
    pub max_dimension: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl RudimentsBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the largest accepted matrix dimension.
    pub fn max_dimension(mut self, max: usize) -> Self {
        if self.max_dimension.is_some() {
            self.duplicate_param = Some("max_dimension");
        }
        self.max_dimension = Some(max);
        self
    }

    /// Validate the configuration and build a [`Toolkit`].
    pub fn build(self) -> Result<Toolkit, RudimentsError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let max_dimension = self.max_dimension.unwrap_or(DEFAULT_MAX_DIMENSION);
        Validator::validate_max_dimension(max_dimension)?;

        trace!(max_dimension, "built toolkit");
        Ok(Toolkit { max_dimension })
    }
}

// ============================================================================
// Toolkit
// ============================================================================

/// Matrix operations bound to a configured maximum dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toolkit {
    max_dimension: usize,
}

impl Default for Toolkit {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

impl Toolkit {
    /// Largest accepted matrix dimension.
    #[inline]
    pub fn max_dimension(&self) -> usize {
        self.max_dimension
    }

    /// Build a matrix of dimension `n` from `n * n` row-major values.
    pub fn matrix<T: Element>(
        &self,
        dimension: usize,
        values: Vec<T>,
    ) -> Result<SquareMatrix<T>, RudimentsError> {
        Validator::validate_dimension(dimension, self.max_dimension)?;
        SquareMatrix::with_max_dimension(dimension, self.max_dimension, values)
    }

    /// The `n x n` identity matrix.
    pub fn identity<T: Element>(&self, dimension: usize) -> Result<SquareMatrix<T>, RudimentsError> {
        Validator::validate_dimension(dimension, self.max_dimension)?;
        SquareMatrix::identity_with_max_dimension(dimension, self.max_dimension)
    }

    /// Sum of the main diagonal.
    pub fn diagonal_sum<T: Element>(&self, matrix: &SquareMatrix<T>) -> Result<T, RudimentsError> {
        Validator::validate_matrix(matrix, self.max_dimension)?;
        reduction::diagonal_sum(matrix)
    }

    /// Sum of the elements above the main diagonal.
    pub fn upper_triangular_sum<T: Element>(
        &self,
        matrix: &SquareMatrix<T>,
    ) -> Result<T, RudimentsError> {
        Validator::validate_matrix(matrix, self.max_dimension)?;
        reduction::upper_triangular_sum(matrix)
    }

    /// Sum of the elements below the main diagonal.
    pub fn lower_triangular_sum<T: Element>(
        &self,
        matrix: &SquareMatrix<T>,
    ) -> Result<T, RudimentsError> {
        Validator::validate_matrix(matrix, self.max_dimension)?;
        reduction::lower_triangular_sum(matrix)
    }

    /// Sum of every element.
    pub fn total_sum<T: Element>(&self, matrix: &SquareMatrix<T>) -> Result<T, RudimentsError> {
        Validator::validate_matrix(matrix, self.max_dimension)?;
        reduction::total_sum(matrix)
    }

    /// Every region sum at once.
    pub fn summarize<T: Element>(
        &self,
        matrix: &SquareMatrix<T>,
    ) -> Result<MatrixSummary<T>, RudimentsError> {
        Validator::validate_matrix(matrix, self.max_dimension)?;
        MatrixSummary::compute(matrix)
    }
}

// ============================================================================
// Matrix Functions
// ============================================================================

/// Sum of `matrix[i][i]`, with the default dimension bound.
///
/// Fails with [`RudimentsError::InvalidDimension`] if the matrix is larger
/// than [`DEFAULT_MAX_DIMENSION`] and with [`RudimentsError::Overflow`] if
/// the sum does not fit `T`.
pub fn diagonal_sum<T: Element>(matrix: &SquareMatrix<T>) -> Result<T, RudimentsError> {
    Toolkit::default().diagonal_sum(matrix)
}

/// Sum of `matrix[i][j]` for `j > i`, with the default dimension bound.
pub fn upper_triangular_sum<T: Element>(matrix: &SquareMatrix<T>) -> Result<T, RudimentsError> {
    Toolkit::default().upper_triangular_sum(matrix)
}

/// Sum of `matrix[i][j]` for `j < i`, with the default dimension bound.
pub fn lower_triangular_sum<T: Element>(matrix: &SquareMatrix<T>) -> Result<T, RudimentsError> {
    Toolkit::default().lower_triangular_sum(matrix)
}

/// Sum of every element, with the default dimension bound.
pub fn total_sum<T: Element>(matrix: &SquareMatrix<T>) -> Result<T, RudimentsError> {
    Toolkit::default().total_sum(matrix)
}

/// Diagonal, triangular and total sums, with the default dimension bound.
pub fn summarize<T: Element>(matrix: &SquareMatrix<T>) -> Result<MatrixSummary<T>, RudimentsError> {
    Toolkit::default().summarize(matrix)
}

// ============================================================================
// Base Conversion
// ============================================================================

/// Binary digits of `value`, most-significant first.
///
/// `0` yields `[0]`; negative values fail with a domain error.
pub fn to_binary_digits<T: PrimInt>(value: T) -> Result<Digits, RudimentsError> {
    Validator::validate_non_negative(value, "base conversion")?;
    radix::to_binary_digits(value)
}

/// Digits of `value` in `radix` (`2..=36`), most-significant first.
pub fn to_radix_digits<T: PrimInt>(value: T, radix: u32) -> Result<Digits, RudimentsError> {
    Validator::validate_radix(radix)?;
    Validator::validate_non_negative(value, "base conversion")?;
    radix::to_radix_digits(value, radix)
}

// ============================================================================
// Combinatorics
// ============================================================================

/// `n!`, computed in `T`.
///
/// Negative `n` fails with a domain error; a result wider than `T` fails with
/// [`RudimentsError::Overflow`] (for example `13!` in `i32`).
pub fn factorial<T: PrimInt>(n: T) -> Result<T, RudimentsError> {
    Validator::validate_non_negative(n, "factorial")?;
    combinatorics::factorial(n)
}

/// `C(n, r) = n! / (r! (n - r)!)`, computed in `T` without forming the factorials.
///
/// Requires `0 <= r <= n`. Overflow is reported only when the coefficient
/// itself does not fit `T`.
pub fn binomial_coefficient<T: PrimInt>(n: T, r: T) -> Result<T, RudimentsError> {
    Validator::validate_selection(n, r)?;
    combinatorics::binomial_coefficient(n, r)
}

/// Row `n` of Pascal's triangle, computed in `T`.
pub fn pascal_row<T: PrimInt>(n: usize) -> Result<Vec<T>, RudimentsError> {
    combinatorics::pascal_row(n)
}

// ============================================================================
// Symmetry
// ============================================================================

/// Whether `seq` reads the same forwards and backwards (exact element equality).
#[inline]
pub fn is_palindrome<T: PartialEq>(seq: &[T]) -> bool {
    symmetry::is_palindrome(seq)
}

/// Whether `s` reads the same forwards and backwards.
///
/// Case-sensitive and whitespace-sensitive: `"Aa"` and `"a a "` are not palindromes.
#[inline]
pub fn is_palindrome_str(s: &str) -> bool {
    symmetry::is_palindrome_str(s)
}

/// First mismatching index pair of the inward two-pointer scan.
#[inline]
pub fn first_mismatch<T: PartialEq>(seq: &[T]) -> Option<(usize, usize)> {
    symmetry::first_mismatch(seq)
}
