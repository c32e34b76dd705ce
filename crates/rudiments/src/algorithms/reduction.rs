//! Square matrix reductions.
//!
//! ## Purpose
//!
//! This module sums selected regions of a [`SquareMatrix`]: the main
//! diagonal, the strictly upper triangle, the strictly lower triangle, and
//! the whole matrix.
//!
//! ## Design notes
//!
//! * **Region-based**: Every reduction is a [`Region`] plus one shared summation loop.
//! * **Checked**: Accumulation goes through [`checked_sum`]; overflow is an error, never a wrap.
//! * **Read-only**: The matrix is borrowed immutably.
//!
//! ## Key concepts
//!
//! For cell `(i, j)`:
//! * **Diagonal**: `j == i`
//! * **Upper**: `j > i`
//! * **Lower**: `j < i`
//!
//! The three regions partition the matrix, so their sums add up to the total.
//!
//! ## Non-goals
//!
//! * This module does not validate the matrix dimension against a configured
//!   bound (see the engine validator).

// External dependencies
use tracing::debug;

// Internal dependencies
use crate::math::checked::checked_sum;
use crate::primitives::element::Element;
use crate::primitives::errors::RudimentsError;
use crate::primitives::matrix::SquareMatrix;

// ============================================================================
// Region
// ============================================================================

/// A region of a square matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Cells with `j == i`.
    Diagonal,

    /// Cells with `j > i`.
    Upper,

    /// Cells with `j < i`.
    Lower,

    /// Every cell.
    All,
}

impl Region {
    /// Name used in error and log messages.
    pub fn name(self) -> &'static str {
        match self {
            Region::Diagonal => "diagonal sum",
            Region::Upper => "upper triangular sum",
            Region::Lower => "lower triangular sum",
            Region::All => "total sum",
        }
    }
}

// ============================================================================
// Reductions
// ============================================================================

/// Sum every cell of `matrix` that lies in `region`.
pub fn region_sum<T: Element>(matrix: &SquareMatrix<T>, region: Region) -> Result<T, RudimentsError> {
    let n = matrix.dimension();

    // Visit only the cells of the region instead of filtering all n^2.
    let sum = match region {
        Region::Diagonal => checked_sum((0..n).map(|i| matrix.as_slice()[i * n + i])),
        Region::Upper => checked_sum(
            matrix
                .rows()
                .enumerate()
                .flat_map(|(i, row)| row[i + 1..].iter().copied()),
        ),
        Region::Lower => checked_sum(
            matrix
                .rows()
                .enumerate()
                .flat_map(|(i, row)| row[..i].iter().copied()),
        ),
        Region::All => checked_sum(matrix.as_slice().iter().copied()),
    };

    sum.ok_or_else(|| {
        debug!(region = region.name(), dimension = n, "matrix reduction overflowed");
        RudimentsError::Overflow {
            operation: region.name(),
        }
    })
}

/// Sum of `matrix[i][i]` for `i in [0, n)`.
#[inline]
pub fn diagonal_sum<T: Element>(matrix: &SquareMatrix<T>) -> Result<T, RudimentsError> {
    region_sum(matrix, Region::Diagonal)
}

/// Sum of `matrix[i][j]` for `j > i`.
#[inline]
pub fn upper_triangular_sum<T: Element>(matrix: &SquareMatrix<T>) -> Result<T, RudimentsError> {
    region_sum(matrix, Region::Upper)
}

/// Sum of `matrix[i][j]` for `j < i`.
#[inline]
pub fn lower_triangular_sum<T: Element>(matrix: &SquareMatrix<T>) -> Result<T, RudimentsError> {
    region_sum(matrix, Region::Lower)
}

/// Sum of every element.
#[inline]
pub fn total_sum<T: Element>(matrix: &SquareMatrix<T>) -> Result<T, RudimentsError> {
    region_sum(matrix, Region::All)
}
