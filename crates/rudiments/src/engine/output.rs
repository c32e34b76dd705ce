//! Output type for a full matrix reduction.
//!
//! ## Purpose
//!
//! This module defines [`MatrixSummary`], which bundles the diagonal,
//! triangular and total sums of one matrix. Computation and presentation are
//! separate: [`MatrixSummary::compute`] only sums, and the `Display` impl only
//! formats.
//!
//! ## Invariants
//!
//! * `diagonal + upper + lower == total` (exact for integers; up to rounding for floats).
//!
//! ## Non-goals
//!
//! * This module does not validate the matrix against a configured bound.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::algorithms::reduction::{region_sum, Region};
use crate::primitives::element::Element;
use crate::primitives::errors::RudimentsError;
use crate::primitives::matrix::SquareMatrix;

// ============================================================================
// Summary Structure
// ============================================================================

/// Region sums of a square matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixSummary<T> {
    /// Dimension of the summarised matrix.
    pub dimension: usize,

    /// Sum of the main diagonal.
    pub diagonal: T,

    /// Sum of the strictly upper triangle.
    pub upper: T,

    /// Sum of the strictly lower triangle.
    pub lower: T,

    /// Sum of every element.
    pub total: T,
}

impl<T: Element> MatrixSummary<T> {
    /// Compute every region sum of `matrix`.
    pub fn compute(matrix: &SquareMatrix<T>) -> Result<Self, RudimentsError> {
        Ok(Self {
            dimension: matrix.dimension(),
            diagonal: region_sum(matrix, Region::Diagonal)?,
            upper: region_sum(matrix, Region::Upper)?,
            lower: region_sum(matrix, Region::Lower)?,
            total: region_sum(matrix, Region::All)?,
        })
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Display> Display for MatrixSummary<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Dimension: {0} x {0}", self.dimension)?;
        writeln!(f)?;
        writeln!(f, "Sums:")?;
        writeln!(f, "  Main diagonal:    {}", self.diagonal)?;
        writeln!(f, "  Upper triangular: {}", self.upper)?;
        writeln!(f, "  Lower triangular: {}", self.lower)?;
        writeln!(f, "  All elements:     {}", self.total)
    }
}
