//! Bounded square matrix container.
//!
//! ## Purpose
//!
//! This module provides [`SquareMatrix`], a row-major `n x n` container whose
//! dimension is validated on construction against a configurable maximum.
//! Reductions read it through shared references only.
//!
//! ## Design notes
//!
//! * **Dynamically sized**: Storage is a single `Vec<T>` of exactly `n * n` elements.
//! * **Bounded**: `1 <= n <= max_dimension`, with [`DEFAULT_MAX_DIMENSION`] as the default bound.
//! * **Immutable**: No mutable accessors; a matrix is fixed once built.
//! * **Checked access**: [`SquareMatrix::get`] returns `None` outside `[0, n) x [0, n)`.
//!
//! ## Invariants
//!
//! * `data.len() == dimension * dimension`.
//! * `1 <= dimension <= max_dimension`, and `max_dimension * max_dimension` fits `usize`.
//! * Every element satisfies [`Element::is_admissible`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::slice::ChunksExact;

// Internal dependencies
use crate::primitives::element::Element;
use crate::primitives::errors::RudimentsError;

/// Largest dimension accepted when no other bound is configured.
pub const DEFAULT_MAX_DIMENSION: usize = 10;

// ============================================================================
// Square Matrix
// ============================================================================

/// A validated `n x n` matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    dimension: usize,
    max_dimension: usize,
    data: Vec<T>,
}

impl<T: Element> SquareMatrix<T> {
    /// Build a matrix of dimension `n` from `n * n` row-major values, bounded
    /// by [`DEFAULT_MAX_DIMENSION`].
    pub fn new(dimension: usize, values: Vec<T>) -> Result<Self, RudimentsError> {
        Self::with_max_dimension(dimension, DEFAULT_MAX_DIMENSION, values)
    }

    /// Build a matrix of dimension `n` bounded by `max_dimension`.
    pub fn with_max_dimension(
        dimension: usize,
        max_dimension: usize,
        values: Vec<T>,
    ) -> Result<Self, RudimentsError> {
        let expected = cell_count(dimension, max_dimension)?;
        if values.len() != expected {
            return Err(RudimentsError::MismatchedElements {
                expected,
                got: values.len(),
            });
        }

        if let Some(pos) = values.iter().position(|v| !v.is_admissible()) {
            return Err(RudimentsError::InvalidNumericValue(format!(
                "m[{}][{}]={}",
                pos / dimension,
                pos % dimension,
                values[pos]
            )));
        }

        Ok(Self {
            dimension,
            max_dimension,
            data: values,
        })
    }

    /// Build a matrix from a slice of rows. Every row must be as long as the
    /// number of rows.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, RudimentsError> {
        let n = rows.len();
        let mut values = Vec::with_capacity(cell_count(n, DEFAULT_MAX_DIMENSION)?);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n {
                return Err(RudimentsError::MismatchedElements {
                    expected: n,
                    got: row.len(),
                });
            }
            values.extend_from_slice(row);
        }
        Self::new(n, values)
    }

    /// Build a matrix by evaluating `f(i, j)` for every cell.
    pub fn from_fn<F>(dimension: usize, f: F) -> Result<Self, RudimentsError>
    where
        F: FnMut(usize, usize) -> T,
    {
        Self::from_fn_with_max_dimension(dimension, DEFAULT_MAX_DIMENSION, f)
    }

    /// Build a matrix by evaluating `f(i, j)` for every cell, bounded by `max_dimension`.
    pub fn from_fn_with_max_dimension<F>(
        dimension: usize,
        max_dimension: usize,
        mut f: F,
    ) -> Result<Self, RudimentsError>
    where
        F: FnMut(usize, usize) -> T,
    {
        // Reject before allocating `n * n` cells.
        let mut values = Vec::with_capacity(cell_count(dimension, max_dimension)?);
        for i in 0..dimension {
            for j in 0..dimension {
                values.push(f(i, j));
            }
        }
        Self::with_max_dimension(dimension, max_dimension, values)
    }

    /// The `n x n` identity matrix.
    pub fn identity(dimension: usize) -> Result<Self, RudimentsError> {
        Self::identity_with_max_dimension(dimension, DEFAULT_MAX_DIMENSION)
    }

    /// The `n x n` identity matrix, bounded by `max_dimension`.
    pub fn identity_with_max_dimension(
        dimension: usize,
        max_dimension: usize,
    ) -> Result<Self, RudimentsError> {
        Self::from_fn_with_max_dimension(dimension, max_dimension, |i, j| {
            if i == j {
                T::one()
            } else {
                T::zero()
            }
        })
    }
}

// Number of cells of an `n x n` matrix, after checking `n` against `max`.
// `max * max` must fit `usize`, so every accepted `n * n` does too.
fn cell_count(dimension: usize, max_dimension: usize) -> Result<usize, RudimentsError> {
    if max_dimension == 0 || max_dimension.checked_mul(max_dimension).is_none() {
        return Err(RudimentsError::InvalidMaxDimension(max_dimension));
    }
    if dimension == 0 || dimension > max_dimension {
        return Err(RudimentsError::InvalidDimension {
            got: dimension,
            max: max_dimension,
        });
    }
    dimension
        .checked_mul(dimension)
        .ok_or(RudimentsError::InvalidDimension {
            got: dimension,
            max: max_dimension,
        })
}

impl<T> SquareMatrix<T> {
    /// Declared dimension `n`.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Bound the dimension was validated against.
    #[inline]
    pub fn max_dimension(&self) -> usize {
        self.max_dimension
    }

    /// Element at row `i`, column `j`, or `None` when out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i < self.dimension && j < self.dimension {
            self.data.get(i * self.dimension + j)
        } else {
            None
        }
    }

    /// Row `i`, or `None` when out of range.
    #[inline]
    pub fn row(&self, i: usize) -> Option<&[T]> {
        if i < self.dimension {
            let start = i * self.dimension;
            Some(&self.data[start..start + self.dimension])
        } else {
            None
        }
    }

    /// Iterate over rows from top to bottom.
    #[inline]
    pub fn rows(&self) -> ChunksExact<'_, T> {
        self.data.chunks_exact(self.dimension)
    }

    /// All elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Display> Display for SquareMatrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for row in self.rows() {
            for value in row {
                write!(f, "{}\t", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
