//! Input validation for rudiments configuration and operation inputs.
//!
//! ## Purpose
//!
//! This module provides the validation functions run before any algorithm:
//! matrix dimensions against the configured bound, non-negativity of integer
//! inputs, binomial selections, radices, and builder duplicates.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Integer checks are generic over `PrimInt`.
//! * **Logged**: Every rejection is reported at `debug` level through `tracing`.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy the preconditions of the algorithms layer.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not clamp or otherwise correct invalid inputs.
//! * This module does not perform the computation itself.

// External dependencies
use num_traits::PrimInt;
use tracing::debug;

// Internal dependencies
use crate::primitives::digits::{MAX_RADIX, MIN_RADIX};
use crate::primitives::errors::RudimentsError;
use crate::primitives::matrix::SquareMatrix;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for rudiments configuration and inputs.
///
/// Provides static methods that return `Result<(), RudimentsError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Matrix Validation
    // ========================================================================

    /// Validate the configured maximum matrix dimension.
    ///
    /// The bound must be at least 1 and `max * max` must fit `usize`.
    pub fn validate_max_dimension(max: usize) -> Result<(), RudimentsError> {
        if max == 0 || max.checked_mul(max).is_none() {
            debug!(max, "rejected max_dimension");
            return Err(RudimentsError::InvalidMaxDimension(max));
        }
        Ok(())
    }

    /// Validate a matrix dimension against `[1, max]`.
    pub fn validate_dimension(dimension: usize, max: usize) -> Result<(), RudimentsError> {
        if dimension == 0 || dimension > max {
            debug!(dimension, max, "rejected matrix dimension");
            return Err(RudimentsError::InvalidDimension {
                got: dimension,
                max,
            });
        }
        Ok(())
    }

    /// Validate that an existing matrix fits within `max`.
    pub fn validate_matrix<T>(matrix: &SquareMatrix<T>, max: usize) -> Result<(), RudimentsError> {
        Self::validate_dimension(matrix.dimension(), max)
    }

    // ========================================================================
    // Integer Domain Validation
    // ========================================================================

    /// Validate that `value` is not negative.
    pub fn validate_non_negative<T: PrimInt>(
        value: T,
        operation: &'static str,
    ) -> Result<(), RudimentsError> {
        if value < T::zero() {
            let value = value.to_i128().unwrap_or(i128::MIN);
            debug!(operation, value, "rejected negative input");
            return Err(RudimentsError::NegativeInput { operation, value });
        }
        Ok(())
    }

    /// Validate a binomial selection `0 <= r <= n`.
    pub fn validate_selection<T: PrimInt>(n: T, r: T) -> Result<(), RudimentsError> {
        if n < T::zero() || r < T::zero() || r > n {
            let n = n.to_i128().unwrap_or(i128::MAX);
            let r = r.to_i128().unwrap_or(i128::MAX);
            debug!(n, r, "rejected binomial selection");
            return Err(RudimentsError::InvalidSelection { n, r });
        }
        Ok(())
    }

    /// Validate a digit-conversion radix.
    pub fn validate_radix(radix: u32) -> Result<(), RudimentsError> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            debug!(radix, "rejected radix");
            return Err(RudimentsError::InvalidRadix(radix));
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no builder parameter was configured twice.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RudimentsError> {
        if let Some(parameter) = duplicate_param {
            debug!(parameter, "rejected duplicate parameter");
            return Err(RudimentsError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
