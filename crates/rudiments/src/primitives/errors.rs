//! Error types for rudiments operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building a
//! matrix, reducing it, converting integers between bases, or computing
//! combinatorial quantities.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values (e.g., dimension vs. maximum).
//! * **Deferred**: Builder errors are recorded during configuration and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Dimension errors**: Matrix dimension out of `[1, max]`, wrong element count.
//! 2. **Domain errors**: Negative inputs, `r` outside `[0, n]`, unsupported radix.
//! 3. **Overflow errors**: Results that do not fit the chosen integer width.
//! 4. **Configuration errors**: Invalid or duplicated builder parameters.
//!
//! ## Invariants
//!
//! * Identical inputs always produce the identical error.
//! * No operation returns a partial result alongside an error.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Classification
// ============================================================================

/// Coarse classification of a [`RudimentsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Matrix dimension is zero, exceeds the maximum, or disagrees with the data.
    InvalidDimension,

    /// Input lies outside the mathematical domain of the operation.
    Domain,

    /// The true result exceeds the representable range of the integer type.
    Overflow,

    /// Builder configuration was rejected.
    Configuration,
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for rudiments operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RudimentsError {
    /// Matrix dimension must be in `[1, max]`.
    InvalidDimension {
        /// Dimension requested by the caller.
        got: usize,
        /// Largest dimension currently accepted.
        max: usize,
    },

    /// A square matrix of dimension `n` needs exactly `n * n` elements.
    MismatchedElements {
        /// Number of elements required.
        expected: usize,
        /// Number of elements supplied.
        got: usize,
    },

    /// The configured maximum dimension must be at least 1.
    InvalidMaxDimension(usize),

    /// A floating-point element is NaN or infinite.
    InvalidNumericValue(String),

    /// The operation is undefined for negative input.
    NegativeInput {
        /// Name of the rejecting operation.
        operation: &'static str,
        /// The rejected value.
        value: i128,
    },

    /// Binomial coefficient requires `0 <= r <= n`.
    InvalidSelection {
        /// Size of the set.
        n: i128,
        /// Size of the selection.
        r: i128,
    },

    /// Digit conversion supports radices `2..=36`.
    InvalidRadix(u32),

    /// The result does not fit the chosen integer type.
    Overflow {
        /// Name of the overflowing operation.
        operation: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl RudimentsError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDimension { .. } | Self::MismatchedElements { .. } => {
                ErrorKind::InvalidDimension
            }
            Self::InvalidNumericValue(_)
            | Self::NegativeInput { .. }
            | Self::InvalidSelection { .. }
            | Self::InvalidRadix(_) => ErrorKind::Domain,
            Self::Overflow { .. } => ErrorKind::Overflow,
            Self::InvalidMaxDimension(_) | Self::DuplicateParameter { .. } => {
                ErrorKind::Configuration
            }
        }
    }

    /// Returns `true` if this is a domain error.
    #[inline]
    pub fn is_domain(&self) -> bool {
        self.kind() == ErrorKind::Domain
    }

    /// Returns `true` if this is an overflow error.
    #[inline]
    pub fn is_overflow(&self) -> bool {
        self.kind() == ErrorKind::Overflow
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RudimentsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidDimension { got, max } => {
                write!(f, "Invalid dimension: {got} (must be between 1 and {max})")
            }
            Self::MismatchedElements { expected, got } => {
                write!(f, "Element count mismatch: expected {expected}, got {got}")
            }
            Self::InvalidMaxDimension(max) => {
                write!(f, "Invalid max_dimension: {max} (must be at least 1 with a square that fits usize)")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::NegativeInput { operation, value } => {
                write!(f, "Domain error: {operation} is undefined for {value}")
            }
            Self::InvalidSelection { n, r } => {
                write!(f, "Domain error: r = {r} is outside [0, {n}]")
            }
            Self::InvalidRadix(radix) => {
                write!(f, "Invalid radix: {radix} (must be between 2 and 36)")
            }
            Self::Overflow { operation } => {
                write!(f, "Overflow: result of {operation} does not fit the integer type")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RudimentsError {}
