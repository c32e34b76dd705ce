//! # rudiments — Checked Numeric and Sequence Utilities
//!
//! Small, validated building blocks for exercises that usually live in
//! throwaway programs: square matrix reductions, integer base conversion,
//! factorials and binomial coefficients, and palindrome checks. Every
//! operation is a pure function with explicit errors instead of silent
//! wraparound or out-of-bounds access.
//!
//! ## Quick Start
//!
//! ```rust
//! use rudiments::prelude::*;
//!
//! let m = SquareMatrix::from_rows(&[
//!     [1, 2, 3],
//!     [4, 5, 6],
//!     [7, 8, 9],
//! ])?;
//!
//! assert_eq!(diagonal_sum(&m)?, 15);
//! assert_eq!(upper_triangular_sum(&m)?, 11);
//! assert_eq!(lower_triangular_sum(&m)?, 19);
//!
//! assert_eq!(to_binary_digits(11)?.as_slice(), &[1, 0, 1, 1]);
//! assert_eq!(binomial_coefficient(5, 2)?, 10);
//! assert!(is_palindrome_str("racecar"));
//! # Result::<(), RudimentsError>::Ok(())
//! ```
//!
//! ## Overflow Is an Error
//!
//! Integer operations are computed in the caller's type and fail instead of
//! wrapping:
//!
//! ```rust
//! use rudiments::prelude::*;
//!
//! assert_eq!(factorial(12i32)?, 479_001_600);
//! assert!(factorial(13i32).unwrap_err().is_overflow());
//! assert_eq!(factorial(13i64)?, 6_227_020_800);
//!
//! // 66! does not fit u64, but C(66, 33) does.
//! assert_eq!(binomial_coefficient(66u64, 33)?, 7_219_428_434_016_265_740);
//! # Result::<(), RudimentsError>::Ok(())
//! ```
//!
//! ## Configuration
//!
//! Matrices are bounded by [`DEFAULT_MAX_DIMENSION`](prelude::DEFAULT_MAX_DIMENSION)
//! (10) unless a [`Toolkit`](prelude::Toolkit) is built with another bound:
//!
//! ```rust
//! use rudiments::prelude::*;
//!
//! let toolkit = Rudiments::new().max_dimension(16).build()?;
//!
//! let m = toolkit.identity::<i64>(12)?;
//! assert_eq!(toolkit.diagonal_sum(&m)?, 12);
//!
//! // The default bound still applies to the free functions.
//! assert_eq!(
//!     diagonal_sum(&m).unwrap_err().kind(),
//!     ErrorKind::InvalidDimension
//! );
//! # Result::<(), RudimentsError>::Ok(())
//! ```
//!
//! ## Palindromes Are Exact
//!
//! Comparison is case-sensitive and whitespace-sensitive:
//!
//! ```rust
//! use rudiments::prelude::*;
//!
//! assert!(is_palindrome_str(""));
//! assert!(is_palindrome_str("a"));
//! assert!(!is_palindrome_str("Racecar"));
//! assert!(is_palindrome(&[1, 2, 3, 2, 1]));
//! ```
//!
//! ## Logging
//!
//! Rejected inputs and overflows are reported at `debug` level through
//! [`tracing`](https://docs.rs/tracing). Install any subscriber to see them;
//! the library never installs one itself.
//!
//! ## no_std
//!
//! Disable default features to build without the standard library (an
//! allocator is still required):
//!
//! ```toml
//! [dependencies]
//! rudiments = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and error types.
mod primitives;

// Layer 2: Math - checked arithmetic helpers.
mod math;

// Layer 3: Algorithms - reductions, base conversion, combinatorics, symmetry.
mod algorithms;

// Layer 4: Engine - validation and composite output.
mod engine;

// High-level API.
mod api;

// Standard rudiments prelude.
pub mod prelude {
    pub use crate::api::{
        binomial_coefficient, diagonal_sum, factorial, first_mismatch, is_palindrome,
        is_palindrome_str, lower_triangular_sum, pascal_row, summarize, to_binary_digits,
        to_radix_digits, total_sum, upper_triangular_sum, Digits, Element, ErrorKind,
        MatrixSummary, RudimentsBuilder as Rudiments, RudimentsError, SquareMatrix, Toolkit,
        DEFAULT_MAX_DIMENSION,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
