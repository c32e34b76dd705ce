//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the core computations:
//! - Square matrix reductions (diagonal, triangular, total)
//! - Integer base conversion into explicit digit sequences
//! - Factorials, binomial coefficients and Pascal rows
//! - Palindrome checks
//!
//! Functions here assume inputs already passed the engine validator and only
//! report the errors that arise during computation (overflow).
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Square matrix reductions.
pub mod reduction;

/// Integer base conversion.
pub mod radix;

/// Factorials and binomial coefficients.
pub mod combinatorics;

/// Palindrome checks.
pub mod symmetry;
