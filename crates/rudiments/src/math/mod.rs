//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure arithmetic helpers used by the algorithms:
//! - Overflow-checked accumulation for every supported matrix element type
//! - Greatest common divisor for exact multiplicative combinatorics
//!
//! These are reusable building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Overflow-checked accumulation.
pub mod checked;

/// Greatest common divisor.
pub mod gcd;
