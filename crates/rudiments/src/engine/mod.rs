//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates inputs ahead of the algorithms and assembles
//! composite results for presentation.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input and configuration validation.
pub mod validator;

/// Composite matrix reduction output.
pub mod output;
