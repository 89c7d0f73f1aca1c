//! Shared primitives used across the crate.

/// RGB color handling.
pub mod color;
/// Error taxonomy and result alias.
pub mod error;
