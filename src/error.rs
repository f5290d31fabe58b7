//! Error types for lanemath operations.
//!
//! The error surface is deliberately narrow: every kernel is a total,
//! deterministic computation, so the only fallible point is constructing a
//! random generator from a degenerate seed.

use std::fmt;

/// Errors that can occur when constructing lanemath values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanemathError {
    /// A random generator was seeded with a value the update function maps
    /// to a fixed point.
    InvalidSeed {
        /// The rejected seed value.
        seed: u32,
    },
}

impl fmt::Display for LanemathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanemathError::InvalidSeed { seed } => write!(
                f,
                "invalid generator seed {seed}: zero is a fixed point of the xorshift update"
            ),
        }
    }
}

impl std::error::Error for LanemathError {}
