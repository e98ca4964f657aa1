//! Error types
//!
//! Only two things can go wrong in this crate: the entropy collaborator
//! used to derive a seed can fail, and a caller can pass an argument outside
//! the domain of a bounded operation. Every other operation is total.

use std::io;

use thiserror::Error;

/// Failure to obtain a seed from an entropy source.
///
/// Returned by the seed factory when no explicit seed is supplied. The
/// entropy source is queried exactly once; nothing is retried.
#[derive(Debug, Error)]
pub enum EntropyError {
    /// The entropy source reported an error.
    #[error("entropy source failed: {0}")]
    Source(#[from] io::Error),

    /// The entropy source produced fewer bytes than a seed requires.
    #[error("entropy source returned {filled} of 8 bytes")]
    Short {
        /// Number of bytes actually produced.
        filled: usize,
    },
}

/// Invalid argument to a bounded or counted operation.
///
/// Raised before any draw is taken, so a rejected call leaves the stream
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Upper bound of a bounded draw was zero or negative.
    #[error("bound must be positive, got {0}")]
    NonPositiveBound(i64),

    /// Element count of a permutation or shuffle was negative.
    #[error("count must not be negative, got {0}")]
    NegativeCount(i64),
}
