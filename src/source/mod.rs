//! Deterministic 63-bit integer streams
//!
//! A [`Source`] is the only stateful primitive in the crate: it yields one
//! non-negative 63-bit integer per draw and can be reset to the canonical
//! stream of any seed. The [`Generator`](crate::Generator) facade derives
//! every typed value from these draws.
//!
//! The default engine is [`LaggedFibonacci`]. The seed factory
//! ([`make_source`], [`seeded_source`], [`source_from_entropy`]) builds it
//! from an explicit seed or from an entropy collaborator.
//!
//! # Concurrency
//!
//! Sources are plain values with no interior locking. Every draw takes
//! `&mut self`; sharing one across threads needs external synchronization,
//! or one source per thread.

mod cooked;
mod factory;
mod lagged;

pub use factory::{OsEntropy, SEED_LEN, make_source, seeded_source, source_from_entropy};
pub use lagged::LaggedFibonacci;

/// A seedable stream of 63-bit integers.
///
/// Implementations must be deterministic: after `seed(s)` the sequence of
/// [`next63`](Source::next63) results depends on `s` alone.
pub trait Source {
    /// Resets the state so later draws follow the canonical stream for
    /// `seed`.
    fn seed(&mut self, seed: i64);

    /// Draws the next value, uniformly distributed in `[0, 2⁶³)`.
    fn next63(&mut self) -> i64;

    /// Draws a full-width 64-bit value.
    ///
    /// The default composes two draws as
    /// `(next63() >> 31) | (next63() << 32)`. Sources with a native 64-bit
    /// word override this with a single draw.
    fn next64(&mut self) -> u64 {
        let lo = self.next63() as u64 >> 31;
        let hi = (self.next63() as u64) << 32;
        lo | hi
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn seed(&mut self, seed: i64) {
        (**self).seed(seed)
    }

    fn next63(&mut self) -> i64 {
        (**self).next63()
    }

    fn next64(&mut self) -> u64 {
        (**self).next64()
    }
}
