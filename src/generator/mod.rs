//! Typed randomness on top of a [`Source`](crate::source::Source)
//!
//! The [`Generator`] facade implements the derivation suite:
//!
//! - `facade`
//!   The generator type, constructors, reseeding, full-width integers and
//!   floats in `[0, 1)`.
//!
//! - `bounded`
//!   Uniform integers in `[0, n)` by rejection sampling.
//!
//! - `ziggurat`
//!   Exponential and standard normal deviates (Marsaglia–Tsang ziggurat),
//!   with their tables in `tables`.
//!
//! - `permute`
//!   Permutations and Fisher–Yates shuffles.
//!
//! - `bytes`
//!   Byte output, seven bytes per draw, with a cursor carried between
//!   calls.
//!
//! - `interop` (feature `rand-core`)
//!   `rand_core::RngCore` and `SeedableRng` implementations.
//!
//! Every algorithm here is pinned: for the same seed, the same calls
//! return the same values and consume the same number of draws.

mod bounded;
mod bytes;
mod facade;
#[cfg(feature = "rand-core")]
mod interop;
mod permute;
mod tables;
mod ziggurat;

pub use facade::Generator;
