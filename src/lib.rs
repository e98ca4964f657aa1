//! Deterministic pseudo-random streams
//!
//! This crate produces reproducible streams of pseudo-random values from a
//! single 64-bit seed, and derives typed values from them: bounded
//! integers, floats in `[0, 1)`, exponential and normal deviates,
//! permutations, shuffles and bytes.
//!
//! Reproducibility is the contract. The same seed and the same sequence of
//! calls always yield the same outputs and consume the same number of
//! draws, on every platform.
//!
//! # Module overview
//!
//! - `source`
//!   The [`Source`] trait and its canonical engine, an additive
//!   lagged-Fibonacci generator ([`LaggedFibonacci`]). Also the seed
//!   factory, which builds a source from an explicit seed or from eight
//!   bytes of entropy.
//!
//! - `generator`
//!   The [`Generator`] facade and its derivation algorithms: rejection
//!   sampling for bounded integers, ziggurat samplers, Fisher–Yates
//!   permutations and shuffles, and 7-bytes-per-draw byte output.
//!
//! - `error`
//!   [`EntropyError`] for seed acquisition and [`DomainError`] for
//!   arguments outside an operation's domain.
//!
//! # Example
//!
//! ```
//! use grand::Generator;
//!
//! let mut rng = Generator::seeded(1275028672939391351);
//! assert_eq!(rng.int63(), 5129775219661360826);
//!
//! let die = rng.intn(6).unwrap() + 1;
//! assert!((1..=6).contains(&die));
//! ```
//!
//! # Not for secrets
//!
//! Output is fully determined by a seed that fits in 31 bits after
//! reduction. It is unsuitable for keys, tokens, nonces or any other
//! security-relevant randomness.
//!
//! # Features
//!
//! - `rand-core` (default): implements `rand_core::RngCore` and
//!   `rand_core::SeedableRng` for [`Generator`].

mod os;

pub mod error;
pub mod generator;
pub mod source;

pub use error::{DomainError, EntropyError};
pub use generator::Generator;
pub use source::{LaggedFibonacci, OsEntropy, Source, make_source};
