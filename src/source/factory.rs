//! Seed factory
//!
//! A source is built either from an explicit 64-bit seed or from eight
//! bytes of entropy. Entropy comes from any [`Read`] implementation, so
//! callers and tests can inject their own; [`OsEntropy`] is the default
//! collaborator backed by the operating system.
//!
//! The eight entropy bytes are read as a big-endian `u64` and reinterpreted
//! as a two's-complement `i64`. The mapping is total and identical on every
//! platform.

use std::io::{self, Read};

use tracing::{debug, warn};

use crate::error::EntropyError;
use crate::os::sys_random;
use crate::source::LaggedFibonacci;

/// Number of entropy bytes consumed to derive one seed.
pub const SEED_LEN: usize = 8;

/// Entropy collaborator backed by the operating system.
///
/// Each `read` issues a single request to the platform entropy facility
/// and reports however many bytes it produced.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl Read for OsEntropy {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        sys_random(buf)
    }
}

/// Returns a source seeded with `seed`.
pub fn seeded_source(seed: i64) -> LaggedFibonacci {
    LaggedFibonacci::new(seed)
}

/// Returns a source seeded from eight bytes read from `entropy`.
///
/// `entropy` is read exactly once.
///
/// # Errors
///
/// - [`EntropyError::Source`] if the read fails
/// - [`EntropyError::Short`] if it yields fewer than [`SEED_LEN`] bytes
pub fn source_from_entropy<R: Read + ?Sized>(
    entropy: &mut R,
) -> Result<LaggedFibonacci, EntropyError> {
    let mut bytes = [0u8; SEED_LEN];

    let filled = entropy.read(&mut bytes).inspect_err(|err| {
        warn!(error = %err, "entropy source failed");
    })?;

    if filled != SEED_LEN {
        warn!(filled, "entropy source returned a short read");
        return Err(EntropyError::Short { filled });
    }

    let seed = u64::from_be_bytes(bytes) as i64;
    debug!(seed, "seeded source from entropy");

    Ok(LaggedFibonacci::new(seed))
}

/// Builds a source from an optional seed.
///
/// With `Some(seed)` this is [`seeded_source`]. With `None` the seed is
/// drawn from [`OsEntropy`].
///
/// # Errors
///
/// Only when `seed` is `None`; see [`source_from_entropy`].
pub fn make_source(seed: Option<i64>) -> Result<LaggedFibonacci, EntropyError> {
    match seed {
        Some(seed) => Ok(seeded_source(seed)),
        None => source_from_entropy(&mut OsEntropy),
    }
}
