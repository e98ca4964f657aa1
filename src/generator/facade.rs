//! Generator facade
//!
//! [`Generator`] owns a [`Source`] and turns its 63-bit draws into typed
//! values. Each operation documents how many draws it consumes, because
//! the consumption rate is as much a part of the stream contract as the
//! values themselves.

use std::io::Read;

use tracing::trace;

use crate::error::EntropyError;
use crate::source::{LaggedFibonacci, Source, make_source, seeded_source, source_from_entropy};

/// 2⁶³ as an `f64`, the divisor mapping 63-bit draws onto `[0, 1)`.
const TWO_POW_63: f64 = (1u64 << 63) as f64;

/// Deterministic pseudo-random generator.
///
/// Wraps a [`Source`] (by default [`LaggedFibonacci`]) and exposes the
/// derivation suite: full-width and bounded integers, floats in `[0, 1)`,
/// exponential and normal deviates, permutations, shuffles and bytes.
///
/// For a given seed every operation is bit-for-bit reproducible.
///
/// # Concurrency
///
/// All operations take `&mut self`. A generator shared between threads
/// must be wrapped in a lock by the caller; otherwise use one generator per
/// thread.
///
/// # Security
///
/// The stream is fully predictable from its seed. Never use it for keys,
/// nonces, tokens or anything else that must stay secret.
#[derive(Clone, Debug)]
pub struct Generator<S = LaggedFibonacci> {
    /// Owned source; every draw goes through it.
    pub(super) src: S,

    /// Remaining bits of the last draw used for byte output.
    pub(super) read_val: i64,

    /// Bytes of `read_val` not yet emitted (0..=7).
    pub(super) read_pos: u8,
}

impl Generator<LaggedFibonacci> {
    /// Creates a generator over the canonical stream for `seed`.
    pub fn seeded(seed: i64) -> Self {
        Self::new(seeded_source(seed))
    }

    /// Creates a generator seeded from eight bytes of `entropy`.
    ///
    /// # Errors
    /// See [`source_from_entropy`].
    pub fn from_entropy<R: Read + ?Sized>(entropy: &mut R) -> Result<Self, EntropyError> {
        source_from_entropy(entropy).map(Self::new)
    }

    /// Creates a generator seeded from operating system entropy.
    ///
    /// # Errors
    /// [`EntropyError`] if the platform entropy facility fails.
    pub fn from_os() -> Result<Self, EntropyError> {
        make_source(None).map(Self::new)
    }
}

impl<S: Source> Generator<S> {
    /// Binds a generator to `src`. No draws are taken.
    pub fn new(src: S) -> Self {
        Self {
            src,
            read_val: 0,
            read_pos: 0,
        }
    }

    /// Reseeds the underlying source.
    ///
    /// Afterwards the generator behaves exactly like a fresh one built from
    /// `seed`, including the byte cursor used by [`read`](Self::read).
    pub fn reseed(&mut self, seed: i64) {
        trace!(seed, "reseeding generator");
        self.src.seed(seed);
        self.read_pos = 0;
    }

    /// Returns a value in `[0, 2⁶³)`. One draw.
    #[inline]
    pub fn int63(&mut self) -> i64 {
        self.src.next63()
    }

    /// Returns a value in `[0, 2³¹)`: the top 31 bits of one draw.
    #[inline]
    pub fn int31(&mut self) -> i32 {
        (self.int63() >> 32) as i32
    }

    /// Returns a full-range `u32`: the top 32 bits of one draw.
    #[inline]
    pub fn uint32(&mut self) -> u32 {
        (self.int63() >> 31) as u32
    }

    /// Returns a full-range `u64`.
    ///
    /// Uses the source's native 64-bit word when it has one (one draw for
    /// [`LaggedFibonacci`]), otherwise the two-draw composition of
    /// [`Source::next64`].
    #[inline]
    pub fn uint64(&mut self) -> u64 {
        self.src.next64()
    }

    /// Returns a non-negative pointer-width integer from one draw.
    ///
    /// On 64-bit targets this equals [`int63`](Self::int63); on 32-bit
    /// targets it is the low 31 bits of the draw.
    #[inline]
    pub fn int(&mut self) -> isize {
        ((self.int63() as usize) << 1 >> 1) as isize
    }

    /// Returns a float in `[0.0, 1.0)`.
    ///
    /// Divides one draw by 2⁶³. Draws close enough to 2⁶³ round up to
    /// exactly 1.0; those are discarded and another draw is taken.
    pub fn float64(&mut self) -> f64 {
        loop {
            let f = self.int63() as f64 / TWO_POW_63;
            if f != 1.0 {
                return f;
            }
        }
    }

    /// Returns a float in `[0.0, 1.0)` at single precision.
    ///
    /// Narrows [`float64`](Self::float64), retrying when the narrowing
    /// rounds up to 1.0.
    pub fn float32(&mut self) -> f32 {
        loop {
            let f = self.float64() as f32;
            if f != 1.0 {
                return f;
            }
        }
    }
}
