//! Additive lagged-Fibonacci engine
//!
//! This module implements the 607-word additive generator with lags
//! 273/607 that produces the 63-bit stream everything else in the crate is
//! derived from.
//!
//! The recurrence is
//!
//! ```text
//! x[n] = x[n - 607] + x[n - 273]   (mod 2^64)
//! ```
//!
//! kept in a circular table addressed by two indices (`feed` and `tap`)
//! that walk downwards. The table is filled from the seed by a
//! Park–Miller "minimal standard" LCG (multiplier 48271, Schrage's method)
//! and then XORed with a fixed seeding table. The seeding scheme and the
//! table are part of the stream contract: a given seed must reproduce the
//! canonical stream bit for bit.

use std::fmt::{Debug, Formatter, Result};

use crate::source::Source;
use crate::source::cooked::COOKED;

/// Length of the state table.
const LEN: usize = 607;

/// Distance between `feed` and `tap`.
const TAP: usize = 273;

/// Mask selecting the low 63 bits of a draw.
const MASK: u64 = (1 << 63) - 1;

/// Modulus of the seeding LCG (2³¹ − 1).
const INT32_MAX: i32 = i32::MAX;

/// Seed substituted for zero, which is a fixed point of the seeding LCG.
const ZERO_SEED: i32 = 89_482_311;

/// One step of the seeding LCG, `x * 48271 mod (2³¹ − 1)`.
///
/// Uses Schrage's decomposition so the product never leaves 32 bits.
fn seedrand(x: i32) -> i32 {
    const A: i32 = 48_271;
    const Q: i32 = 44_488;
    const R: i32 = 3_399;

    let hi = x / Q;
    let lo = x % Q;

    let x = A * lo - R * hi;
    if x < 0 { x + INT32_MAX } else { x }
}

/// The additive lagged-Fibonacci source.
///
/// After construction (or [`Source::seed`]) with seed `s`, the sequence of
/// draws is a pure function of `s`. The state is the 607-word table and two
/// indices; nothing is allocated.
#[derive(Clone)]
pub struct LaggedFibonacci {
    tap: usize,
    feed: usize,
    vec: [i64; LEN],
}

impl LaggedFibonacci {
    /// Creates a source seeded with `seed`.
    pub fn new(seed: i64) -> Self {
        let mut src = Self {
            tap: 0,
            feed: LEN - TAP,
            vec: [0; LEN],
        };
        src.seed(seed);
        src
    }

    /// Advances the recurrence by one step and returns the full 64-bit word.
    #[inline]
    fn step(&mut self) -> u64 {
        self.tap = if self.tap == 0 { LEN - 1 } else { self.tap - 1 };
        self.feed = if self.feed == 0 { LEN - 1 } else { self.feed - 1 };

        let x = self.vec[self.feed].wrapping_add(self.vec[self.tap]);
        self.vec[self.feed] = x;

        x as u64
    }
}

impl Source for LaggedFibonacci {
    /// Resets the table for `seed`.
    ///
    /// The seed is reduced modulo 2³¹ − 1 (negative remainders are shifted
    /// into range, zero is replaced), so seeds congruent modulo 2³¹ − 1
    /// yield the same stream.
    fn seed(&mut self, seed: i64) {
        self.tap = 0;
        self.feed = LEN - TAP;

        let mut seed = seed % i64::from(INT32_MAX);
        if seed < 0 {
            seed += i64::from(INT32_MAX);
        }
        if seed == 0 {
            seed = i64::from(ZERO_SEED);
        }

        // In range (0, 2³¹ − 1) after the reduction above.
        let mut x = seed as i32;

        // The first 20 LCG outputs are discarded to decorrelate nearby seeds.
        for _ in 0..20 {
            x = seedrand(x);
        }

        for (slot, cooked) in self.vec.iter_mut().zip(COOKED.iter()) {
            x = seedrand(x);
            let mut u = i64::from(x) << 40;
            x = seedrand(x);
            u ^= i64::from(x) << 20;
            x = seedrand(x);
            u ^= i64::from(x);
            *slot = u ^ cooked;
        }
    }

    #[inline]
    fn next63(&mut self) -> i64 {
        (self.step() & MASK) as i64
    }

    /// Native 64-bit draw: the raw table word, one step.
    #[inline]
    fn next64(&mut self) -> u64 {
        self.step()
    }
}

impl Debug for LaggedFibonacci {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("LaggedFibonacci")
            .field("tap", &self.tap)
            .field("feed", &self.feed)
            .finish_non_exhaustive()
    }
}
