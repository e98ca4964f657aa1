//! `rand_core` integration
//!
//! Lets a [`Generator`] drive anything written against the `rand`
//! ecosystem traits. The trait methods map onto the native operations, so
//! the streams stay identical: `next_u32` is [`Generator::uint32`],
//! `next_u64` is [`Generator::uint64`], and the byte methods share the
//! carried byte cursor of [`Generator::fill`].

use rand_core::{Error, RngCore, SeedableRng};

use crate::generator::Generator;
use crate::source::{LaggedFibonacci, Source};

impl<S: Source> RngCore for Generator<S> {
    fn next_u32(&mut self) -> u32 {
        self.uint32()
    }

    fn next_u64(&mut self) -> u64 {
        self.uint64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill(dest);
        Ok(())
    }
}

impl SeedableRng for Generator<LaggedFibonacci> {
    /// Big-endian encoding of the `i64` seed, the same mapping used for
    /// entropy bytes.
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::seeded(i64::from_be_bytes(seed))
    }

    /// Uses the bits of `state` as the seed directly.
    fn seed_from_u64(state: u64) -> Self {
        Self::seeded(state as i64)
    }
}
