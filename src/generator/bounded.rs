//! Bounded integers
//!
//! Uniform integers in `[0, n)` by rejection sampling. A power-of-two `n`
//! masks a single draw. Any other `n` redraws until the value falls at or
//! below the largest multiple of `n` that fits in the draw width (minus
//! one), then reduces modulo `n`.
//!
//! Bounds up to 2³¹ − 1 sample 31-bit draws; larger bounds sample 63-bit
//! draws. Which path runs is visible in how fast the stream is consumed,
//! so the split point is fixed.

use crate::error::DomainError;
use crate::generator::Generator;
use crate::source::Source;

/// Largest bound served by the 31-bit path.
pub(super) const INT31_BOUND: usize = i32::MAX as usize;

impl<S: Source> Generator<S> {
    /// Returns a value in `[0, n)`.
    ///
    /// # Errors
    /// [`DomainError::NonPositiveBound`] if `n <= 0`. No draw is taken.
    pub fn intn(&mut self, n: isize) -> Result<isize, DomainError> {
        if n <= 0 {
            return Err(DomainError::NonPositiveBound(n as i64));
        }

        Ok(self.intn_unchecked(n as usize) as isize)
    }

    /// Returns a value in `[0, n)` sampled from 31-bit draws.
    ///
    /// # Errors
    /// [`DomainError::NonPositiveBound`] if `n <= 0`. No draw is taken.
    pub fn int31n(&mut self, n: i32) -> Result<i32, DomainError> {
        if n <= 0 {
            return Err(DomainError::NonPositiveBound(i64::from(n)));
        }

        Ok(self.int31n_unchecked(n))
    }

    /// Returns a value in `[0, n)` sampled from 63-bit draws.
    ///
    /// # Errors
    /// [`DomainError::NonPositiveBound`] if `n <= 0`. No draw is taken.
    pub fn int63n(&mut self, n: i64) -> Result<i64, DomainError> {
        if n <= 0 {
            return Err(DomainError::NonPositiveBound(n));
        }

        Ok(self.int63n_unchecked(n))
    }

    /// `intn` for a bound already known to be positive.
    pub(super) fn intn_unchecked(&mut self, n: usize) -> usize {
        if n <= INT31_BOUND {
            self.int31n_unchecked(n as i32) as usize
        } else {
            self.int63n_unchecked(n as i64) as usize
        }
    }

    fn int31n_unchecked(&mut self, n: i32) -> i32 {
        debug_assert!(n > 0);

        if n & (n - 1) == 0 {
            return self.int31() & (n - 1);
        }

        let max = (i32::MAX as u32 - (1u32 << 31) % n as u32) as i32;
        let mut v = self.int31();
        while v > max {
            v = self.int31();
        }
        v % n
    }

    pub(super) fn int63n_unchecked(&mut self, n: i64) -> i64 {
        debug_assert!(n > 0);

        if n & (n - 1) == 0 {
            return self.int63() & (n - 1);
        }

        let max = (i64::MAX as u64 - (1u64 << 63) % n as u64) as i64;
        let mut v = self.int63();
        while v > max {
            v = self.int63();
        }
        v % n
    }

    /// Multiply-shift bounded draw over [`uint32`](Self::uint32), used by
    /// shuffles.
    ///
    /// Takes the high half of `v * n`; the low half detects the biased
    /// region, which is rejected. Requires `0 < n <= 2³¹ − 1`.
    pub(super) fn uint32n(&mut self, n: u32) -> u32 {
        debug_assert!(n > 0 && n as usize <= INT31_BOUND);

        let mut prod = u64::from(self.uint32()) * u64::from(n);
        let mut low = prod as u32;

        if low < n {
            let thresh = n.wrapping_neg() % n;
            while low < thresh {
                prod = u64::from(self.uint32()) * u64::from(n);
                low = prod as u32;
            }
        }

        (prod >> 32) as u32
    }
}
