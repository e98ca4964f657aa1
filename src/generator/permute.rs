//! Permutations and shuffles

use crate::error::DomainError;
use crate::generator::Generator;
use crate::generator::bounded::INT31_BOUND;
use crate::source::Source;

impl<S: Source> Generator<S> {
    /// Returns a uniformly random permutation of `0..n`.
    ///
    /// Built inside-out: for each `i` in `0..n` (including `i = 0`, which
    /// still takes a draw) a position `j` in `[0, i]` is drawn with
    /// [`intn`](Self::intn), `m[j]` moves to `m[i]`, and `i` lands at `m[j]`.
    ///
    /// # Errors
    /// [`DomainError::NegativeCount`] if `n < 0`. No draw is taken.
    pub fn perm(&mut self, n: isize) -> Result<Vec<usize>, DomainError> {
        if n < 0 {
            return Err(DomainError::NegativeCount(n as i64));
        }

        let n = n as usize;
        let mut m = vec![0usize; n];
        for i in 0..n {
            let j = self.intn_unchecked(i + 1);
            m[i] = m[j];
            m[j] = i;
        }

        Ok(m)
    }

    /// Fisher–Yates shuffle over `n` abstract positions.
    ///
    /// For `i` from `n - 1` down to 1, draws `j` in `[0, i]` and calls
    /// `swap(i, j)` exactly once. Empty and one-element shuffles take no
    /// draws.
    ///
    /// # Errors
    /// [`DomainError::NegativeCount`] if `n < 0`. No draw is taken and
    /// `swap` is never called.
    pub fn shuffle<F>(&mut self, n: isize, swap: F) -> Result<(), DomainError>
    where
        F: FnMut(usize, usize),
    {
        if n < 0 {
            return Err(DomainError::NegativeCount(n as i64));
        }

        self.shuffle_unchecked(n as usize, swap);
        Ok(())
    }

    /// Shuffles `items` in place; same draws as
    /// [`shuffle`](Self::shuffle) with `n = items.len()`.
    pub fn shuffle_slice<T>(&mut self, items: &mut [T]) {
        self.shuffle_unchecked(items.len(), |i, j| items.swap(i, j));
    }

    fn shuffle_unchecked<F>(&mut self, n: usize, mut swap: F)
    where
        F: FnMut(usize, usize),
    {
        if n < 2 {
            return;
        }

        let mut i = n - 1;

        // Positions whose bound exceeds the 31-bit range.
        while i >= INT31_BOUND {
            let j = self.int63n_unchecked(i as i64 + 1) as usize;
            swap(i, j);
            i -= 1;
        }

        while i > 0 {
            let j = self.uint32n(i as u32 + 1) as usize;
            swap(i, j);
            i -= 1;
        }
    }
}
