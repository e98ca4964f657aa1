//! Byte output
//!
//! Bytes are cut from 63-bit draws, seven per draw, low byte first. The top
//! bit of each draw is never emitted, which keeps every byte uniform.
//!
//! Leftover bytes of the last draw are carried between calls, so filling
//! two buffers back to back produces the same bytes as filling their
//! concatenation once.

use std::io;

use crate::generator::Generator;
use crate::source::Source;

/// Bytes emitted per draw.
const BYTES_PER_DRAW: u8 = 7;

impl<S: Source> Generator<S> {
    /// Fills `buf` with pseudo-random bytes and returns `buf.len()`.
    ///
    /// Never fails and always writes the whole buffer.
    pub fn read(&mut self, buf: &mut [u8]) -> usize {
        for byte in buf.iter_mut() {
            if self.read_pos == 0 {
                self.read_val = self.src.next63();
                self.read_pos = BYTES_PER_DRAW;
            }
            *byte = self.read_val as u8;
            self.read_val >>= 8;
            self.read_pos -= 1;
        }

        buf.len()
    }

    /// Fills `buf` like [`read`](Self::read) and hands it back.
    pub fn fill<'a>(&mut self, buf: &'a mut [u8]) -> &'a mut [u8] {
        self.read(buf);
        buf
    }
}

impl<S: Source> io::Read for Generator<S> {
    /// Infallible; always reports the whole buffer as read.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(Generator::read(self, buf))
    }
}
