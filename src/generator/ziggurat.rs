//! Exponential and normal deviates
//!
//! Both samplers use the Marsaglia–Tsang ziggurat ("The Ziggurat Method
//! for Generating Random Variables", 2000). A 32-bit draw picks a layer
//! from its low bits and a candidate from the whole word. Candidates inside
//! the layer's inner rectangle (the overwhelming majority) are returned
//! immediately; the rest go through a wedge test or, for the base layer, a
//! tail sampler.

use crate::generator::Generator;
use crate::generator::tables::{FE, FN, KE, KN, WE, WN};
use crate::source::Source;

/// Start of the exponential tail (right edge of the base layer).
const RE: f64 = 7.697_117_470_131_049_72;

/// Start of the normal tail.
const RN: f64 = 3.442_619_855_899;

impl<S: Source> Generator<S> {
    /// Returns an exponentially distributed value with rate 1 (mean 1).
    ///
    /// To get another rate, divide: `rng.exp_float64() / rate`.
    pub fn exp_float64(&mut self) -> f64 {
        loop {
            let j = self.uint32();
            let i = (j & 0xFF) as usize;
            let x = f64::from(j) * f64::from(WE[i]);

            if j < KE[i] {
                return x;
            }

            if i == 0 {
                return RE - self.float64().ln();
            }

            if FE[i] + (self.float64() as f32) * (FE[i - 1] - FE[i]) < (-x).exp() as f32 {
                return x;
            }
        }
    }

    /// Returns a standard normal value (mean 0, standard deviation 1).
    ///
    /// To get another distribution, scale and shift:
    /// `rng.norm_float64() * stddev + mean`.
    pub fn norm_float64(&mut self) -> f64 {
        loop {
            // Sign comes from the top bit, layer from the low seven.
            let j = self.uint32() as i32;
            let i = (j & 0x7F) as usize;
            let x = f64::from(j) * f64::from(WN[i]);

            if j.unsigned_abs() < KN[i] {
                return x;
            }

            if i == 0 {
                let tail = loop {
                    let x = -self.float64().ln() * (1.0 / RN);
                    let y = -self.float64().ln();
                    if y + y >= x * x {
                        break x;
                    }
                };
                return if j > 0 { RN + tail } else { -RN - tail };
            }

            if FN[i] + (self.float64() as f32) * (FN[i - 1] - FN[i]) < (-0.5 * x * x).exp() as f32
            {
                return x;
            }
        }
    }
}
