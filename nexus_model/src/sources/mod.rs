//! Injectable sources of randomness and time.
//!
//! Every component that "draws" a value takes a [`RandomSource`] argument
//! instead of reaching for a global generator, and every time-derived value
//! comes from a [`Clock`]. Tests swap in [`ScriptedRandom`] and [`FixedClock`].

mod clock;

pub use clock::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// A source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    /// Draw the next sample in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Draw an index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "next_index on an empty range");
        let index = (self.next_f64() * len as f64) as usize;
        index.min(len.saturating_sub(1))
    }

    /// Draw a value in `[low, low + span)`. `span` must be positive.
    ///
    /// Samples close to 1.0 can round `sample * span + low` up to the upper
    /// bound; those land on the largest value below it instead.
    fn next_in(&mut self, low: f64, span: f64) -> f64 {
        let high = low + span;
        let value = self.next_f64() * span + low;
        if value < high {
            value
        } else {
            next_below(high)
        }
    }
}

/// The largest `f64` strictly below `x` (finite `x`).
fn next_below(x: f64) -> f64 {
    if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else if x == 0.0 {
        -f64::from_bits(1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Adapts any `rand` generator into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible generator for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for RngSource<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Largest `f64` strictly below 1.0.
const MAX_SAMPLE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Replays a fixed list of samples, cycling when exhausted.
///
/// Values are clamped into `[0, 1)` on construction. An empty script yields 0.0.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    script: Vec<f64>,
    pending: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let script: Vec<f64> = values
            .into_iter()
            .map(|v| v.clamp(0.0, MAX_SAMPLE))
            .collect();
        Self {
            pending: script.iter().copied().collect(),
            script,
        }
    }

    /// A script that always yields `value`.
    pub fn constant(value: f64) -> Self {
        Self::new([value])
    }

    /// Number of samples drawn before the script wraps around.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.pending.is_empty() {
            self.pending.extend(self.script.iter().copied());
        }
        self.pending.pop_front().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_random_cycles() {
        let mut rng = ScriptedRandom::new([0.1, 0.5, 0.9]);
        let drawn: Vec<f64> = (0..5).map(|_| rng.next_f64()).collect();
        assert_eq!(drawn, vec![0.1, 0.5, 0.9, 0.1, 0.5]);
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    fn test_scripted_random_clamps() {
        let mut rng = ScriptedRandom::new([1.5, -0.2]);
        let high = rng.next_f64();
        assert!(high < 1.0);
        assert!(high > 0.99);
        assert_eq!(rng.next_f64(), 0.0);
    }

    #[test]
    fn test_empty_script() {
        let mut rng = ScriptedRandom::new(Vec::new());
        assert_eq!(rng.next_f64(), 0.0);
        assert_eq!(rng.next_index(3), 0);
    }

    #[test]
    fn test_next_index_bounds() {
        let mut rng = ScriptedRandom::new([0.0, 0.26, 0.999_999]);
        assert_eq!(rng.next_index(4), 0);
        assert_eq!(rng.next_index(4), 1);
        assert_eq!(rng.next_index(4), 3);
    }

    #[test]
    fn test_next_in_range() {
        let mut rng = ScriptedRandom::constant(0.5);
        assert!((rng.next_in(0.5, 0.5) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_next_in_excludes_upper_bound() {
        let mut rng = ScriptedRandom::constant(1.0);
        for (low, span) in [(0.5, 0.5), (0.6, 0.4), (0.7, 0.3), (4.5, 0.5), (-1.0, 1.0)] {
            let value = rng.next_in(low, span);
            assert!(value < low + span, "{} reached {}", value, low + span);
            assert!(value >= low);
        }
    }

    #[test]
    fn test_next_below() {
        assert!(next_below(1.0) < 1.0);
        assert_eq!(next_below(1.0), MAX_SAMPLE);
        assert!(next_below(0.0) < 0.0);
        assert!(next_below(-2.0) < -2.0);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        for _ in 0..16 {
            let x = a.next_f64();
            assert_eq!(x, b.next_f64());
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_boxed_source() {
        let mut boxed: Box<dyn RandomSource> = Box::new(ScriptedRandom::constant(0.25));
        assert_eq!(boxed.next_index(8), 2);
    }
}
