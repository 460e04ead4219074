//! Randomness source for layout generation, content draws and battle rolls.
//!
//! Everything random in the game goes through [`Dice`] so a run can be
//! replayed from a seed and tests can script individual rolls.

use rand::seq::index;
use rand::Rng;

pub trait Dice {
    /// Uniform value in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Uniform integer in `lo..=hi`.
    fn roll_range(&mut self, lo: usize, hi: usize) -> usize;

    /// Uniform index into a collection of `len` elements. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// `amount` distinct indices from `0..len`, drawn without replacement.
    /// `amount` is clamped to `len`.
    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize>;
}

/// Adapts any `rand` generator to [`Dice`].
#[derive(Debug, Clone)]
pub struct RngDice<R> {
    rng: R,
}

impl<R: Rng> RngDice<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Dice for RngDice<R> {
    fn next_uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn roll_range(&mut self, lo: usize, hi: usize) -> usize {
        debug_assert!(lo <= hi, "empty range {lo}..={hi}");
        self.rng.gen_range(lo..=hi)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "cannot pick from an empty collection");
        self.rng.gen_range(0..len)
    }

    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, len, amount.min(len)).into_vec()
    }
}
