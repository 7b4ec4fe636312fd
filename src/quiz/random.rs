use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the random draws behind distractors and answer placement.
///
/// Both ranges are half-open. An empty range (`high <= low`) or a non-finite
/// upper bound yields `low` instead of panicking, so a zero answer still
/// produces distractors.
pub trait RangeSource {
    fn next_in_range(&mut self, low: u64, high: u64) -> u64;

    fn next_f64_in_range(&mut self, low: f64, high: f64) -> f64;
}

/// [`RangeSource`] backed by any `rand` generator.
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RangeSource for RngSource<R> {
    fn next_in_range(&mut self, low: u64, high: u64) -> u64 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..high)
    }

    fn next_f64_in_range(&mut self, low: f64, high: f64) -> f64 {
        // also catches NaN and infinite bounds
        if !(high > low) || !high.is_finite() {
            return low;
        }
        self.rng.gen_range(low..high)
    }
}
