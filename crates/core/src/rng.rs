use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of randomness for the shuffle passes.
///
/// Passes only ever ask for a uniform integer in a closed range or a
/// uniform float in `[0, 1)`, so test doubles can script exact outcomes.
pub trait RandomSource {
    /// Uniform integer in `lo..=hi`. Returns `lo` when the range is inverted.
    fn range_inclusive(&mut self, lo: i64, hi: i64) -> i64;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn range_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
        (**self).range_inclusive(lo, hi)
    }

    fn unit(&mut self) -> f64 {
        (**self).unit()
    }
}

#[derive(Debug, Clone)]
pub struct RngState {
    seed: Option<u64>,
    rng: StdRng,
}

impl RngState {
    /// Fresh generator seeded from OS entropy. One per reading.
    pub fn from_entropy() -> Self {
        Self {
            seed: None,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for RngState {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for RngState {
    fn range_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
        if lo >= hi {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}
