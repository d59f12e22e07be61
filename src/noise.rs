use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Replayable stream of standard-normal samples.
///
/// Samples are cached as they are drawn; [NoiseSource::reset] only rewinds the
/// cursor, so every run that resets and then draws in the same order sees the
/// same noise, whatever parameters changed in between.
#[derive(Debug)]
pub struct NoiseSource {
    rng: StdRng,
    cache: Vec<f64>,
    cursor: usize,
}

impl NoiseSource {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            cache: Vec::new(),
            cursor: 0,
        }
    }

    pub fn sample(&mut self) -> f64 {
        while self.cursor >= self.cache.len() {
            let value: f64 = self.rng.sample(StandardNormal);
            self.cache.push(value);
        }
        let value = self.cache[self.cursor];
        self.cursor += 1;
        value
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

impl Default for NoiseSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}
