use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Seeded random source. Each simulation run owns its own state so runs can
/// be replayed and dispatched to workers independently.
#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Stream for run `index` of a batch rooted at `base`.
    pub fn derive(base: u64, index: u64) -> Self {
        Self::from_seed(base.wrapping_add(index))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}
