use rand::{rngs::StdRng, Rng, SeedableRng};
use shared::domain::CreatureId;

pub const POOL_MIN: u16 = 1;
pub const POOL_MAX: u16 = 150;

/// Source of candidate catalog ids for a draw. Implementations only pick
/// numbers; the uniqueness rejection and the resample cap live in the
/// controller.
pub trait IdSampler: Send {
    fn sample(&mut self) -> CreatureId;
}

pub struct UniformSampler {
    rng: StdRng,
}

impl UniformSampler {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSampler for UniformSampler {
    fn sample(&mut self) -> CreatureId {
        CreatureId(self.rng.random_range(POOL_MIN..=POOL_MAX))
    }
}
