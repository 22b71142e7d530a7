//! Seedable random source for market generation
//!
//! Wraps `ChaCha8Rng` so identical seeds produce identical markets on every
//! platform. The seed is kept so it can be reported alongside the output.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub struct MarketRng {
    seed: u64,
    rng: ChaCha8Rng,
}

impl MarketRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Fresh seed from OS entropy
    pub fn from_entropy() -> Self {
        Self::from_seed_u64(rand::random())
    }

    /// Use `seed` if given, otherwise draw one
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed_u64)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for MarketRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}
