//! Game RNG wrapper.
//!
//! Wraps `ChaCha8Rng` so interactive play gets entropy-seeded draws
//! while tests and `--seed` runs get reproducible ones. Callers that
//! need randomness take `&mut impl Rng` and are handed `rng.0`.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// RNG for all game randomness (row sampling, region synthesis).
pub struct GameRng(pub ChaCha8Rng);

impl GameRng {
    /// Entropy-seeded RNG for normal interactive play.
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }

    /// Reproducible RNG for tests and `--seed` runs.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}
