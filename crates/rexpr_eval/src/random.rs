//! Random number sources for `RAND` expressions.
//!
//! Every `RAND` node reads from the source carried by the evaluation
//! environment, so a caller can pin a seed for reproducible results or
//! share one generator between threads.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform floats in `[0, 1)`.
///
/// Uses enum dispatch rather than a trait object; the set of sources is
/// closed.
#[derive(Debug, Default)]
pub enum RandomSource {
    /// One generator behind a lock, shared by every caller.
    Shared(Mutex<StdRng>),
    /// The calling thread's lazily seeded generator.
    #[default]
    PerThread,
}

impl RandomSource {
    /// Deterministic source: the same seed yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        RandomSource::Shared(Mutex::new(StdRng::seed_from_u64(seed)))
    }

    /// Shared source seeded from the operating system.
    pub fn from_entropy() -> Self {
        RandomSource::Shared(Mutex::new(StdRng::from_entropy()))
    }

    pub fn per_thread() -> Self {
        RandomSource::PerThread
    }

    /// Next float in `[0, 1)`.
    pub fn next_f64(&self) -> f64 {
        match self {
            RandomSource::Shared(rng) => rng.lock().gen::<f64>(),
            RandomSource::PerThread => rand::thread_rng().gen::<f64>(),
        }
    }
}

/// Random source shared between environments.
pub type SharedRandom = Arc<RandomSource>;

/// Create a shared, deterministic random source.
pub fn seeded_random(seed: u64) -> SharedRandom {
    Arc::new(RandomSource::seeded(seed))
}

/// Create a shared source backed by per-thread generators.
pub fn thread_random() -> SharedRandom {
    Arc::new(RandomSource::PerThread)
}
