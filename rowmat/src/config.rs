//! Configuration for random row sampling

/// Configuration for [`DenseMatrix::sample_with_config`](crate::DenseMatrix::sample_with_config)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleConfig {
    /// Seed for a reproducible RNG; `None` uses the thread-local RNG
    pub seed: Option<u64>,
}

impl SampleConfig {
    /// Create config with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Set the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Get the RNG seed, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
