//! Configuration shared by every local search algorithm.

use crate::error::{LocalSearchError, Result};

/// Settings of the outer search loop.
///
/// # Examples
///
/// ```
/// use u_localsearch::search::AlgorithmConfig;
///
/// let config = AlgorithmConfig::default()
///     .with_max_iterations(5_000)
///     .with_local_optimum_moves_threshold(20)
///     .with_local_optimum_escapes_max(Some(3))
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlgorithmConfig {
    /// Maximum number of search steps.
    pub max_iterations: usize,

    /// Consecutive steps without a state change before the algorithm is
    /// asked to escape the local optimum.
    pub local_optimum_moves_threshold: usize,

    /// Maximum number of escapes. `None` means unlimited.
    pub local_optimum_escapes_max: Option<usize>,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,

    /// Optional wall-clock limit in milliseconds, checked every step.
    pub time_limit_ms: Option<u64>,

    /// Score full neighborhoods with rayon (requires the `parallel` feature;
    /// ignored otherwise).
    pub parallel: bool,
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            local_optimum_moves_threshold: 50,
            local_optimum_escapes_max: Some(10),
            seed: None,
            time_limit_ms: None,
            parallel: false,
        }
    }
}

impl AlgorithmConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_local_optimum_moves_threshold(mut self, n: usize) -> Self {
        self.local_optimum_moves_threshold = n;
        self
    }

    pub fn with_local_optimum_escapes_max(mut self, max: Option<usize>) -> Self {
        self.local_optimum_escapes_max = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.local_optimum_moves_threshold == 0 {
            return Err(LocalSearchError::InvalidConfig(
                "local_optimum_moves_threshold must be at least 1".into(),
            ));
        }
        if self.time_limit_ms == Some(0) {
            return Err(LocalSearchError::InvalidConfig(
                "time_limit_ms must be positive or None".into(),
            ));
        }
        Ok(())
    }
}
