//! Simulated annealing configuration.

use crate::error::{LocalSearchError, Result};
use crate::search::AlgorithmConfig;

/// Configuration for [`SimulatedAnnealing`](super::SimulatedAnnealing).
///
/// The three escape probabilities are relative weights: they need not sum
/// to one, but at least one must be positive.
///
/// # Examples
///
/// ```
/// use u_localsearch::sa::SimulatedAnnealingConfig;
/// use u_localsearch::search::AlgorithmConfig;
///
/// let config = SimulatedAnnealingConfig::default()
///     .with_initial_temperature(10.0)
///     .with_cooling_step(0.995)
///     .with_escape_probabilities(0.0, 0.5, 0.5)
///     .with_base(AlgorithmConfig::default().with_seed(42));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulatedAnnealingConfig {
    /// Outer-loop settings, including the escape cap.
    pub base: AlgorithmConfig,

    /// Starting temperature `T_0`.
    pub initial_temperature: f64,

    /// Multiplicative decay base `a` in `T_k = T_0 · a^k`, in (0, 1].
    pub cooling_step: f64,

    /// Floor below which the temperature never falls. Must be positive.
    pub min_temperature: f64,

    /// Weight of the random-restart escape.
    pub escape_random_restart_probability: f64,

    /// Weight of the perturbation escape.
    pub escape_perturbation_probability: f64,

    /// Number of consecutive random moves applied by a perturbation.
    pub escape_perturbation_size: usize,

    /// Weight of the reheat escape.
    pub escape_reheat_probability: f64,

    /// Fraction of `initial_temperature` restored by a reheat.
    pub escape_reheat_ratio: f64,
}

impl Default for SimulatedAnnealingConfig {
    fn default() -> Self {
        Self {
            base: AlgorithmConfig::default(),
            initial_temperature: 5.0,
            cooling_step: 0.999,
            min_temperature: 1e-10,
            escape_random_restart_probability: 0.33,
            escape_perturbation_probability: 0.33,
            escape_perturbation_size: 50,
            escape_reheat_probability: 0.33,
            escape_reheat_ratio: 0.1,
        }
    }
}

impl SimulatedAnnealingConfig {
    pub fn with_base(mut self, base: AlgorithmConfig) -> Self {
        self.base = base;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_step(mut self, a: f64) -> Self {
        self.cooling_step = a;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    /// Sets the restart, perturbation, and reheat weights.
    pub fn with_escape_probabilities(mut self, restart: f64, perturbation: f64, reheat: f64) -> Self {
        self.escape_random_restart_probability = restart;
        self.escape_perturbation_probability = perturbation;
        self.escape_reheat_probability = reheat;
        self
    }

    pub fn with_escape_perturbation_size(mut self, n: usize) -> Self {
        self.escape_perturbation_size = n;
        self
    }

    pub fn with_escape_reheat_ratio(mut self, ratio: f64) -> Self {
        self.escape_reheat_ratio = ratio;
        self
    }

    /// Escape weights in restart, perturbation, reheat order.
    pub fn escape_weights(&self) -> [f64; 3] {
        [
            self.escape_random_restart_probability,
            self.escape_perturbation_probability,
            self.escape_reheat_probability,
        ]
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(invalid(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if !(self.min_temperature > 0.0) {
            return Err(invalid(format!(
                "min_temperature must be positive, got {}",
                self.min_temperature
            )));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(invalid(
                "min_temperature must be less than initial_temperature".into(),
            ));
        }
        if !(self.cooling_step > 0.0 && self.cooling_step <= 1.0) {
            return Err(invalid(format!(
                "cooling_step must be in (0, 1], got {}",
                self.cooling_step
            )));
        }
        let weights = self.escape_weights();
        if weights.iter().any(|w| !(w.is_finite() && *w >= 0.0)) {
            return Err(invalid(format!(
                "escape probabilities must be finite and non-negative, got {weights:?}"
            )));
        }
        if weights.iter().all(|w| *w == 0.0) {
            return Err(invalid("at least one escape probability must be positive".into()));
        }
        if self.escape_perturbation_probability > 0.0 && self.escape_perturbation_size == 0 {
            return Err(invalid(
                "escape_perturbation_size must be at least 1 when perturbation is enabled".into(),
            ));
        }
        if !(self.escape_reheat_ratio > 0.0 && self.escape_reheat_ratio.is_finite()) {
            return Err(invalid(format!(
                "escape_reheat_ratio must be positive, got {}",
                self.escape_reheat_ratio
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> LocalSearchError {
    LocalSearchError::InvalidConfig(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulatedAnnealingConfig::default();
        assert!((config.initial_temperature - 5.0).abs() < 1e-12);
        assert!((config.cooling_step - 0.999).abs() < 1e-12);
        assert!((config.min_temperature - 1e-10).abs() < 1e-20);
        assert_eq!(config.escape_weights(), [0.33, 0.33, 0.33]);
        assert_eq!(config.escape_perturbation_size, 50);
        assert!((config.escape_reheat_ratio - 0.1).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_all_zero_escape_weights() {
        let config = SimulatedAnnealingConfig::default().with_escape_probabilities(0.0, 0.0, 0.0);
        assert!(matches!(
            config.validate(),
            Err(LocalSearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_negative_weight() {
        let config = SimulatedAnnealingConfig::default().with_escape_probabilities(-0.1, 1.0, 0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_cooling_step_range() {
        let config = SimulatedAnnealingConfig::default();
        assert!(config.clone().with_cooling_step(1.0).validate().is_ok());
        assert!(config.clone().with_cooling_step(0.0).validate().is_err());
        assert!(config.with_cooling_step(1.5).validate().is_err());
    }

    #[test]
    fn test_validate_temperatures() {
        let config = SimulatedAnnealingConfig::default();
        assert!(config.clone().with_initial_temperature(0.0).validate().is_err());
        assert!(config.clone().with_min_temperature(0.0).validate().is_err());
        assert!(config
            .with_initial_temperature(1.0)
            .with_min_temperature(2.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_perturbation_size() {
        let config = SimulatedAnnealingConfig::default().with_escape_perturbation_size(0);
        assert!(config.clone().validate().is_err());
        assert!(config
            .with_escape_probabilities(1.0, 0.0, 1.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_base_config() {
        let config = SimulatedAnnealingConfig::default()
            .with_base(AlgorithmConfig::default().with_local_optimum_moves_threshold(0));
        assert!(config.validate().is_err());
    }
}
