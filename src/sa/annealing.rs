//! Simulated annealing with local-optimum escapes.

use super::config::SimulatedAnnealingConfig;
use super::schedule::ExponentialSchedule;
use crate::error::{LocalSearchError, Result};
use crate::problem::{Move, MoveGenerator, Problem};
use crate::search::{AlgorithmConfig, EscapeBudget, LocalSearch, SearchProgress};
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

/// Ways to leave a local optimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeStrategy {
    /// Discard the current state for a fresh random one.
    RandomRestart,
    /// Random-walk a fixed number of moves away from the current state.
    Perturbation,
    /// Keep the state, restart the schedule from a fraction of `T_0`.
    Reheat,
}

impl EscapeStrategy {
    /// All strategies, in the order of
    /// [`SimulatedAnnealingConfig::escape_weights`].
    pub const ALL: [EscapeStrategy; 3] = [
        EscapeStrategy::RandomRestart,
        EscapeStrategy::Perturbation,
        EscapeStrategy::Reheat,
    ];
}

/// Simulated annealing: stochastic hill climbing that may go downhill.
///
/// Each step draws one random neighbor. Improving neighbors are always
/// accepted; others with the Metropolis probability `exp(delta / T)`.
/// The temperature then advances exactly once.
#[derive(Debug, Clone)]
pub struct SimulatedAnnealing {
    config: SimulatedAnnealingConfig,
    schedule: ExponentialSchedule,
    temperature: f64,
    escapes: EscapeBudget,
    strategies: WeightedIndex<f64>,
}

impl SimulatedAnnealing {
    /// Creates the algorithm, validating `config`.
    pub fn new(config: SimulatedAnnealingConfig) -> Result<Self> {
        config.validate()?;
        let strategies = WeightedIndex::new(config.escape_weights())
            .map_err(|e| LocalSearchError::InvalidConfig(format!("escape weights: {e}")))?;
        Ok(Self {
            schedule: ExponentialSchedule::new(
                config.initial_temperature,
                config.cooling_step,
                config.min_temperature,
            ),
            temperature: config.initial_temperature,
            escapes: EscapeBudget::new(config.base.local_optimum_escapes_max),
            strategies,
            config,
        })
    }

    pub fn annealing_config(&self) -> &SimulatedAnnealingConfig {
        &self.config
    }

    /// Temperature used by the next Metropolis test.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Steps since the schedule last (re)started.
    pub fn cooling_time(&self) -> u64 {
        self.schedule.cooling_time()
    }

    /// Escape attempts so far.
    pub fn escapes_used(&self) -> usize {
        self.escapes.used()
    }

    /// Metropolis acceptance probability for a non-improving `delta`.
    pub fn transition_probability(&self, delta: f64) -> f64 {
        (delta / self.temperature).exp().min(1.0)
    }

    fn update_temperature(&mut self) {
        self.temperature = self.schedule.advance();
    }

    /// Sets the temperature to `initial_temperature · escape_reheat_ratio`,
    /// rewinds the cooling counter and clears the stall counter. The state
    /// is returned unchanged.
    ///
    /// Only the next Metropolis test runs at the reheated temperature; the
    /// schedule then continues from `T_0 · a^0`.
    pub fn reheat<S: Clone>(&mut self, state: &S, progress: &mut SearchProgress) -> S {
        let temperature = self.config.initial_temperature * self.config.escape_reheat_ratio;
        self.schedule.reset();
        self.temperature = temperature;
        progress.steps_since_last_update = 0;
        tracing::trace!(temperature, "reheat");
        state.clone()
    }

    /// Applies `size` consecutive random moves to `state`.
    pub fn perturb<P: Problem, R: Rng>(problem: &P, state: &P::State, size: usize, rng: &mut R) -> P::State {
        let mut current = state.clone();
        for _ in 0..size {
            let next = match problem.move_generator().random_moves(&current, rng).next() {
                Some(mv) => mv.make(),
                None => break,
            };
            current = next;
        }
        current
    }
}

impl<P: Problem> LocalSearch<P> for SimulatedAnnealing {
    fn name(&self) -> &'static str {
        "simulated_annealing"
    }

    fn config(&self) -> &AlgorithmConfig {
        &self.config.base
    }

    fn find_next_state<R: Rng>(&mut self, problem: &P, state: &P::State, rng: &mut R) -> P::State {
        let candidate = problem
            .move_generator()
            .random_moves(state, rng)
            .next()
            .map(|mv| mv.make());

        let next = match candidate {
            None => state.clone(),
            Some(candidate) => {
                let delta = problem.improvement(state, &candidate);
                if delta > 0.0 || rng.random::<f64>() < self.transition_probability(delta) {
                    candidate
                } else {
                    state.clone()
                }
            }
        };

        self.update_temperature();
        next
    }

    fn escape_local_optimum<R: Rng>(
        &mut self,
        problem: &P,
        state: &P::State,
        _best: &P::State,
        progress: &mut SearchProgress,
        rng: &mut R,
    ) -> Option<P::State> {
        if !self.escapes.try_consume() {
            tracing::debug!(escapes = self.escapes.used(), "escape budget exhausted");
            return None;
        }

        let strategy = EscapeStrategy::ALL[self.strategies.sample(rng)];
        tracing::debug!(
            ?strategy,
            escapes = self.escapes.used(),
            temperature = self.temperature,
            "simulated annealing: escaping local optimum"
        );

        Some(match strategy {
            EscapeStrategy::RandomRestart => problem.random_state(rng),
            EscapeStrategy::Perturbation => {
                Self::perturb(problem, state, self.config.escape_perturbation_size, rng)
            }
            EscapeStrategy::Reheat => self.reheat(state, progress),
        })
    }
}
