//! The algorithm contract and its bookkeeping types.

use super::config::AlgorithmConfig;
use crate::problem::Problem;
use rand::Rng;

/// A local search strategy driven by [`SearchRunner`](super::SearchRunner).
///
/// The runner owns the current and best states; the algorithm decides the
/// next state each step and how to leave a local optimum.
pub trait LocalSearch<P: Problem> {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Settings of the outer loop.
    fn config(&self) -> &AlgorithmConfig;

    /// Computes the next state. Returning `state` unchanged signals that
    /// no move was taken this step.
    fn find_next_state<R: Rng>(&mut self, problem: &P, state: &P::State, rng: &mut R) -> P::State;

    /// Called when the state has not changed for
    /// [`local_optimum_moves_threshold`](AlgorithmConfig::local_optimum_moves_threshold)
    /// steps. `None` means no further escape is possible and the search
    /// terminates.
    fn escape_local_optimum<R: Rng>(
        &mut self,
        problem: &P,
        state: &P::State,
        best: &P::State,
        progress: &mut SearchProgress,
        rng: &mut R,
    ) -> Option<P::State>;
}

/// Step counters of a running search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchProgress {
    /// Steps taken so far.
    pub iteration: usize,
    /// Steps since the current state last changed.
    pub steps_since_last_update: usize,
}

/// Counts local-optimum escapes against an optional cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeBudget {
    max: Option<usize>,
    used: usize,
}

impl EscapeBudget {
    pub fn new(max: Option<usize>) -> Self {
        Self { max, used: 0 }
    }

    /// Records an escape attempt. Returns `false` once the cap is exceeded.
    pub fn try_consume(&mut self) -> bool {
        self.used += 1;
        self.max.is_none_or(|max| self.used <= max)
    }

    /// Escape attempts recorded so far (including refused ones).
    pub fn used(&self) -> usize {
        self.used
    }
}

/// Receives notifications from a running search.
///
/// Observers are never required for correctness. The unit type is the
/// no-op observer.
pub trait SearchObserver<S> {
    /// A new current state was accepted.
    fn on_state_accepted(&mut self, _iteration: usize, _state: &S, _objective: f64) {}

    /// A new best state was found.
    fn on_new_best(&mut self, _iteration: usize, _state: &S, _objective: f64) {}
}

impl<S> SearchObserver<S> for () {}
