//! Outer search loop.
//!
//! # Algorithm
//!
//! 1. Start from a given or random state
//! 2. At each step:
//!    a. Ask the algorithm for the next state
//!    b. If it differs from the current one, accept it and update the best
//!    c. Otherwise count a stalled step; after enough of them, ask the
//!       algorithm to escape the local optimum
//! 3. Terminate on the iteration budget, time limit, cancellation, or when
//!    no further escape is possible

use super::types::{LocalSearch, SearchObserver, SearchProgress};
use crate::error::Result;
use crate::problem::Problem;
use crate::random::rng_from;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The iteration budget was used up.
    MaxIterations,
    /// The algorithm could not escape the local optimum any more.
    EscapesExhausted,
    /// The wall-clock limit elapsed.
    TimeLimit,
    /// Cancelled externally.
    Cancelled,
}

/// Result of a local search run.
#[derive(Debug, Clone)]
pub struct SearchResult<S: Clone> {
    /// The best state found.
    pub best: S,

    /// Objective of the best state.
    pub best_objective: f64,

    /// Human-readable objective of the best state.
    pub best_description: String,

    /// The state the search ended in.
    pub last: S,

    /// Total number of steps.
    pub iterations: usize,

    /// Step at which the best state was found (0 = initial state).
    pub best_iteration: usize,

    /// Number of accepted state changes, escapes included.
    pub accepted_moves: usize,

    /// Number of accepted changes that improved the current state.
    pub improving_moves: usize,

    /// Number of successful local-optimum escapes.
    pub escapes: usize,

    /// Why the search stopped.
    pub stop_reason: StopReason,

    /// Best objective, recorded at start and on every new best.
    pub objective_history: Vec<f64>,
}

/// Tracks the current and best states of a run.
struct Incumbent<S> {
    current: S,
    current_objective: f64,
    best: S,
    best_objective: f64,
    best_iteration: usize,
    accepted_moves: usize,
    improving_moves: usize,
    history: Vec<f64>,
}

impl<S: Clone + PartialEq> Incumbent<S> {
    fn new<P: Problem<State = S>>(problem: &P, initial: S) -> Self {
        let objective = problem.objective(&initial);
        Self {
            best: initial.clone(),
            current: initial,
            current_objective: objective,
            best_objective: objective,
            best_iteration: 0,
            accepted_moves: 0,
            improving_moves: 0,
            history: vec![objective],
        }
    }

    fn accept<P, O>(&mut self, problem: &P, next: S, iteration: usize, observer: &mut O)
    where
        P: Problem<State = S>,
        O: SearchObserver<S>,
    {
        if problem.improvement(&self.current, &next) > 0.0 {
            self.improving_moves += 1;
        }
        self.accepted_moves += 1;
        self.current = next;
        self.current_objective = problem.objective(&self.current);
        observer.on_state_accepted(iteration, &self.current, self.current_objective);

        if problem.improvement(&self.best, &self.current) > 0.0 {
            self.best = self.current.clone();
            self.best_objective = self.current_objective;
            self.best_iteration = iteration;
            self.history.push(self.best_objective);
            tracing::debug!(
                iteration,
                objective = self.best_objective,
                "new best: {}",
                problem.human_readable_objective(&self.best)
            );
            observer.on_new_best(iteration, &self.best, self.best_objective);
        }
    }
}

/// Drives a [`LocalSearch`] algorithm over a [`Problem`].
pub struct SearchRunner;

impl SearchRunner {
    /// Runs from a random initial state.
    pub fn run<P, A, O>(problem: &P, algorithm: &mut A, observer: &mut O) -> Result<SearchResult<P::State>>
    where
        P: Problem,
        A: LocalSearch<P>,
        O: SearchObserver<P::State>,
    {
        Self::run_with_cancel(problem, algorithm, None, observer, None)
    }

    /// Runs from the given initial state.
    pub fn run_from<P, A, O>(
        problem: &P,
        algorithm: &mut A,
        initial: P::State,
        observer: &mut O,
    ) -> Result<SearchResult<P::State>>
    where
        P: Problem,
        A: LocalSearch<P>,
        O: SearchObserver<P::State>,
    {
        Self::run_with_cancel(problem, algorithm, Some(initial), observer, None)
    }

    /// Runs with an optional initial state and cancellation token.
    ///
    /// If `cancel` is set to `true`, the search stops before the next step
    /// and returns the best state found so far.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run_with_cancel<P, A, O>(
        problem: &P,
        algorithm: &mut A,
        initial: Option<P::State>,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult<P::State>>
    where
        P: Problem,
        A: LocalSearch<P>,
        O: SearchObserver<P::State>,
    {
        let config = algorithm.config().clone();
        config.validate()?;

        let mut rng = rng_from(config.seed);
        let initial = match initial {
            Some(state) => {
                problem.validate_state(&state)?;
                state
            }
            None => problem.random_state(&mut rng),
        };
        let mut incumbent = Incumbent::new(problem, initial);
        let mut progress = SearchProgress::default();
        let mut escapes = 0usize;
        let deadline = config
            .time_limit_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms));

        let stop_reason = loop {
            if progress.iteration >= config.max_iterations {
                break StopReason::MaxIterations;
            }
            if cancel.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                break StopReason::Cancelled;
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                break StopReason::TimeLimit;
            }

            let next = algorithm.find_next_state(problem, &incumbent.current, &mut rng);
            progress.iteration += 1;

            if next != incumbent.current {
                progress.steps_since_last_update = 0;
                incumbent.accept(problem, next, progress.iteration, observer);
                continue;
            }

            progress.steps_since_last_update += 1;
            if progress.steps_since_last_update < config.local_optimum_moves_threshold {
                continue;
            }

            let escaped = algorithm.escape_local_optimum(
                problem,
                &incumbent.current,
                &incumbent.best,
                &mut progress,
                &mut rng,
            );
            match escaped {
                None => break StopReason::EscapesExhausted,
                Some(state) => {
                    escapes += 1;
                    progress.steps_since_last_update = 0;
                    tracing::debug!(iteration = progress.iteration, escapes, "escaped local optimum");
                    if state != incumbent.current {
                        incumbent.accept(problem, state, progress.iteration, observer);
                    }
                }
            }
        };

        let best_description = problem.human_readable_objective(&incumbent.best);
        tracing::info!(
            algorithm = algorithm.name(),
            iterations = progress.iteration,
            best_objective = incumbent.best_objective,
            ?stop_reason,
            "search finished: {best_description}"
        );

        Ok(SearchResult {
            best: incumbent.best,
            best_objective: incumbent.best_objective,
            best_description,
            last: incumbent.current,
            iterations: progress.iteration,
            best_iteration: incumbent.best_iteration,
            accepted_moves: incumbent.accepted_moves,
            improving_moves: incumbent.improving_moves,
            escapes,
            stop_reason,
            objective_history: incumbent.history,
        })
    }
}
