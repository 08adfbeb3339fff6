//! Hill-climbing variants.
//!
//! Every variant returns either a strictly better neighbor or the current
//! state unchanged, which signals convergence to a local optimum. The
//! runner then escapes by random restart until the escape budget runs out.

use super::neighborhood::{scored_neighbors, select, Choice};
use crate::problem::{Move, MoveGenerator, Problem};
use crate::search::{AlgorithmConfig, EscapeBudget, LocalSearch, SearchProgress};
use rand::Rng;

/// Random restart bounded by `budget`.
fn restart<P: Problem, R: Rng>(budget: &mut EscapeBudget, problem: &P, rng: &mut R) -> Option<P::State> {
    if !budget.try_consume() {
        tracing::debug!(escapes = budget.used(), "escape budget exhausted");
        return None;
    }
    tracing::debug!(escapes = budget.used(), "hill climbing: random restart");
    Some(problem.random_state(rng))
}

/// Scans the full neighborhood and moves to the most improving neighbor.
#[derive(Debug, Clone)]
pub struct BestChoiceHillClimbing {
    config: AlgorithmConfig,
    escapes: EscapeBudget,
}

impl BestChoiceHillClimbing {
    pub fn new(config: AlgorithmConfig) -> Self {
        let escapes = EscapeBudget::new(config.local_optimum_escapes_max);
        Self { config, escapes }
    }
}

impl<P: Problem> LocalSearch<P> for BestChoiceHillClimbing {
    fn name(&self) -> &'static str {
        "best_choice_hill_climbing"
    }

    fn config(&self) -> &AlgorithmConfig {
        &self.config
    }

    fn find_next_state<R: Rng>(&mut self, problem: &P, state: &P::State, _rng: &mut R) -> P::State {
        let scored = scored_neighbors(problem, state, self.config.parallel);
        select(scored, Choice::Best).unwrap_or_else(|| state.clone())
    }

    fn escape_local_optimum<R: Rng>(
        &mut self,
        problem: &P,
        _state: &P::State,
        _best: &P::State,
        _progress: &mut SearchProgress,
        rng: &mut R,
    ) -> Option<P::State> {
        restart(&mut self.escapes, problem, rng)
    }
}

/// Scans the full neighborhood and moves to the least improving neighbor.
#[derive(Debug, Clone)]
pub struct WorstChoiceHillClimbing {
    config: AlgorithmConfig,
    escapes: EscapeBudget,
}

impl WorstChoiceHillClimbing {
    pub fn new(config: AlgorithmConfig) -> Self {
        let escapes = EscapeBudget::new(config.local_optimum_escapes_max);
        Self { config, escapes }
    }
}

impl<P: Problem> LocalSearch<P> for WorstChoiceHillClimbing {
    fn name(&self) -> &'static str {
        "worst_choice_hill_climbing"
    }

    fn config(&self) -> &AlgorithmConfig {
        &self.config
    }

    fn find_next_state<R: Rng>(&mut self, problem: &P, state: &P::State, _rng: &mut R) -> P::State {
        let scored = scored_neighbors(problem, state, self.config.parallel);
        select(scored, Choice::Worst).unwrap_or_else(|| state.clone())
    }

    fn escape_local_optimum<R: Rng>(
        &mut self,
        problem: &P,
        _state: &P::State,
        _best: &P::State,
        _progress: &mut SearchProgress,
        rng: &mut R,
    ) -> Option<P::State> {
        restart(&mut self.escapes, problem, rng)
    }
}

/// Samples random neighbors and takes the first improving one, giving up
/// after `max_trials` draws.
#[derive(Debug, Clone)]
pub struct FirstChoiceHillClimbing {
    config: AlgorithmConfig,
    escapes: EscapeBudget,
    max_trials: usize,
}

impl FirstChoiceHillClimbing {
    pub fn new(config: AlgorithmConfig) -> Self {
        let escapes = EscapeBudget::new(config.local_optimum_escapes_max);
        Self {
            config,
            escapes,
            max_trials: 100,
        }
    }

    /// Sets the number of random draws per step (at least one).
    pub fn with_max_trials(mut self, n: usize) -> Self {
        self.max_trials = n.max(1);
        self
    }

    pub fn max_trials(&self) -> usize {
        self.max_trials
    }
}

impl<P: Problem> LocalSearch<P> for FirstChoiceHillClimbing {
    fn name(&self) -> &'static str {
        "first_choice_hill_climbing"
    }

    fn config(&self) -> &AlgorithmConfig {
        &self.config
    }

    fn find_next_state<R: Rng>(&mut self, problem: &P, state: &P::State, rng: &mut R) -> P::State {
        problem
            .move_generator()
            .random_moves(state, rng)
            .take(self.max_trials)
            .map(|mv| mv.make())
            .find(|candidate| problem.improvement(state, candidate) > 0.0)
            .unwrap_or_else(|| state.clone())
    }

    fn escape_local_optimum<R: Rng>(
        &mut self,
        problem: &P,
        _state: &P::State,
        _best: &P::State,
        _progress: &mut SearchProgress,
        rng: &mut R,
    ) -> Option<P::State> {
        restart(&mut self.escapes, problem, rng)
    }
}

/// Draws exactly one random neighbor per step and takes it only if it
/// improves.
#[derive(Debug, Clone)]
pub struct RandomChoiceHillClimbing {
    config: AlgorithmConfig,
    escapes: EscapeBudget,
}

impl RandomChoiceHillClimbing {
    pub fn new(config: AlgorithmConfig) -> Self {
        let escapes = EscapeBudget::new(config.local_optimum_escapes_max);
        Self { config, escapes }
    }
}

impl<P: Problem> LocalSearch<P> for RandomChoiceHillClimbing {
    fn name(&self) -> &'static str {
        "random_choice_hill_climbing"
    }

    fn config(&self) -> &AlgorithmConfig {
        &self.config
    }

    fn find_next_state<R: Rng>(&mut self, problem: &P, state: &P::State, rng: &mut R) -> P::State {
        problem
            .move_generator()
            .random_moves(state, rng)
            .next()
            .map(|mv| mv.make())
            .filter(|candidate| problem.improvement(state, candidate) > 0.0)
            .unwrap_or_else(|| state.clone())
    }

    fn escape_local_optimum<R: Rng>(
        &mut self,
        problem: &P,
        _state: &P::State,
        _best: &P::State,
        _progress: &mut SearchProgress,
        rng: &mut R,
    ) -> Option<P::State> {
        restart(&mut self.escapes, problem, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_coloring::{Edge, GraphColoringProblem, GraphColoringState, Recolor};
    use crate::random::create_rng;
    use crate::search::{SearchRunner, StopReason};
    use proptest::prelude::*;

    fn petersen_edges() -> Vec<Edge> {
        let pairs = [
            (0, 1), (1, 2), (2, 3), (3, 4), (4, 0),
            (0, 5), (1, 6), (2, 7), (3, 8), (4, 9),
            (5, 7), (7, 9), (9, 6), (6, 8), (8, 5),
        ];
        pairs.iter().copied().map(Edge::from).collect()
    }

    fn conflict_problem() -> GraphColoringProblem<Recolor> {
        GraphColoringProblem::new(10, petersen_edges(), "min_bad_edges")
            .unwrap()
            .with_generator(Recolor::new)
    }

    fn all_improvements(problem: &GraphColoringProblem<Recolor>, state: &GraphColoringState) -> Vec<f64> {
        problem
            .move_generator()
            .available_moves(state)
            .map(|mv| problem.improvement(state, &mv.make()))
            .collect()
    }

    #[test]
    fn test_best_choice_converged_returns_current() {
        let problem = conflict_problem();
        let state = problem.greedy_state();
        let mut climber = BestChoiceHillClimbing::new(AlgorithmConfig::default());
        let mut rng = create_rng(1);
        assert_eq!(climber.find_next_state(&problem, &state, &mut rng), state);
    }

    #[test]
    fn test_best_choice_takes_maximal_improvement() {
        let problem = conflict_problem();
        let state = GraphColoringState::from_colors(&[0; 10]);
        let mut climber = BestChoiceHillClimbing::new(AlgorithmConfig::default());
        let next = climber.find_next_state(&problem, &state, &mut create_rng(1));
        // Every vertex has degree 3: the best single recolor removes 3 conflicts.
        assert_eq!(problem.improvement(&state, &next), 3.0);
        // First-seen tie-break: vertex 0 to color 1.
        assert_eq!(next.color(0), 1);
    }

    #[test]
    fn test_worst_choice_takes_minimal_positive_improvement() {
        let problem = conflict_problem();
        // Vertex 0 conflicts with 1 only; recoloring it removes one conflict,
        // while the monochrome rest offers larger gains.
        let mut colors = vec![0; 10];
        colors[4] = 1;
        colors[5] = 2;
        let state = GraphColoringState::from_colors(&colors);
        let mut climber = WorstChoiceHillClimbing::new(AlgorithmConfig::default());
        let next = climber.find_next_state(&problem, &state, &mut create_rng(1));
        let delta = problem.improvement(&state, &next);
        let min_positive = all_improvements(&problem, &state)
            .into_iter()
            .filter(|d| *d > 0.0)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(delta, min_positive);
        assert!(delta > 0.0);
    }

    #[test]
    fn test_random_choice_single_draw() {
        let problem = conflict_problem();
        let state = problem.greedy_state();
        let mut climber = RandomChoiceHillClimbing::new(AlgorithmConfig::default());
        let mut rng = create_rng(3);
        for _ in 0..20 {
            let next = climber.find_next_state(&problem, &state, &mut rng);
            assert_eq!(next, state, "a proper coloring cannot lose conflicts");
        }
    }

    #[test]
    fn test_first_choice_improves_when_possible() {
        let problem = conflict_problem();
        let state = GraphColoringState::from_colors(&[0; 10]);
        let mut climber = FirstChoiceHillClimbing::new(AlgorithmConfig::default()).with_max_trials(50);
        assert_eq!(climber.max_trials(), 50);
        let next = climber.find_next_state(&problem, &state, &mut create_rng(7));
        assert!(problem.improvement(&state, &next) > 0.0);
    }

    #[test]
    fn test_hill_climbing_reaches_proper_coloring() {
        let problem = conflict_problem();
        let config = AlgorithmConfig::default()
            .with_local_optimum_moves_threshold(1)
            .with_local_optimum_escapes_max(Some(0))
            .with_seed(42);
        let mut climber = BestChoiceHillClimbing::new(config);
        let initial = GraphColoringState::from_colors(&[0; 10]);
        let result = SearchRunner::run_from(&problem, &mut climber, initial, &mut ()).unwrap();
        assert_eq!(result.stop_reason, StopReason::EscapesExhausted);
        assert!(result.improving_moves > 0);
        assert_eq!(result.accepted_moves, result.improving_moves);
        assert!(result.best_objective <= 15.0);
    }

    #[test]
    fn test_restart_escape_respects_budget() {
        let problem = conflict_problem();
        let state = problem.greedy_state();
        let mut climber = RandomChoiceHillClimbing::new(
            AlgorithmConfig::default().with_local_optimum_escapes_max(Some(1)),
        );
        let mut progress = SearchProgress::default();
        let mut rng = create_rng(5);
        let first = climber.escape_local_optimum(&problem, &state, &state, &mut progress, &mut rng);
        assert!(first.is_some_and(|s| s.is_proper(problem.graph())));
        let second = climber.escape_local_optimum(&problem, &state, &state, &mut progress, &mut rng);
        assert!(second.is_none());
    }

    proptest! {
        #[test]
        fn prop_best_choice_is_maximal(colors in proptest::collection::vec(0usize..4, 10)) {
            let problem = conflict_problem();
            let state = GraphColoringState::from_colors(&colors);
            let deltas = all_improvements(&problem, &state);
            let mut climber = BestChoiceHillClimbing::new(AlgorithmConfig::default());
            let next = climber.find_next_state(&problem, &state, &mut create_rng(0));
            let chosen = problem.improvement(&state, &next);
            if deltas.iter().any(|d| *d > 0.0) {
                prop_assert!(chosen > 0.0);
                prop_assert!(deltas.iter().all(|d| *d <= chosen));
            } else {
                prop_assert_eq!(next, state);
            }
        }

        #[test]
        fn prop_worst_choice_is_minimal(colors in proptest::collection::vec(0usize..4, 10)) {
            let problem = conflict_problem();
            let state = GraphColoringState::from_colors(&colors);
            let deltas = all_improvements(&problem, &state);
            let mut climber = WorstChoiceHillClimbing::new(AlgorithmConfig::default());
            let next = climber.find_next_state(&problem, &state, &mut create_rng(0));
            let chosen = problem.improvement(&state, &next);
            if deltas.iter().any(|d| *d > 0.0) {
                prop_assert!(chosen > 0.0);
                prop_assert!(deltas.iter().filter(|d| **d > 0.0).all(|d| *d >= chosen));
            } else {
                prop_assert_eq!(next, state);
            }
        }
    }
}
