//! Core traits shared by every search strategy.

use crate::error::Result;
use rand::Rng;
use std::fmt::Debug;

/// A request to transform a source state into a new state.
///
/// Implementations hold (or borrow) the source state and must never mutate
/// it: [`make`](Move::make) always returns an owned copy.
pub trait Move<S> {
    /// Builds the state this move leads to.
    fn make(&self) -> S;
}

/// Produces moves for a given state.
///
/// Generators are stateless apart from a reference to the static instance
/// data, so the same generator can serve any number of states.
pub trait MoveGenerator<S>: Send + Sync {
    /// The move type. It may borrow both the generator and the source state.
    type Move<'a>: Move<S>
    where
        Self: 'a,
        S: 'a;

    /// Enumerates every move reachable from `state`, excluding no-op moves.
    ///
    /// The order must be deterministic for a given state so that
    /// first-seen tie-breaking in hill climbing is reproducible.
    fn available_moves<'a>(&'a self, state: &'a S) -> impl Iterator<Item = Self::Move<'a>> + 'a;

    /// Returns an unbounded lazy stream of random moves from `state`.
    ///
    /// Each call starts a fresh, independent stream. Consumers pull as many
    /// moves as they need. The stream only ends early when `state` has no
    /// move at all.
    fn random_moves<'a, R: Rng>(
        &'a self,
        state: &'a S,
        rng: &'a mut R,
    ) -> impl Iterator<Item = Self::Move<'a>> + 'a;
}

/// An objective over states. Lower values are better.
///
/// Goals are pure: evaluating a state never mutates it, so scoring may run
/// concurrently over immutable snapshots.
pub trait Goal<S>: Send + Sync {
    /// Stable name under which the goal is registered.
    fn name(&self) -> &'static str;

    /// Computes the objective value of a state (minimized).
    fn objective(&self, state: &S) -> f64;

    /// Formats the objective for presentation.
    fn human_readable_objective(&self, state: &S) -> String {
        format!("{}", self.objective(state))
    }
}

/// Defines a local search problem.
///
/// # Minimization
///
/// The objective is minimized. [`improvement`](Problem::improvement) is
/// positive when the second state is better than the first.
///
/// # Examples
///
/// ```ignore
/// let delta = problem.improvement(&current, &candidate);
/// if delta > 0.0 {
///     // candidate is strictly better
/// }
/// ```
pub trait Problem: Send + Sync {
    /// The state (candidate solution) type.
    type State: Clone + PartialEq + Debug + Send + Sync;

    /// The neighborhood used by every search strategy on this problem.
    type Generator: MoveGenerator<Self::State>;

    /// Returns the move generator for this problem.
    fn move_generator(&self) -> &Self::Generator;

    /// Computes the objective of a state. Lower is better.
    fn objective(&self, state: &Self::State) -> f64;

    /// Signed objective delta from `a` to `b`. Positive means `b` is better.
    ///
    /// Antisymmetric: `improvement(a, b) == -improvement(b, a)`.
    fn improvement(&self, a: &Self::State, b: &Self::State) -> f64 {
        self.objective(a) - self.objective(b)
    }

    /// Creates a fresh random state.
    fn random_state<R: Rng>(&self, rng: &mut R) -> Self::State;

    /// Checks that a caller-supplied state belongs to this instance.
    ///
    /// Runners call this on an explicit initial state before evaluating it.
    fn validate_state(&self, _state: &Self::State) -> Result<()> {
        Ok(())
    }

    /// Formats the objective of a state for presentation.
    fn human_readable_objective(&self, state: &Self::State) -> String {
        format!("{}", self.objective(state))
    }
}
