//! Full-neighborhood scoring and selection for best/worst-choice climbing.

use crate::problem::{Move, MoveGenerator, Problem};

/// Which improving neighbor to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Choice {
    /// Largest improvement.
    Best,
    /// Smallest positive improvement.
    Worst,
}

/// Materializes every neighbor of `state` with its improvement over `state`,
/// in enumeration order.
pub(crate) fn scored_neighbors<P: Problem>(
    problem: &P,
    state: &P::State,
    parallel: bool,
) -> Vec<(P::State, f64)> {
    let candidates: Vec<P::State> = problem
        .move_generator()
        .available_moves(state)
        .map(|mv| mv.make())
        .collect();
    let scores = score(problem, state, &candidates, parallel);
    candidates.into_iter().zip(scores).collect()
}

#[cfg(feature = "parallel")]
fn score<P: Problem>(problem: &P, state: &P::State, candidates: &[P::State], parallel: bool) -> Vec<f64> {
    use rayon::prelude::*;

    if parallel {
        candidates
            .par_iter()
            .map(|candidate| problem.improvement(state, candidate))
            .collect()
    } else {
        candidates
            .iter()
            .map(|candidate| problem.improvement(state, candidate))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn score<P: Problem>(problem: &P, state: &P::State, candidates: &[P::State], _parallel: bool) -> Vec<f64> {
    candidates
        .iter()
        .map(|candidate| problem.improvement(state, candidate))
        .collect()
}

/// Picks the improving neighbor according to `choice`, ties going to the
/// first one enumerated. Returns `None` when nothing improves.
pub(crate) fn select<S>(scored: Vec<(S, f64)>, choice: Choice) -> Option<S> {
    let mut chosen: Option<(S, f64)> = None;
    for (candidate, delta) in scored {
        if delta <= 0.0 {
            continue;
        }
        let replace = match (&chosen, choice) {
            (None, _) => true,
            (Some((_, kept)), Choice::Best) => delta > *kept,
            (Some((_, kept)), Choice::Worst) => delta < *kept,
        };
        if replace {
            chosen = Some((candidate, delta));
        }
    }
    chosen.map(|(state, _)| state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored() -> Vec<(&'static str, f64)> {
        vec![
            ("worse", -2.0),
            ("small-a", 1.0),
            ("big-a", 3.0),
            ("small-b", 1.0),
            ("same", 0.0),
            ("big-b", 3.0),
        ]
    }

    #[test]
    fn test_select_best_first_seen_wins() {
        assert_eq!(select(scored(), Choice::Best), Some("big-a"));
    }

    #[test]
    fn test_select_worst_first_seen_wins() {
        assert_eq!(select(scored(), Choice::Worst), Some("small-a"));
    }

    #[test]
    fn test_select_nothing_improves() {
        let scored = vec![("a", 0.0), ("b", -1.0)];
        assert_eq!(select(scored.clone(), Choice::Best), None);
        assert_eq!(select(scored, Choice::Worst), None);
    }

    #[test]
    fn test_select_empty() {
        assert_eq!(select(Vec::<(u8, f64)>::new(), Choice::Best), None);
    }
}
