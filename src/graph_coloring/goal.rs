//! Objectives for graph coloring and the goal registry.
//!
//! # References
//!
//! - Johnson, Aragon, McGeoch & Schevon (1991), "Optimization by Simulated
//!   Annealing: An Experimental Evaluation; Part II, Graph Coloring and
//!   Number Partitioning", *Operations Research* 39(3), 378-406.

use super::model::{Graph, GraphColoringState};
use crate::error::{LocalSearchError, Result};
use crate::problem::Goal;
use std::collections::HashSet;
use std::sync::Arc;

/// A boxed goal over colorings.
pub type BoxedColoringGoal = Box<dyn Goal<GraphColoringState>>;

/// Builds a goal for a graph.
pub type GoalFactory = fn(Arc<Graph>) -> BoxedColoringGoal;

/// Every registered goal, keyed by its stable name.
pub const GOAL_REGISTRY: &[(&str, GoalFactory)] = &[
    (MinColors::NAME, build_min_colors),
    (MinBadEdges::NAME, build_min_bad_edges),
];

fn build_min_colors(graph: Arc<Graph>) -> BoxedColoringGoal {
    Box::new(MinColors::new(graph))
}

fn build_min_bad_edges(graph: Arc<Graph>) -> BoxedColoringGoal {
    Box::new(MinBadEdges::new(graph))
}

/// Looks up a goal by name and builds it for `graph`.
pub fn goal_by_name(name: &str, graph: Arc<Graph>) -> Result<BoxedColoringGoal> {
    GOAL_REGISTRY
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, factory)| factory(graph))
        .ok_or_else(|| LocalSearchError::UnknownGoal(name.to_string()))
}

/// Names of all registered goals.
pub fn goal_names() -> impl Iterator<Item = &'static str> {
    GOAL_REGISTRY.iter().map(|(name, _)| *name)
}

/// Per-color statistics shared by every coloring goal.
#[derive(Debug, Clone)]
pub struct ColoringMetrics {
    graph: Arc<Graph>,
}

impl ColoringMetrics {
    pub fn new(graph: Arc<Graph>) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Number of distinct colors used.
    pub fn num_colors(&self, state: &GraphColoringState) -> usize {
        state
            .coloring()
            .iter()
            .map(|v| v.color)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Conflicting edges per color: entry `c` counts edges whose endpoints
    /// both have color `c`. Sized to the largest color in use plus one.
    pub fn bad_edges(&self, state: &GraphColoringState) -> Vec<usize> {
        let mut bad = vec![0; state.max_color().map_or(0, |c| c + 1)];
        for edge in self.graph.edges() {
            let color = state.color(edge.start);
            if color == state.color(edge.end) {
                bad[color] += 1;
            }
        }
        bad
    }

    /// Vertex count per color, sized to `n_vertices` (or the largest color
    /// in use plus one, whichever is larger).
    pub fn color_classes(&self, state: &GraphColoringState) -> Vec<usize> {
        let len = self
            .graph
            .n_vertices()
            .max(state.max_color().map_or(0, |c| c + 1));
        let mut classes = vec![0; len];
        for v in state.coloring() {
            classes[v.color] += 1;
        }
        classes
    }

    pub fn human_readable(&self, state: &GraphColoringState) -> String {
        format!("{} colors", self.num_colors(state))
    }
}

/// Minimizes the number of colors, penalizing conflicts.
///
/// Objective: `Σ 2·|Cᵢ|·|Eᵢ| − Σ |Cᵢ|²`, where `Cᵢ` is the i-th color class
/// and `Eᵢ` its conflicting edges. Favoring large classes drives colors
/// out of use; the penalty term makes every local optimum a proper
/// coloring (Johnson et al. 1991).
#[derive(Debug, Clone)]
pub struct MinColors {
    metrics: ColoringMetrics,
}

impl MinColors {
    pub const NAME: &'static str = "min_colors";

    pub fn new(graph: Arc<Graph>) -> Self {
        Self {
            metrics: ColoringMetrics::new(graph),
        }
    }

    pub fn metrics(&self) -> &ColoringMetrics {
        &self.metrics
    }
}

impl Goal<GraphColoringState> for MinColors {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn objective(&self, state: &GraphColoringState) -> f64 {
        let bad = self.metrics.bad_edges(state);
        let classes = self.metrics.color_classes(state);
        let penalty: usize = bad
            .iter()
            .zip(&classes)
            .map(|(&e, &c)| 2 * c * e)
            .sum();
        let reward: usize = classes.iter().map(|&c| c * c).sum();
        penalty as f64 - reward as f64
    }

    fn human_readable_objective(&self, state: &GraphColoringState) -> String {
        self.metrics.human_readable(state)
    }
}

/// Minimizes the total number of conflicting edges.
#[derive(Debug, Clone)]
pub struct MinBadEdges {
    metrics: ColoringMetrics,
}

impl MinBadEdges {
    pub const NAME: &'static str = "min_bad_edges";

    pub fn new(graph: Arc<Graph>) -> Self {
        Self {
            metrics: ColoringMetrics::new(graph),
        }
    }

    pub fn metrics(&self) -> &ColoringMetrics {
        &self.metrics
    }
}

impl Goal<GraphColoringState> for MinBadEdges {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn objective(&self, state: &GraphColoringState) -> f64 {
        self.metrics.bad_edges(state).iter().sum::<usize>() as f64
    }

    fn human_readable_objective(&self, state: &GraphColoringState) -> String {
        self.metrics.human_readable(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle4() -> Arc<Graph> {
        Arc::new(Graph::from_pairs(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap())
    }

    #[test]
    fn test_metrics_proper_two_coloring() {
        let metrics = ColoringMetrics::new(cycle4());
        let state = GraphColoringState::from_colors(&[0, 1, 0, 1]);
        assert_eq!(metrics.bad_edges(&state), vec![0, 0]);
        assert_eq!(metrics.color_classes(&state), vec![2, 2, 0, 0]);
        assert_eq!(metrics.num_colors(&state), 2);
    }

    #[test]
    fn test_metrics_bad_edges_bucketed_by_color() {
        let metrics = ColoringMetrics::new(cycle4());
        let state = GraphColoringState::from_colors(&[0, 0, 1, 1]);
        let bad = metrics.bad_edges(&state);
        assert_eq!(bad[0], 1);
        assert_eq!(bad[1], 1);
    }

    #[test]
    fn test_metrics_sparse_color_ids() {
        let metrics = ColoringMetrics::new(cycle4());
        let state = GraphColoringState::from_colors(&[0, 3, 0, 3]);
        assert_eq!(metrics.num_colors(&state), 2);
        assert_eq!(metrics.bad_edges(&state), vec![0, 0, 0, 0]);
        assert_eq!(metrics.color_classes(&state), vec![2, 0, 0, 2]);
    }

    #[test]
    fn test_human_readable() {
        let goal = MinColors::new(cycle4());
        let state = GraphColoringState::from_colors(&[0, 1, 2, 1]);
        assert_eq!(goal.human_readable_objective(&state), "3 colors");
    }

    #[test]
    fn test_min_colors_prefers_fewer_colors() {
        let goal = MinColors::new(cycle4());
        let two = GraphColoringState::from_colors(&[0, 1, 0, 1]);
        let three = GraphColoringState::from_colors(&[0, 1, 2, 1]);
        assert!(goal.objective(&two) < goal.objective(&three));
        assert!((goal.objective(&two) - (-8.0)).abs() < 1e-12);
    }

    #[test]
    fn test_min_colors_penalizes_conflicts() {
        let goal = MinColors::new(cycle4());
        let proper = GraphColoringState::from_colors(&[0, 1, 0, 1]);
        let monochrome = GraphColoringState::from_colors(&[0, 0, 0, 0]);
        // 2·4·4 − 16 = 16 versus −8.
        assert!((goal.objective(&monochrome) - 16.0).abs() < 1e-12);
        assert!(goal.objective(&proper) < goal.objective(&monochrome));
    }

    #[test]
    fn test_min_bad_edges() {
        let goal = MinBadEdges::new(cycle4());
        assert_eq!(goal.objective(&GraphColoringState::from_colors(&[0, 0, 1, 1])), 2.0);
        assert_eq!(goal.objective(&GraphColoringState::from_colors(&[0, 1, 0, 1])), 0.0);
    }

    #[test]
    fn test_registry_lookup() {
        let goal = goal_by_name("min_bad_edges", cycle4()).unwrap();
        assert_eq!(goal.name(), "min_bad_edges");
        let goal = goal_by_name("min_colors", cycle4()).unwrap();
        assert_eq!(goal.name(), "min_colors");
        assert_eq!(goal_names().count(), 2);
    }

    #[test]
    fn test_registry_unknown_name() {
        let err = goal_by_name("max_fun", cycle4()).err().unwrap();
        assert_eq!(err, LocalSearchError::UnknownGoal("max_fun".into()));
    }
}
