//! The graph coloring problem.

use super::goal::{goal_by_name, BoxedColoringGoal};
use super::kempe_chain::KempeChain;
use super::model::{Edge, Graph, GraphColoringState};
use crate::error::Result;
use crate::problem::{MoveGenerator, Problem};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

/// Graph coloring over a static graph, scored by a registered goal.
///
/// The neighborhood defaults to [`KempeChain`]; any other generator over
/// [`GraphColoringState`] can be swapped in with
/// [`with_generator`](GraphColoringProblem::with_generator).
///
/// # Examples
///
/// ```
/// use u_localsearch::graph_coloring::{Edge, GraphColoringProblem, GraphColoringState};
/// use u_localsearch::problem::Problem;
///
/// let edges = vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)];
/// let problem = GraphColoringProblem::new(3, edges, "min_colors").unwrap();
/// let state = problem.greedy_state();
/// assert_eq!(problem.human_readable_objective(&state), "3 colors");
/// ```
pub struct GraphColoringProblem<G = KempeChain> {
    graph: Arc<Graph>,
    goal: BoxedColoringGoal,
    generator: G,
}

impl GraphColoringProblem<KempeChain> {
    /// Builds a problem from a vertex count, an edge list, and a goal name
    /// resolved through the goal registry.
    pub fn new(n_vertices: usize, edges: Vec<Edge>, goal: &str) -> Result<Self> {
        let graph = Arc::new(Graph::new(n_vertices, edges)?);
        Self::from_graph(graph, goal)
    }

    pub fn from_graph(graph: Arc<Graph>, goal: &str) -> Result<Self> {
        let goal = goal_by_name(goal, Arc::clone(&graph))?;
        Ok(Self {
            generator: KempeChain::new(Arc::clone(&graph)),
            graph,
            goal,
        })
    }
}

impl<G> GraphColoringProblem<G> {
    /// Replaces the neighborhood, building it from the problem's graph.
    pub fn with_generator<H, F>(self, build: F) -> GraphColoringProblem<H>
    where
        F: FnOnce(Arc<Graph>) -> H,
    {
        GraphColoringProblem {
            generator: build(Arc::clone(&self.graph)),
            graph: self.graph,
            goal: self.goal,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn goal_name(&self) -> &'static str {
        self.goal.name()
    }

    /// Builds a state where vertex `i` has color `colors[i]`, checked
    /// against the graph.
    pub fn state(&self, colors: &[usize]) -> Result<GraphColoringState> {
        let state = GraphColoringState::from_colors(colors);
        self.graph.validate_coloring(&state)?;
        Ok(state)
    }

    /// First-fit greedy coloring in vertex-index order.
    pub fn greedy_state(&self) -> GraphColoringState {
        let order: Vec<usize> = (0..self.graph.n_vertices()).collect();
        self.first_fit(&order)
    }

    /// Colors vertices in `order`, each with the smallest color unused by
    /// its already-colored neighbors. Always yields a proper coloring.
    fn first_fit(&self, order: &[usize]) -> GraphColoringState {
        let n = self.graph.n_vertices();
        let mut colors: Vec<Option<usize>> = vec![None; n];
        let mut taken = vec![false; n];
        for &v in order {
            let neighbors = self.graph.neighbors(v);
            for &u in neighbors {
                if let Some(c) = colors[u] {
                    taken[c] = true;
                }
            }
            let color = taken.iter().position(|t| !t).unwrap_or(0);
            colors[v] = Some(color);
            for &u in neighbors {
                if let Some(c) = colors[u] {
                    taken[c] = false;
                }
            }
        }
        let colors: Vec<usize> = colors.into_iter().map(|c| c.unwrap_or(0)).collect();
        GraphColoringState::from_colors(&colors)
    }
}

impl<G> Problem for GraphColoringProblem<G>
where
    G: MoveGenerator<GraphColoringState>,
{
    type State = GraphColoringState;
    type Generator = G;

    fn move_generator(&self) -> &G {
        &self.generator
    }

    fn objective(&self, state: &GraphColoringState) -> f64 {
        self.goal.objective(state)
    }

    /// First-fit greedy over a random vertex order: a fresh, proper coloring.
    fn random_state<R: Rng>(&self, rng: &mut R) -> GraphColoringState {
        let mut order: Vec<usize> = (0..self.graph.n_vertices()).collect();
        order.shuffle(rng);
        self.first_fit(&order)
    }

    fn validate_state(&self, state: &GraphColoringState) -> Result<()> {
        self.graph.validate_coloring(state)
    }

    fn human_readable_objective(&self, state: &GraphColoringState) -> String {
        self.goal.human_readable_objective(state)
    }
}
