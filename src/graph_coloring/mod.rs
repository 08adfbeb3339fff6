//! Graph coloring: states, goals, and neighborhoods.
//!
//! A [`GraphColoringState`] assigns one color per vertex. Goals are looked
//! up by name in [`GOAL_REGISTRY`]. The [`KempeChain`] neighborhood
//! recolors a vertex and swaps the two affected color classes along its
//! Kempe chain, which keeps proper colorings proper.
//!
//! # References
//!
//! - Kempe, A. B. (1879), "On the Geographical Problem of the Four Colours".
//! - Johnson et al. (1991), "Optimization by Simulated Annealing: An
//!   Experimental Evaluation; Part II".

mod domain;
mod goal;
mod kempe_chain;
mod model;
mod problem;
mod recolor;

pub use domain::ColorDomain;
pub use goal::{
    goal_by_name, goal_names, BoxedColoringGoal, ColoringMetrics, GoalFactory, MinBadEdges,
    MinColors, GOAL_REGISTRY,
};
pub use kempe_chain::{KempeChain, KempeChainMove};
pub use model::{Edge, Graph, GraphColoringState, Vertex};
pub use problem::GraphColoringProblem;
pub use recolor::{Recolor, RecolorMove};
